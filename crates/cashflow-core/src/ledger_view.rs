use cashflow_domain::{Ledger, TransactionRecord};

/// Read-only access to transaction history and the current holdings valuation.
pub trait LedgerView {
    /// Full history, including future-flagged and extraordinary records.
    fn transactions(&self) -> &[TransactionRecord];

    /// Sum of `quantity * current_price` over every holding, evaluated now.
    fn holdings_value(&self) -> f64;
}

impl LedgerView for Ledger {
    fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    fn holdings_value(&self) -> f64 {
        Ledger::holdings_value(self)
    }
}

/// Borrowed view over data materialised elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub transactions: &'a [TransactionRecord],
    pub holdings_value: f64,
}

impl<'a> LedgerView for LedgerSnapshot<'a> {
    fn transactions(&self) -> &[TransactionRecord] {
        self.transactions
    }

    fn holdings_value(&self) -> f64 {
        self.holdings_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random::SequenceSource, time::FixedClock, ProjectionService};
    use cashflow_domain::AssetHolding;
    use chrono::NaiveDate;

    #[test]
    fn snapshot_and_ledger_project_identically() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let mut ledger = Ledger::new("View");
        ledger.add_transaction(TransactionRecord::income(date, 1200.0));
        ledger.add_transaction(TransactionRecord::expense(date, 300.0));
        ledger.add_holding(AssetHolding::new("Fund", 4.0, 250.0));

        let snapshot = LedgerSnapshot {
            transactions: &ledger.transactions,
            holdings_value: 1000.0,
        };
        assert_eq!(LedgerView::holdings_value(&ledger), snapshot.holdings_value());

        let service = ProjectionService::default();
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        let from_ledger = service
            .project_view(&ledger, Some(6), &clock, &mut SequenceSource::constant(0.5))
            .unwrap();
        let from_snapshot = service
            .project_view(&snapshot, Some(6), &clock, &mut SequenceSource::constant(0.5))
            .unwrap();
        assert_eq!(from_ledger, from_snapshot);
    }
}
