use chrono::NaiveDate;

use cashflow_domain::{start_of_month_before, TransactionRecord};

/// Number of calendar months of history used to estimate flow and shocks.
pub const LOOKBACK_MONTHS: u32 = 6;

/// Historical records dated on or after `cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub cutoff: NaiveDate,
}

impl LookbackWindow {
    /// Window starting on the first day of the month [`LOOKBACK_MONTHS`] before `now`.
    pub fn ending_at(now: NaiveDate) -> Self {
        Self {
            cutoff: start_of_month_before(now, LOOKBACK_MONTHS),
        }
    }

    /// Future-flagged records never belong to the window.
    pub fn contains(&self, record: &TransactionRecord) -> bool {
        record.is_historical() && record.date >= self.cutoff
    }

    pub fn select<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        records.iter().filter(|record| self.contains(record)).collect()
    }
}
