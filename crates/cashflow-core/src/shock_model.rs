//! Frequency and size of extraordinary expenses.

use cashflow_domain::{ShockProfile, TransactionRecord};

use crate::lookback::LOOKBACK_MONTHS;

/// Derives a [`ShockProfile`] from the extraordinary expenses of a lookback window.
///
/// The event count is divided by the fixed lookback length, not by the number of
/// months that actually hold data, so short histories understate the probability.
pub struct ShockModel;

impl ShockModel {
    pub fn derive<'a, I>(records: I) -> ShockProfile
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let amounts: Vec<f64> = records
            .into_iter()
            .filter(|record| {
                record.is_extraordinary && record.is_expense() && record.is_historical()
            })
            .map(|record| record.amount)
            .collect();

        if amounts.is_empty() {
            return ShockProfile::default();
        }

        let count = amounts.len() as f64;
        ShockProfile {
            event_probability_per_month: count / f64::from(LOOKBACK_MONTHS),
            average_event_magnitude: amounts.iter().sum::<f64>() / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn probability_divides_by_lookback_length() {
        let records = vec![
            TransactionRecord::expense(date(2024, 2, 10), 600.0).extraordinary(),
            TransactionRecord::expense(date(2024, 3, 10), 300.0).extraordinary(),
            TransactionRecord::expense(date(2024, 3, 11), 50.0),
        ];
        let profile = ShockModel::derive(&records);
        assert_eq!(profile.event_probability_per_month, 2.0 / 6.0);
        assert_eq!(profile.average_event_magnitude, 450.0);
    }

    #[test]
    fn extraordinary_income_is_not_a_shock() {
        let records = vec![TransactionRecord::income(date(2024, 2, 10), 5000.0).extraordinary()];
        assert_eq!(ShockModel::derive(&records), ShockProfile::default());
    }

    #[test]
    fn frequent_events_can_exceed_one_per_month() {
        let records: Vec<_> = (1..=8)
            .map(|day| TransactionRecord::expense(date(2024, 1, day), 10.0).extraordinary())
            .collect();
        let profile = ShockModel::derive(&records);
        assert!(profile.event_probability_per_month > 1.0);
    }
}
