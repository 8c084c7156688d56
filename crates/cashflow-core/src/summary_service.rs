//! Balance and aggregate views over historical transactions.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use cashflow_domain::{CategorySummary, Direction, MonthlySummary, TransactionRecord};

use crate::CoreError;

/// Label used for records without a category name.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

pub struct SummaryService;

impl SummaryService {
    /// Signed sum of every non-future record.
    pub fn current_balance(records: &[TransactionRecord]) -> f64 {
        records
            .iter()
            .filter(|record| record.is_historical())
            .map(TransactionRecord::signed_amount)
            .sum()
    }

    /// Cash balance plus holdings valuation.
    pub fn total_assets(records: &[TransactionRecord], holdings_value: f64) -> f64 {
        Self::current_balance(records) + holdings_value
    }

    /// Income and expense per month, newest month first.
    pub fn monthly_summaries(records: &[TransactionRecord]) -> Vec<MonthlySummary> {
        let mut months = BTreeMap::new();
        for record in records.iter().filter(|record| record.is_historical()) {
            let key = record.month_key();
            let summary = months.entry(key).or_insert_with(|| MonthlySummary::new(key));
            match record.direction {
                Direction::Income => summary.total_income += record.amount,
                Direction::Expense => summary.total_expense += record.amount,
            }
        }
        months.into_values().rev().collect()
    }

    /// Totals per category for one direction within `start..=end`, largest first.
    pub fn category_summaries(
        records: &[TransactionRecord],
        start: NaiveDate,
        end: NaiveDate,
        direction: Direction,
    ) -> Result<Vec<CategorySummary>, CoreError> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "start date {start} is after end date {end}"
            )));
        }

        let mut totals: HashMap<&str, f64> = HashMap::new();
        for record in records {
            if !record.is_historical()
                || record.direction != direction
                || record.date < start
                || record.date > end
            {
                continue;
            }
            let name = record
                .category_name
                .as_deref()
                .unwrap_or(UNCATEGORIZED_LABEL);
            *totals.entry(name).or_insert(0.0) += record.amount;
        }

        let mut summaries: Vec<CategorySummary> = totals
            .into_iter()
            .map(|(name, total)| CategorySummary {
                category_name: name.to_string(),
                total_amount: total,
            })
            .collect();
        summaries.sort_by(|a, b| {
            b.total_amount
                .total_cmp(&a.total_amount)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::income(date(2024, 1, 25), 3000.0).with_category(None, "Salary"),
            TransactionRecord::expense(date(2024, 1, 5), 900.0).with_category(None, "Rent"),
            TransactionRecord::expense(date(2024, 1, 9), 120.0).with_category(None, "Food"),
            TransactionRecord::expense(date(2024, 2, 9), 80.0).with_category(None, "Food"),
            TransactionRecord::expense(date(2024, 2, 10), 40.0),
            TransactionRecord::expense(date(2024, 3, 1), 5000.0).future(),
        ]
    }

    #[test]
    fn balance_ignores_future_records() {
        assert_eq!(
            SummaryService::current_balance(&sample()),
            3000.0 - 900.0 - 120.0 - 80.0 - 40.0
        );
        assert_eq!(SummaryService::total_assets(&sample(), 100.0), 1960.0);
    }

    #[test]
    fn monthly_summaries_are_newest_first() {
        let months = SummaryService::monthly_summaries(&sample());
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month.to_string(), "2024-02");
        assert_eq!(months[0].total_expense, 120.0);
        assert_eq!(months[1].net(), 3000.0 - 1020.0);
    }

    #[test]
    fn category_summaries_sort_by_amount() {
        let rows = SummaryService::category_summaries(
            &sample(),
            date(2024, 1, 1),
            date(2024, 2, 29),
            Direction::Expense,
        )
        .expect("valid range");
        let names: Vec<&str> = rows.iter().map(|row| row.category_name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", UNCATEGORIZED_LABEL]);
        assert_eq!(rows[1].total_amount, 200.0);
    }

    #[test]
    fn category_summaries_reject_inverted_range() {
        let err = SummaryService::category_summaries(
            &sample(),
            date(2024, 3, 1),
            date(2024, 1, 1),
            Direction::Income,
        )
        .expect_err("inverted range");
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
