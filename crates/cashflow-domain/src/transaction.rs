//! Domain models for ledger transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::MonthKey;

/// Direction of money movement relative to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    /// Multiplier applied to a non-negative amount to obtain its signed value.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Income => 1.0,
            Direction::Expense => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Income => "INCOME",
            Direction::Expense => "EXPENSE",
        };
        f.write_str(label)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Direction::Income),
            "expense" => Ok(Direction::Expense),
            other => Err(format!("unknown direction `{other}` (expected income or expense)")),
        }
    }
}

/// A single dated ledger entry as seen by the projection engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Non-negative magnitude; the sign comes from `direction`.
    pub amount: f64,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Planned entries that have not happened yet.
    #[serde(default)]
    pub is_future: bool,
    /// One-off entries kept out of the baseline and modelled as shocks.
    #[serde(default)]
    pub is_extraordinary: bool,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, amount: f64, direction: Direction) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            direction,
            category_id: None,
            category_name: None,
            is_future: false,
            is_extraordinary: false,
        }
    }

    pub fn income(date: NaiveDate, amount: f64) -> Self {
        Self::new(date, amount, Direction::Income)
    }

    pub fn expense(date: NaiveDate, amount: f64) -> Self {
        Self::new(date, amount, Direction::Expense)
    }

    pub fn extraordinary(mut self) -> Self {
        self.is_extraordinary = true;
        self
    }

    pub fn future(mut self) -> Self {
        self.is_future = true;
        self
    }

    pub fn with_category(mut self, id: Option<Uuid>, name: impl Into<String>) -> Self {
        self.category_id = id;
        self.category_name = Some(name.into());
        self
    }

    /// Amount with income positive and expense negative.
    pub fn signed_amount(&self) -> f64 {
        self.direction.sign() * self.amount
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from(self.date)
    }

    /// True for entries that count towards history (everything not flagged future).
    pub fn is_historical(&self) -> bool {
        !self.is_future
    }

    pub fn is_income(&self) -> bool {
        matches!(self.direction, Direction::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.direction, Direction::Expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn signed_amount_follows_direction() {
        assert_eq!(TransactionRecord::income(date(2024, 1, 1), 300.0).signed_amount(), 300.0);
        assert_eq!(TransactionRecord::expense(date(2024, 1, 1), 120.0).signed_amount(), -120.0);
    }

    #[test]
    fn builder_flags_are_applied() {
        let record = TransactionRecord::expense(date(2024, 5, 9), 80.0)
            .extraordinary()
            .future()
            .with_category(None, "Travel");
        assert!(record.is_extraordinary);
        assert!(!record.is_historical());
        assert_eq!(record.category_name.as_deref(), Some("Travel"));
        assert_eq!(record.month_key().to_string(), "2024-05");
    }

    #[test]
    fn direction_uses_uppercase_wire_names() {
        let json = serde_json::to_string(&Direction::Expense).unwrap();
        assert_eq!(json, "\"EXPENSE\"");
        assert_eq!("Income".parse::<Direction>(), Ok(Direction::Income));
        assert!("transfer".parse::<Direction>().is_err());
    }

    #[test]
    fn missing_flags_default_to_false() {
        let json = format!(
            r#"{{"id":"{}","date":"2024-02-03","amount":12.5,"direction":"INCOME"}}"#,
            Uuid::nil()
        );
        let record: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert!(!record.is_future);
        assert!(!record.is_extraordinary);
        assert!(record.category_id.is_none());
    }
}
