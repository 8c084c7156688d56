//! Aggregated views over historical transactions.

use serde::{Deserialize, Serialize};

use crate::common::MonthKey;

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub total_income: f64,
    pub total_expense: f64,
}

impl MonthlySummary {
    pub fn new(month: MonthKey) -> Self {
        Self {
            month,
            total_income: 0.0,
            total_expense: 0.0,
        }
    }

    pub fn net(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

/// Total amount recorded against one category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_name: String,
    pub total_amount: f64,
}
