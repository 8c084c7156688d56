//! Baseline (recurring) monthly cash flow.

use std::collections::BTreeMap;

use cashflow_domain::{MonthKey, RegularFlowProfile, TransactionRecord};

/// Averages per-month nets of the non-extraordinary records.
pub struct RegularFlowEstimator;

impl RegularFlowEstimator {
    /// Income minus expense per month, restricted to regular historical records.
    pub fn monthly_nets<'a, I>(records: I) -> BTreeMap<MonthKey, f64>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut nets = BTreeMap::new();
        for record in records {
            if record.is_extraordinary || !record.is_historical() {
                continue;
            }
            *nets.entry(record.month_key()).or_insert(0.0) += record.signed_amount();
        }
        nets
    }

    /// Mean of the monthly nets; zero when no month qualifies.
    pub fn estimate<'a, I>(records: I) -> RegularFlowProfile
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let nets = Self::monthly_nets(records);
        if nets.is_empty() {
            return RegularFlowProfile::default();
        }
        let total: f64 = nets.values().sum();
        RegularFlowProfile {
            monthly_net: total / nets.len() as f64,
        }
    }
}
