use std::path::Path;

use cashflow_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing ledger snapshots.
pub trait LedgerStorage: Send + Sync {
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError>;
    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError>;
    fn list_ledgers(&self) -> Result<Vec<String>, CoreError>;
    fn save_ledger_to_path(&self, ledger: &Ledger, path: &Path) -> Result<(), CoreError>;
    fn load_ledger_from_path(&self, path: &Path) -> Result<Ledger, CoreError>;
}

/// Detects values the projection engine would accept but that are almost certainly wrong.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();

    for txn in &ledger.transactions {
        if !txn.amount.is_finite() {
            warnings.push(format!("transaction {} has a non-finite amount", txn.id));
        } else if txn.amount < 0.0 {
            warnings.push(format!(
                "transaction {} has negative amount {} (direction carries the sign)",
                txn.id, txn.amount
            ));
        }
    }

    for holding in &ledger.holdings {
        if holding.quantity < 0.0 {
            warnings.push(format!(
                "holding {} ({}) has negative quantity {}",
                holding.id, holding.name, holding.quantity
            ));
        }
        if holding.current_price < 0.0 {
            warnings.push(format!(
                "holding {} ({}) has negative price {}",
                holding.id, holding.name, holding.current_price
            ));
        }
    }
    warnings
}
