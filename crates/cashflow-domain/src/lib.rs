//! cashflow-domain
//!
//! Pure domain models (transactions, holdings, ledger snapshots, projection results).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod holding;
pub mod ledger;
pub mod projection;
pub mod summary;
pub mod transaction;

pub use common::*;
pub use holding::*;
pub use ledger::*;
pub use projection::*;
pub use summary::*;
pub use transaction::*;
