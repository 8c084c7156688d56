//! cashflow-core
//!
//! Cash-flow projection engine and supporting services.
//! Depends on cashflow-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod error;
pub mod feedback;
pub mod format;
pub mod ledger_view;
pub mod lookback;
pub mod projection_service;
pub mod random;
pub mod regular_flow;
pub mod shock_model;
pub mod simulator;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use error::CoreError;
pub use feedback::*;
pub use format::*;
pub use ledger_view::*;
pub use lookback::*;
pub use projection_service::*;
pub use random::*;
pub use regular_flow::*;
pub use shock_model::*;
pub use simulator::*;
pub use summary_service::*;
pub use time::*;
