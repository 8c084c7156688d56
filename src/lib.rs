#![doc(test(attr(deny(warnings))))]

//! Cashflow Tracker wires the projection engine, configuration, and JSON
//! ledger storage into an interactive shell.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Tracker tracing initialized.");
    });
}
