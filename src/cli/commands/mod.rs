pub mod config;
pub mod holding;
pub mod ledger;
pub mod projection;
pub mod summary;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in system::definitions()
        .into_iter()
        .chain(ledger::definitions())
        .chain(transaction::definitions())
        .chain(holding::definitions())
        .chain(projection::definitions())
        .chain(summary::definitions())
        .chain(config::definitions())
    {
        registry.register(entry);
    }
}
