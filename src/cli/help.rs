use crate::cli::output::{detail, section};
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for entry in registry.list() {
        detail(format!("  {:<10} {}", entry.name, entry.description));
    }
    detail("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    section(format!("Help: {}", entry.name));
    detail(format!("  Description: {}", entry.description));
    detail(format!("  Usage: {}", entry.usage));
}
