//! Implementation of the `stamp list` command.

use stamp_adapters::BuiltinCatalog;
use stamp_core::application::ports::ModuleCatalog;

use crate::{cli::GlobalArgs, error::CliResult, output::OutputManager};

pub fn execute(_global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let catalog = BuiltinCatalog::new();
    let modules = catalog.list();

    // An empty catalog is a valid, successful listing.
    output.header("Available modules:");
    for module in modules {
        output.print(&format!("  {:<12} {}", module.slug, module.description));
    }

    Ok(())
}
