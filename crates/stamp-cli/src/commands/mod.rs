//! Command handlers, one module per subcommand.

pub mod apply;
pub mod list;
