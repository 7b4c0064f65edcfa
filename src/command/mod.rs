//! Command implementations, one module per subcommand.

pub mod bump;
pub mod max_lines;
pub mod models;
pub mod sync;
