#![doc = include_str!("../README.md")]

pub mod cargo;
pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod ops;
pub mod version;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::{CargoCommand, LocalverCommand};

    env_logger::init();

    let cli = cli::CargoCli::parse();
    let CargoCommand::Localver(command) = cli.command;
    match command {
        LocalverCommand::Sync(args) => command::sync::execute(args),
        LocalverCommand::Bump(args) => command::bump::execute(args),
        LocalverCommand::MaxLines(args) => command::max_lines::execute(args),
        LocalverCommand::Models(args) => command::models::execute(args),
    }
}
