use clap::{Parser, Subcommand};

use crate::command::bump::BumpArgs;
use crate::command::max_lines::MaxLinesArgs;
use crate::command::models::ModelsArgs;
use crate::command::sync::SyncArgs;

#[derive(Parser)]
#[command(name = "cargo-localver", bin_name = "cargo")]
pub struct CargoCli {
    #[command(subcommand)]
    pub command: CargoCommand,
}

#[derive(Subcommand)]
pub enum CargoCommand {
    /// Stamp and sync Cargo workspace versions for local builds.
    #[command(subcommand)]
    Localver(LocalverCommand),
}

#[derive(Subcommand, Debug)]
pub enum LocalverCommand {
    /// Sync workspace and member versions to the release ledger
    Sync(SyncArgs),

    /// Bump the workspace version in place and restamp it
    Bump(BumpArgs),

    /// Fail if Rust source files exceed a line limit
    MaxLines(MaxLinesArgs),

    /// Fetch and cache model identifiers from models.dev
    Models(ModelsArgs),
}
