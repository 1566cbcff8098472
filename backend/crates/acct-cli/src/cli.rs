use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "acct-admin")]
#[command(about = "Account service database administration")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite file to operate on (defaults to the configured database path)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}
