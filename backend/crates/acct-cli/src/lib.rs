//! acct-cli library
//!
//! Schema and seed operations behind the `acct-admin` binary.

pub mod admin;
pub mod cli;
pub mod commands;
pub mod error;


pub use admin::{SEED_EMAIL, SEED_PASSWORD, db_create, db_drop, db_seed};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{AdminError, Result};
