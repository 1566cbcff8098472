use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the database schema
    DbCreate,

    /// Drop all tables
    DbDrop,

    /// Insert the test user
    DbSeed,
}
