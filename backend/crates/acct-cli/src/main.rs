//! acct-admin - account service database administration
//!
//! ```bash
//! acct-admin db-create
//! acct-admin db-seed
//! acct-admin db-drop --database ./scratch.db
//! ```

use acct_auth::CredentialHasher;
use acct_cli::{Cli, Commands, Result, db_create, db_drop, db_seed};
use acct_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<&'static str> {
    // Same config as the server; the JWT secret is not needed here
    let config = Config::load()?;
    config.database.validate()?;
    config.auth.validate_hashing()?;

    let database_path: PathBuf = match cli.database {
        Some(path) => path,
        None => config.database_path()?,
    };
    let pool = acct_db::connect(&database_path, 1).await?;

    let message = match cli.command {
        Commands::DbCreate => {
            db_create(&pool).await?;
            "Database created!"
        }
        Commands::DbDrop => {
            db_drop(&pool).await?;
            "Database dropped!"
        }
        Commands::DbSeed => {
            let hasher = CredentialHasher::with_params(
                config.auth.hash_memory_kib,
                config.auth.hash_iterations,
                config.auth.hash_parallelism,
            )?;
            db_seed(&pool, &hasher).await?;
            "Database seeded!"
        }
    };

    pool.close().await;

    Ok(message)
}
