//! ba - Better Auth user-store bridge CLI
//!
//! # Examples
//!
//! ```bash
//! # Simulate the identity provider announcing a user
//! ba sync-user --server https://bridge.example.com --id ba-123 --email jane@example.com
//!
//! # After install: link or create accounts for every stored provider user
//! ba backfill --pretty
//!
//! # Before uninstall
//! ba status
//! ba offboard --drop-tables
//! ```

use ba_cli::{
    Client, CommandError, CommandResult, Lifecycle, cli::Cli, commands::Commands, logger,
};
use ba_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::warn;
use serde::Serialize;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> CommandResult<Value> {
    let config = Config::load()?;
    config.validate()?;
    logger::initialize(config.logging.level)?;

    match &cli.command {
        Commands::SyncUser { id, email, name } => {
            let secret = cli
                .secret
                .clone()
                .unwrap_or_else(|| config.auth.api_secret.clone());
            if secret.is_empty() {
                return Err(CommandError::missing_secret());
            }

            let server = cli
                .server
                .clone()
                .unwrap_or_else(|| format!("http://{}", config.bind_addr()));

            let client = Client::new(&server, &secret);
            Ok(client.sync_user(id, email, name.as_deref()).await?)
        }
        Commands::Backfill => to_value(open_lifecycle(config).await?.backfill().await?),
        Commands::PasswordSetup { account_id } => {
            to_value(open_lifecycle(config).await?.password_setup(*account_id).await?)
        }
        Commands::Offboard {
            delete_users,
            drop_tables,
        } => to_value(
            open_lifecycle(config)
                .await?
                .offboard(*delete_users, *drop_tables)
                .await?,
        ),
        Commands::Status => {
            let status = open_lifecycle(config).await?.status().await?;
            if let Some(ref warning) = status.warning {
                warn!("{}", warning);
            }
            to_value(status)
        }
    }
}

async fn open_lifecycle(config: Config) -> CommandResult<Lifecycle> {
    let pool = ba_db::open_pool(&config.database_path()?, config.database.max_connections).await?;
    Ok(Lifecycle::new(pool, config))
}

fn to_value<T: Serialize>(report: T) -> CommandResult<Value> {
    Ok(serde_json::to_value(report)?)
}
