use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ba")]
#[command(about = "Better Auth user-store bridge CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL for sync-user (defaults to the configured bind address)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Shared API secret for sync-user (defaults to auth.api_secret)
    #[arg(long, global = true)]
    pub secret: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
