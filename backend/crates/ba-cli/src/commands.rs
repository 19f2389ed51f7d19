use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send a sync-user request to a running server
    SyncUser {
        /// Better Auth user ID
        #[arg(long)]
        id: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        name: Option<String>,
    },

    /// Reconcile every stored Better Auth user into local accounts
    Backfill,

    /// Queue a password-setup email for a synced account
    PasswordSetup {
        #[arg(long)]
        account_id: i64,
    },

    /// Release all synced accounts (uninstall)
    Offboard {
        /// Delete synced accounts instead of unlinking them
        #[arg(long)]
        delete_users: bool,

        /// Drop the Better Auth tables afterwards
        #[arg(long)]
        drop_tables: bool,
    },

    /// Report stored identities, linked accounts and schema state
    Status,
}
