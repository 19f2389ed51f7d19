use ba_server::{AppState, build_router, error::ServerError, logger};

use ba_config::Config;
use ba_db::SchemaInspector;

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ba-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if !config.auth.is_configured() {
        warn!("auth.api_secret is empty: every sync request will be refused");
    }

    if !config.auth.trust_forwarded_proto && !config.auth.allow_insecure_transport {
        warn!(
            "Listener is plain HTTP and auth.trust_forwarded_proto is off: \
             every sync request will be refused as insecure"
        );
    }

    // Open database and run migrations
    let database_path = config.database_path()?;
    let pool = ba_db::open_pool(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;

    // Recreate identity tables dropped by a previous offboard
    SchemaInspector::new(pool.clone())
        .ensure_identity_tables()
        .await
        .map_err(ServerError::from)?;

    let app = build_router(AppState::new(pool.clone(), &config));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
