use anyhow::Context;
use clap::Parser;
use core_library::create_pool;
use core_runtime::config::ServerConfig;
use core_runtime::logging::init_logging;
use core_service::cli::{log_env_file, LogArgs};
use core_service::{router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Music store REST API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Interface to bind (overrides API_HOST)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port to listen on (overrides API_PORT)
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.log.logging_config())?;

    log_env_file(dotenv);

    let mut config = ServerConfig::from_env().context("invalid server configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!(
        address = %config.bind_address(),
        database = %config.database.redacted_url(),
        list_limit = config.list_limit,
        "Starting music store API"
    );

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    let app = router(AppState::new(pool.clone(), config.list_limit));

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
