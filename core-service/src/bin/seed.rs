use anyhow::Context;
use clap::Parser;
use core_library::{create_pool, create_schema, seed, SeedConfig, SeedMode};
use core_runtime::config::DatabaseSettings;
use core_runtime::logging::init_logging;
use core_service::cli::{log_env_file, LogArgs};
use tracing::{error, info};

/// Fill the music store database with sample data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where names and foreign keys come from: catalog or random
    #[arg(short, long, value_name = "MODE", default_value = "random")]
    mode: SeedMode,

    /// Fixed RNG seed for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Create missing tables before seeding
    #[arg(long)]
    create_schema: bool,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.log.logging_config())?;
    log_env_file(dotenv);

    let settings = DatabaseSettings::from_env().context("invalid database configuration")?;
    let pool = create_pool(&settings)
        .await
        .context("failed to connect to the database")?;

    if args.create_schema {
        create_schema(&pool).await.context("failed to create tables")?;
        info!("Schema ready");
    }

    let config = SeedConfig {
        mode: args.mode,
        rng_seed: args.seed,
        ..SeedConfig::default()
    };

    let outcome = seed(&pool, &config).await;
    pool.close().await;

    match outcome {
        Ok(report) => {
            info!(
                artists = report.artists,
                genres = report.genres,
                media_types = report.media_types,
                albums = report.albums,
                tracks = report.tracks,
                playlists = report.playlists,
                playlist_tracks = report.playlist_tracks,
                "Database seeded"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Seeding aborted");
            Err(e).context("seeding failed")
        }
    }
}
