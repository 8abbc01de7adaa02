use anyhow::Result;
use clap::{Parser, Subcommand};
use grocer::config::Config;
use grocer_catalog::Repository;

/// grocer - grocery catalog pricing and storage
#[derive(Parser)]
#[command(name = "grocer")]
#[command(about = "Prices grocery items and stores them in SQLite", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price, store and look up one item per category (default)
    Demo,
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    grocer::observability::init_observability(
        "grocer",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo_command(config).await,
        Commands::Migrate => migrate_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn demo_command(config: Config) -> Result<()> {
    let pool = grocer::create_pool(&config.database.url, config.database.max_connections).await?;

    grocer::migrate::migrate(&pool).await?;
    grocer::demo::run(&Repository(pool.clone())).await?;

    pool.close().await;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    if config.database.is_memory() {
        tracing::warn!("Migrating an in-memory database, nothing will persist");
    }

    let pool = grocer::create_pool(&config.database.url, 1).await?;

    grocer::migrate::migrate(&pool).await?;

    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
