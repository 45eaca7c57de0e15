use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::settings::Settings;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(default_value = "serve")]
    runner: Runner,
    /// Settings file, defaults to ./trivia.toml when present
    #[clap(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Runner {
    Serve,
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load settings")?;
    init_tracing(&settings.log_filter).context("Invalid log filter")?;

    let pool = db::establish_connection(&settings.database_url, settings.max_connections)
        .await
        .with_context(|| format!("Cannot connect to {}", settings.database_url))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    match cli.runner {
        Runner::Serve => run_server(pool, &settings).await?,
        Runner::Migrate => tracing::info!("Migrations applied"),
    };
    Ok(())
}
