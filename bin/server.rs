// Word Tracker - Web Server
// Read-only JSON API and CSV export with Axum

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;
use tracing::info;

use word_tracker::server::{create_router, AppState};
use word_tracker::{logging, setup_database, Config, ConfigArgs};

/// Serve the word tracker API
#[derive(Parser, Debug)]
#[command(name = "word-server", version)]
struct ServerArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    let config = Config::from_args(&args.config);
    logging::init_logging(&config.log_level);

    let conn = Connection::open(&config.database_path)
        .with_context(|| format!("Failed to open database {:?}", config.database_path))?;
    setup_database(&conn).context("Failed to set up database schema")?;
    info!("Database opened: {:?}", config.database_path);

    let app = create_router(AppState::new(conn, config.birthdate));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.bind))?;

    info!("Server running on http://{}", args.bind);
    info!("  API:    /api/words, /api/stats, /api/milestones");
    info!("  Export: /export");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
