/// Longbox Server - comic catalog backend
use clap::{Parser, Subcommand};
use longbox_server::{api, config::ServerConfig, state::AppState};
use longbox_storage::SqliteCatalog;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "longbox-server")]
#[command(about = "Comic catalog backend: artists, series and issues", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create or upgrade the catalog schema
    Migrate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Drop all catalog tables first, leaving an empty catalog
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "longbox_server=info,longbox_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Migrate { config, reset } => {
            migrate(config, reset).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Longbox Server");
    tracing::info!("Database: {}", config.storage.database_url);

    // Opening the catalog also applies pending migrations
    let catalog = SqliteCatalog::open(
        &config.storage.database_url,
        &config.storage.pool_settings(),
    )
    .await?;
    tracing::info!("Database connected");

    let app = api::router(AppState::new(Arc::new(catalog)));

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config_path: Option<PathBuf>, reset: bool) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let pool = longbox_storage::create_pool(
        &config.storage.database_url,
        &config.storage.pool_settings(),
    )
    .await?;

    if reset {
        longbox_storage::reset_schema(&pool).await?;
    } else {
        longbox_storage::run_migrations(&pool).await?;
    }

    println!("Catalog schema ready at {}", config.storage.database_url);

    Ok(())
}
