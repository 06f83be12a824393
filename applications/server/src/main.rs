/// Mixtape Server - playlist management HTTP API
use clap::{Parser, Subcommand};
use mixtape_server::{config::ServerConfig, create_router, state::AppState};
use mixtape_storage::LocalStorageContext;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape-server")]
#[command(about = "Mixtape playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "MIXTAPE_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long, env = "MIXTAPE_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mixtape_server=info,mixtape_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(load_config(config)?).await?;
        }
        Commands::Migrate { config } => {
            migrate(load_config(config)?).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Mixtape Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = mixtape_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    mixtape_storage::run_migrations(&pool).await?;

    let db = Arc::new(LocalStorageContext::new(pool));
    tracing::info!("Database connected");

    let app = create_router(AppState::new(db));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config: ServerConfig) -> anyhow::Result<()> {
    let pool = mixtape_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    mixtape_storage::run_migrations(&pool).await?;

    tracing::info!("Database at {} is up to date", config.storage.database_url);
    Ok(())
}
