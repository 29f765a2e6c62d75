// Main entry point for the catalog server

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use catalog_core::common::database;
use catalog_core::domains::auth::JwtService;
use catalog_core::domains::books::BookCatalog;
use catalog_core::domains::rated_books::RatedCatalog;
use catalog_core::server::{
    build_book_catalog_app, build_rated_catalog_app, build_todo_app, shutdown_signal,
};
use catalog_core::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Book catalogs and a todo app over HTTP")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
enum App {
    /// In-memory book catalog looked up by title, author and category
    Books,

    /// In-memory rated book catalog with request validation
    RatedBooks,

    /// Todo app with user accounts and bearer tokens (SQLite)
    Todos,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    tracing::info!("Configuration loaded");

    let app = match cli.app {
        App::Books => {
            tracing::info!("Starting book catalog");
            build_book_catalog_app(BookCatalog::seeded())
        }
        App::RatedBooks => {
            tracing::info!("Starting rated book catalog");
            build_rated_catalog_app(RatedCatalog::seeded())
        }
        App::Todos => {
            tracing::info!("Starting todo app");
            todo_app(&config).await?
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn todo_app(config: &Config) -> Result<Router> {
    let jwt_service = Arc::new(JwtService::new(
        config.jwt_secret()?,
        config.jwt_issuer.clone(),
        config.token_ttl(),
    ));

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    database::run_migrations(&pool).await?;
    tracing::info!("Migrations complete");

    tracing::info!("Health check: http://localhost:{}/health", config.port);
    Ok(build_todo_app(pool, jwt_service))
}
