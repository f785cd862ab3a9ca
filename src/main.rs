//! ImgSearch-RS: a thin image search client and thumbnail renderer
//!
//! This is the main entry point for the application.

use anyhow::Result;
use imgsearch_rs::{
    config::Settings,
    network::HttpClient,
    search::SearchClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so debug mode can raise the log level
    let settings = load_settings()?;

    FmtSubscriber::builder()
        .with_max_level(if settings.general.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    info!("Starting ImgSearch-RS v{}", imgsearch_rs::VERSION);
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    if !settings.credentials.is_configured() {
        warn!("API key or engine id not configured; searches will fail upstream");
    }

    // Initialize HTTP client
    let http = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Create search client
    let client = SearchClient::new(http, settings.credentials.clone());

    // Create application state
    let state = AppState::new(settings.clone(), client)?;

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("IMGSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/imgsearch/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("imgsearch-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
