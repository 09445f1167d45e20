mod config;
mod state;
mod routes;
mod handlers;
mod llm;
mod translate;

use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_backend=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;
    info!(
        "Using LLM provider {} with model {}",
        config.llm.provider, config.llm.model
    );

    // Fails here, before binding, when the credential is absent
    let app_state = AppState::new(config.clone())?;
    let app = routes::create_app(app_state);

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `CONFIG_PATH` wins; otherwise the first local config file found, or defaults.
fn load_config() -> Result<Config> {
    if let Ok(path) = std::env::var("CONFIG_PATH") {
        let config = Config::load(&path)?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    for path in ["conf.yaml", "conf.yml", "conf.json"] {
        if Path::new(path).exists() {
            let config = Config::load(path)?;
            info!("Loaded configuration from: {}", path);
            return Ok(config);
        }
    }

    info!("No configuration file found, using defaults");
    Ok(Config::default())
}
