mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if let Some(email) = &config.dev_user_email {
        tracing::warn!(%email, "dev login enabled at /auth/dev-login");
    }
    let port = config.port;

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state).map_err(ServerError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "welcome server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
