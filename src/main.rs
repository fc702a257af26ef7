mod app;
mod config;
mod error;
mod state;
mod storage;
mod users;

use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, state::AppState};

const DEFAULT_LOG_FILTER: &str = "userbook=debug,axum=info,tower_http=info";

/// Text logs by default, one JSON object per line with `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.with_target(false).json().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "config loaded");
    let app_state = AppState::init(config);

    // A missing or broken users file is not fatal; requests get 404 until restart.
    if let Err(e) = app_state.users.load().await {
        tracing::error!(
            error = ?e,
            path = %app_state.config.users_file.display(),
            "failed to read users file; serving without users"
        );
    }

    let app = app::build_app(app_state.clone())?;
    app::serve(app, &app_state.config).await
}
