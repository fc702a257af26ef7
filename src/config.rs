use std::path::PathBuf;

use anyhow::Context;

/// Which URL prefixes the routes are mounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLayout {
    /// `/usernames`, `/username/:name`, `/adduser`
    Flat,
    /// `/read/usernames`, `/read/username/:name`, `/write/adduser`
    Nested,
}

impl std::str::FromStr for RouteLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "nested" => Ok(Self::Nested),
            other => anyhow::bail!("unknown route layout {other:?} (expected flat or nested)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub users_file: PathBuf,
    pub cors_origin: String,
    pub layout: RouteLayout,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().with_context(|| format!("invalid APP_PORT {v:?}"))?,
            Err(_) => 8000,
        };
        let layout = match std::env::var("ROUTE_LAYOUT") {
            Ok(v) => v.parse()?,
            Err(_) => RouteLayout::Nested,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            users_file: std::env::var("USERS_FILE")
                .unwrap_or_else(|_| "data/users.json".into())
                .into(),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            layout,
        })
    }
}
