use std::env;

/// Server configuration loaded from environment variables.
///
/// The Notion credential and database id stay optional: their absence is
/// reported per-request as HTTP 500 rather than failing at startup, so a
/// misconfigured deployment still binds and logs something useful.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: Option<String>,
    pub database_id: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            notion_token: optional_env("NOTION_TOKEN"),
            database_id: optional_env("DATABASE_ID"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
