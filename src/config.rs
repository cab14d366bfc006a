use std::path::PathBuf;

use anyhow::Context;

use crate::db::Source;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Public base URL advertised by the discovery payload at `/`.
    pub base_url: Option<String>,
    pub database_path: PathBuf,
    /// Catalog document given directly in the environment. Wins over the path.
    pub database_json: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            base_url: std::env::var("BASE_URL")
                .ok()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/database.json")),
            database_json: std::env::var("DATABASE_JSON").ok(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn source(&self) -> Source {
        match &self.database_json {
            Some(text) => Source::inline(text.as_str()),
            None => Source::file(&self.database_path),
        }
    }
}
