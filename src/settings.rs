use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub address: String,
    pub database_url: String,
    pub max_connections: u32,
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// `tracing` filter directives used when `LOG_LEVEL` is unset.
    pub log_filter: String,
}

impl Settings {
    /// Reads `trivia.toml` from the working directory if present, then
    /// `TRIVIA_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::build(defaults()?.add_source(File::with_name("trivia").required(false)))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::build(defaults()?.add_source(File::from(path)))
    }

    fn build(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("address", "0.0.0.0:8080")?
        .set_default("database_url", "sqlite:trivia.db")?
        .set_default("max_connections", 5)?
        .set_default("cors_origins", vec!["*"])?
        .set_default("log_filter", "info,tower_http=debug,sqlx=warn")
}
