//! Handles settings for the application.
//!
//! Configuration is read from `settings.toml` (or the file given with
//! `--config`) and overridden by `SPLIT_*` environment variables, using `__`
//! between nested keys (`SPLIT_SERVER__PORT=8080`).
//!
//! ```toml
//! [app]
//! level = "debug"
//!
//! [server]
//! bind = "0.0.0.0"
//! port = 3000
//! database = { sqlite = "split.db" }
//! ```
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

#[derive(Debug, Parser)]
#[command(name = "split", version)]
struct Args {
    /// Optional config file path (TOML), without or with extension.
    #[arg(long)]
    config: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        let mut settings = Self::from_config(
            Config::builder()
                .add_source(File::with_name(config_path).required(false))
                .add_source(Environment::with_prefix("SPLIT").separator("__")),
        )?;

        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Settings {
        Settings::from_config(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
            .unwrap()
    }

    #[test]
    fn empty_config_has_defaults_and_no_server() {
        let settings = parse("");
        assert_eq!(settings.app.level, "info");
        assert!(settings.server.is_none());
    }

    #[test]
    fn reads_sqlite_server() {
        let settings = parse(
            r#"
            [app]
            level = "debug"

            [server]
            port = 8080
            database = { sqlite = "split.db" }
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        let server = settings.server.unwrap();
        assert_eq!(server.port, 8080);
        assert!(server.bind.is_none());
        assert_eq!(server.database, Database::Sqlite("split.db".to_string()));
    }

    #[test]
    fn reads_memory_server() {
        let settings = parse(
            r#"
            [server]
            bind = "0.0.0.0"
            port = 3000
            database = "memory"
            "#,
        );
        let server = settings.server.unwrap();
        assert_eq!(server.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(server.database, Database::Memory);
    }
}
