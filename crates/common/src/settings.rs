use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Server {
    pub port: u16,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Logger {
    pub level: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    pub uri: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            uri: "postgres://localhost/labelstore".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// When true, a payload with a malformed bbox fails the whole save
    /// request instead of being dropped silently.
    pub strict_bbox: bool,
}

impl Default for Annotations {
    fn default() -> Self {
        Self { strict_bbox: false }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
    pub annotations: Annotations,
}

impl Settings {
    pub fn with_config_dir(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{run_mode}")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/local")).required(false))
            .add_source(Environment::default().separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.logger.level, "info");
        assert!(!settings.annotations.strict_bbox);
    }

    #[test]
    fn test_with_config_dir_reads_all_sections() {
        let dir = std::env::temp_dir().join(format!("labelstore_settings_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("default.toml"),
            r#"
                [server]
                port = 9000

                [logger]
                level = "debug"

                [database]
                uri = "postgres://example/labelstore"

                [annotations]
                strict_bbox = true
            "#,
        )
        .unwrap();

        let settings = Settings::with_config_dir(dir.to_str().unwrap()).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.database.uri, "postgres://example/labelstore");
        assert!(settings.annotations.strict_bbox);
    }
}
