use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::render::BASIC_RENDER_NAME;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Registry name of the render interface to use
    #[serde(default = "default_interface")]
    pub interface: String,
    /// Language used when the caller does not pick one
    #[serde(default = "default_language")]
    pub default_language: String,
    /// JSON template catalog to load at startup
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_interface() -> String {
    BASIC_RENDER_NAME.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("render.interface", BASIC_RENDER_NAME)?
            .set_default("render.default_language", "en")?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // NABU_MAIL_RENDER__DEFAULT_LANGUAGE, NABU_MAIL_LOG__FORMAT, etc.
            .add_source(
                Environment::with_prefix("NABU_MAIL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            default_language: default_language(),
            catalog: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.render.interface, "NabuMailTemplateBasicRender");
        assert_eq!(settings.render.default_language, "en");
        assert!(settings.render.catalog.is_none());
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: Settings = serde_json::from_str(
            r#"{ "render": { "default_language": "es" }, "log": { "format": "json" } }"#,
        )
        .unwrap();
        assert_eq!(settings.render.interface, "NabuMailTemplateBasicRender");
        assert_eq!(settings.render.default_language, "es");
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.level, "info");
    }
}
