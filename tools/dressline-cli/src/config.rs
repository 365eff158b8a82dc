//! CLI configuration.

use anyhow::{Context, Result};
use dressline_commerce::config::StorefrontConfig;
use dressline_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
///
/// The storefront sections (`[shop]`, `[carousel]`, `[sections]`, `[ui]`)
/// sit at the top level next to `[logging]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(flatten)]
    pub storefront: StorefrontConfig,

    /// Session logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format by file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Session logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level for session log lines.
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// `json` or `human`.
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Where `session run --record` writes journals, relative to the
    /// working directory.
    #[serde(default = "default_journal_dir")]
    pub journal_dir: String,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_format() -> LogFormat {
    LogFormat::Human
}

fn default_journal_dir() -> String {
    ".dressline/journals".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            journal_dir: default_journal_dir(),
        }
    }
}

/// Generate a default dressline.toml config file.
pub fn generate_default_config() -> String {
    r#"# Dress Line storefront configuration

[shop]
name = "Dress Line"
tagline = "Simple the best"
location = "No.83, Trinco Road, Batticaloa"
phone = "065 222 6332"
# Receives orders and inquiries. Digits only, with country code.
whatsapp_number = "94768685970"
# Base of product share links.
origin = "https://dressline.lk"

[[shop.founders]]
name = "Mr. MM. SABURUDEEN"
role = "PROPRIETOR"
phone = "+94 777 113 420"

[[shop.founders]]
name = "Mr. S. YUSREE AHMATH"
role = "PROPRIETOR"
phone = "+94 76 86 85 970"

[carousel]
interval_ms = 4000
breakpoint_px = 768
wide_items_per_page = 3
narrow_items_per_page = 1

[sections]
trending_collapsed = 8
trending_expanded = 16
new_arrivals = { start = 12, end = 16 }

[ui]
scroll_top_threshold = 400

[logging]
level = "info"
format = "human"
journal_dir = ".dressline/journals"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_matches_defaults() {
        let config = CliConfig::parse("dressline.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = CliConfig::parse(
            "dressline.toml",
            "[shop]\nwhatsapp_number = \"94770000000\"\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.storefront.shop.whatsapp_number, "94770000000");
        assert_eq!(config.storefront.shop.name, "Dress Line");
        assert_eq!(config.storefront.carousel.interval_ms, 4000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "dressline.json",
            r#"{"carousel": {"interval_ms": 1000}, "logging": {"level": "debug"}}"#,
        )
        .unwrap();
        assert_eq!(config.storefront.carousel.interval_ms, 1000);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = CliConfig::parse("broken.toml", "[shop").unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
