//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use dressline_observability::{LogFormat, LogLevel};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{find_config, Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let shop = &ctx.config.storefront.shop;
    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("name", &shop.name);
    ctx.output.kv("location", &shop.location);
    ctx.output.kv("phone", &shop.phone);
    ctx.output.kv("whatsapp_number", &shop.whatsapp_number);
    ctx.output.kv("origin", &shop.origin);
    for founder in &shop.founders {
        ctx.output.list_item(&format!("{} ({}) {}", founder.name, founder.role, founder.phone));
    }

    let carousel = &ctx.config.storefront.carousel;
    ctx.output.info("");
    ctx.output.info("[carousel]");
    ctx.output.kv("interval_ms", &carousel.interval_ms.to_string());
    ctx.output.kv("breakpoint_px", &carousel.breakpoint_px.to_string());
    ctx.output.kv("wide_items_per_page", &carousel.wide_items_per_page.to_string());
    ctx.output.kv("narrow_items_per_page", &carousel.narrow_items_per_page.to_string());

    let sections = &ctx.config.storefront.sections;
    ctx.output.info("");
    ctx.output.info("[sections]");
    ctx.output.kv("trending_collapsed", &sections.trending_collapsed.to_string());
    ctx.output.kv("trending_expanded", &sections.trending_expanded.to_string());
    ctx.output.kv(
        "new_arrivals",
        &format!("{}..{}", sections.new_arrivals.start, sections.new_arrivals.end),
    );

    ctx.output.info("");
    ctx.output.info("[ui]");
    ctx.output.kv(
        "scroll_top_threshold",
        &ctx.config.storefront.ui.scroll_top_threshold.to_string(),
    );

    let logging = &ctx.config.logging;
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &logging.level.to_string().to_lowercase());
    ctx.output.kv("format", format_name(logging.format));
    ctx.output.kv("journal_dir", &logging.journal_dir);

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        match value {
            serde_json::Value::String(s) => println!("{}", s),
            other => println!("{}", other),
        }
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match ctx.config_path {
        Some(ref path) => path.clone(),
        None => match find_config(&ctx.cwd) {
            Some(path) => path,
            None => bail!("No config file found. Run `dressline config init` to create one."),
        },
    };
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config
        .storefront
        .validate()
        .with_context(|| format!("Refusing to set {} = {}", key, value))?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut warnings: Vec<String> = Vec::new();
    let config = &ctx.config.storefront;

    // Errors are rejected when the context loads; only warnings remain here.
    if !config.shop.origin.starts_with("https://") {
        warnings.push(format!(
            "shop.origin '{}' is not an https URL; share links may not open",
            config.shop.origin
        ));
    }
    if config.carousel.interval_ms < 1000 {
        warnings.push(format!(
            "carousel.interval_ms {} is shorter than a second",
            config.carousel.interval_ms
        ));
    }
    if config.carousel.wide_items_per_page < config.carousel.narrow_items_per_page {
        warnings.push("carousel shows fewer reviews on wide screens than narrow ones".to_string());
    }
    if config.sections.new_arrivals.start >= ctx.catalog().len() {
        warnings.push(format!(
            "sections.new_arrivals starts at {} but the catalog has {} products",
            config.sections.new_arrivals.start,
            ctx.catalog().len()
        ));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Json => "json",
        LogFormat::Human => "human",
    }
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();
    let shop = &config.storefront.shop;
    let carousel = &config.storefront.carousel;
    let sections = &config.storefront.sections;

    let value = match parts.as_slice() {
        ["shop", "name"] => serde_json::json!(shop.name),
        ["shop", "tagline"] => serde_json::json!(shop.tagline),
        ["shop", "location"] => serde_json::json!(shop.location),
        ["shop", "phone"] => serde_json::json!(shop.phone),
        ["shop", "whatsapp_number"] => serde_json::json!(shop.whatsapp_number),
        ["shop", "origin"] => serde_json::json!(shop.origin),
        ["carousel", "interval_ms"] => serde_json::json!(carousel.interval_ms),
        ["carousel", "breakpoint_px"] => serde_json::json!(carousel.breakpoint_px),
        ["carousel", "wide_items_per_page"] => serde_json::json!(carousel.wide_items_per_page),
        ["carousel", "narrow_items_per_page"] => serde_json::json!(carousel.narrow_items_per_page),
        ["sections", "trending_collapsed"] => serde_json::json!(sections.trending_collapsed),
        ["sections", "trending_expanded"] => serde_json::json!(sections.trending_expanded),
        ["ui", "scroll_top_threshold"] => {
            serde_json::json!(config.storefront.ui.scroll_top_threshold)
        }
        ["logging", "level"] => serde_json::to_value(config.logging.level)?,
        ["logging", "format"] => serde_json::to_value(config.logging.format)?,
        ["logging", "journal_dir"] => serde_json::json!(config.logging.journal_dir),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let storefront = &mut config.storefront;

    match parts.as_slice() {
        ["shop", "name"] => storefront.shop.name = value.to_string(),
        ["shop", "tagline"] => storefront.shop.tagline = value.to_string(),
        ["shop", "location"] => storefront.shop.location = value.to_string(),
        ["shop", "phone"] => storefront.shop.phone = value.to_string(),
        ["shop", "whatsapp_number"] => storefront.shop.whatsapp_number = value.to_string(),
        ["shop", "origin"] => storefront.shop.origin = value.to_string(),
        ["carousel", "interval_ms"] => storefront.carousel.interval_ms = value.parse()?,
        ["carousel", "breakpoint_px"] => storefront.carousel.breakpoint_px = value.parse()?,
        ["carousel", "wide_items_per_page"] => {
            storefront.carousel.wide_items_per_page = value.parse()?
        }
        ["carousel", "narrow_items_per_page"] => {
            storefront.carousel.narrow_items_per_page = value.parse()?
        }
        ["sections", "trending_collapsed"] => {
            storefront.sections.trending_collapsed = value.parse()?
        }
        ["sections", "trending_expanded"] => storefront.sections.trending_expanded = value.parse()?,
        ["ui", "scroll_top_threshold"] => storefront.ui.scroll_top_threshold = value.parse()?,
        ["logging", "level"] => {
            config.logging.level = LogLevel::from_str(value)
                .with_context(|| format!("Unknown log level: {}", value))?
        }
        ["logging", "format"] => {
            config.logging.format = match value {
                "json" => LogFormat::Json,
                "human" => LogFormat::Human,
                _ => bail!("Unknown log format: {} (expected json or human)", value),
            }
        }
        ["logging", "journal_dir"] => config.logging.journal_dir = value.to_string(),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = CliConfig::default();
        assert_eq!(
            get_config_value(&config, "shop.whatsapp_number").unwrap(),
            serde_json::json!("94768685970")
        );
        assert_eq!(
            get_config_value(&config, "carousel.interval_ms").unwrap(),
            serde_json::json!(4000)
        );
        assert_eq!(
            get_config_value(&config, "logging.format").unwrap(),
            serde_json::json!("human")
        );
        assert!(get_config_value(&config, "shop.founders").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "carousel.interval_ms", "2500").unwrap();
        set_config_value(&mut config, "logging.level", "debug").unwrap();
        assert_eq!(config.storefront.carousel.interval_ms, 2500);
        assert_eq!(config.logging.level, LogLevel::Debug);

        assert!(set_config_value(&mut config, "carousel.interval_ms", "soon").is_err());
        assert!(set_config_value(&mut config, "logging.format", "xml").is_err());
        assert!(set_config_value(&mut config, "catalog.size", "3").is_err());
    }
}
