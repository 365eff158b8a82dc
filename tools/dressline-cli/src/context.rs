//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use dressline_commerce::catalog::Catalog;
use dressline_commerce::store::Storefront;
use dressline_observability::{SessionId, SessionLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["dressline.toml", ".dressline.toml", "dressline.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    catalog: Arc<Catalog>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some(path) => {
                    let config = CliConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (CliConfig::default(), None),
            }
        };

        config
            .storefront
            .validate()
            .context("Invalid storefront configuration")?;

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Arc::new(Catalog::seeded()),
        })
    }

    /// A fresh storefront session.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(
            Arc::clone(&self.catalog),
            Arc::new(self.config.storefront.clone()),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session logger configured from `[logging]`.
    pub fn logger(&self, session_id: SessionId) -> SessionLogger {
        SessionLogger::new(session_id)
            .with_component("cli")
            .with_min_level(self.config.logging.level)
            .with_format(self.config.logging.format)
    }

    /// Get the journals directory, creating it if needed.
    pub fn journals_dir(&self) -> Result<PathBuf> {
        let dir = self.resolve_path(&self.config.logging.journal_dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create journal directory: {}", dir.display()))?;
        Ok(dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree, starting at `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
