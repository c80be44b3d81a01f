//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)           |
//! | `[build]`   | Build paths, minify, rss                     |
//! | `[serve]`   | Development server (port, interface, watch)  |
//! | `[extra]`   | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Portfolio"
//! description = "A personal portfolio and blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//! minify = true
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 4173
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod serve;

pub use base::BaseConfig;
pub use build::{BuildConfig, RssConfig};
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments.
    ///
    /// Resolves the project root, rebases all configured paths onto it,
    /// and applies command-line overrides on top of file values.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .clone()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .clone()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        // Rebase configured paths onto the root
        self.build.content = root.join(&self.build.content);
        self.build.output = root.join(&self.build.output);
        self.build.assets = root.join(&self.build.assets);
        self.build.site_data = root.join(&self.build.site_data);
        self.config_path = root.join(&cli.config);
        self.set_root(&root);

        // Apply build/serve overrides
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
                watch,
            } => {
                self.apply_build_args(build_args);
                if let Some(interface) = interface {
                    self.serve.interface = interface.clone();
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
                if let Some(watch) = watch {
                    self.serve.watch = *watch;
                }
            }
            Commands::Init { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &crate::cli::BuildArgs) {
        if args.clean {
            self.build.clean = true;
        }
        if let Some(minify) = args.minify {
            self.build.minify = minify;
        }
        if let Some(rss) = args.rss {
            self.build.rss.enable = rss;
        }
        if let Some(base_url) = &args.base_url {
            self.base.url = Some(base_url.clone());
        }
    }

    /// Validate config consistency before building.
    pub fn validate(&self) -> Result<()> {
        if self.base.title.is_empty() {
            return Err(ConfigError::Validation("`base.title` must not be empty".into()).into());
        }

        if self.build.rss.enable && self.base.url.is_none() {
            return Err(ConfigError::Validation(
                "`base.url` is required when `[build.rss].enable = true`".into(),
            )
            .into());
        }

        Ok(())
    }
}
