// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for volenv.
//!
//! Only the command-line tool reads configuration; the publishing core takes
//! everything as arguments.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. volenv.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. VOLENV_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VOLENV_GLOBAL__DRY=true             → global.dry = true
//! VOLENV_BROADCAST__TIMEOUT_MS=1000   → broadcast.timeout_ms = 1000
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! log_level = 3
//!
//! [broadcast]
//! enabled = true
//! timeout_ms = 5000
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{BroadcastConfig, GlobalConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "volenv.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VOLENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Broadcast options.
    pub broadcast: BroadcastConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use volenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("volenv.toml")
    ///     .with_env_prefix("VOLENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first out-of-range value.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.broadcast.validate()
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level",
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.dry", self.global.dry.to_string());
        options.insert("broadcast.enabled", self.broadcast.enabled.to_string());
        options.insert(
            "broadcast.timeout_ms",
            self.broadcast.timeout_ms.to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
