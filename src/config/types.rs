// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for volenv.
//!
//! ```text
//! Config: GlobalConfig, BroadcastConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::broadcast::NotificationRequest;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Upper bound accepted for `broadcast.timeout_ms`.
pub const MAX_BROADCAST_TIMEOUT_MS: u64 = 5000;

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Optional log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Publish into an in-memory scope instead of the registry.
    pub dry: bool,
}

/// Settings-changed broadcast options.
///
/// Hung windows are always skipped; there is no key to wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BroadcastConfig {
    /// Send `WM_SETTINGCHANGE` after a successful publish.
    pub enabled: bool,
    /// Wait bound for the broadcast, at most 5000 ms.
    pub timeout_ms: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: MAX_BROADCAST_TIMEOUT_MS,
        }
    }
}

impl BroadcastConfig {
    /// Checks `timeout_ms` is within `1..=5000`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_BROADCAST_TIMEOUT_MS).contains(&self.timeout_ms) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                section: "broadcast".to_string(),
                key: "timeout_ms".to_string(),
                message: format!(
                    "must be between 1 and {MAX_BROADCAST_TIMEOUT_MS}, got {}",
                    self.timeout_ms
                ),
            })
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Delivery policy for the broadcaster.
    #[must_use]
    pub const fn to_request(&self) -> NotificationRequest {
        NotificationRequest::new(self.timeout())
    }
}
