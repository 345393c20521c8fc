// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   PublishError                 ConfigError
//!   ScopeUnavailable  (fatal)    ParseError
//!   WriteFailed       (fatal)    InvalidValue
//!   InvalidName       (early)    InvalidOverride
//!   InvalidValue      (early)
//!
//!   broadcast failures: never surfaced
//!   cli / config plumbing: anyhow::Result
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PublishError`].
pub type PublishResult<T> = std::result::Result<T, PublishError>;

// --- Publish Errors ---

/// Failures of a single publish operation.
///
/// Only registry-layer failures (and up-front input rejection) are errors.
/// Anything after a successful write is best-effort and never shows up here.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The volatile container could not be opened or created.
    #[error("volatile scope unavailable at '{location}': {source}")]
    ScopeUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The container opened but the value write failed.
    #[error("failed to write '{name}': {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The variable name cannot be stored as a registry value name.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The value contains an embedded NUL and would be truncated as `REG_SZ`.
    #[error("value for '{name}' contains an embedded NUL character")]
    InvalidValue { name: String },
}

impl PublishError {
    /// Returns `true` when the failure happened before the scope was touched.
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::InvalidValue { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override is not of the form `section.key=value`.
    #[error("invalid override '{0}', expected 'section.key=value'")]
    InvalidOverride(String),
}

#[cfg(test)]
mod tests;
