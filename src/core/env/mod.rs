// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publishing variables into the volatile environment.
//!
//! ```text
//! Publisher::publish(name, value)
//!   validate name/value          --> InvalidName | InvalidValue
//!   store.open_scope()           --> ScopeUnavailable (no broadcast)
//!   scope.set_string()           --> WriteFailed      (scope released)
//!   drop(scope)
//!   broadcaster.broadcast()      (best effort, result ignored)
//!   Ok(())
//!
//! read_current(name) --> own process environment, "" if absent
//! ```
//!
//! Calls share no state. Concurrent publishers are not ordered against each
//! other; serialize externally if order matters.
//!
//! # Example
//! ```no_run
//! use volenv::core::env::Publisher;
//!
//! let publisher = Publisher::system();
//! publisher.publish("MY_TOOL_HOME", r"C:\Tools\MyTool")?;
//! # Ok::<(), volenv::error::PublishError>(())
//! ```

use tracing::{debug, info};

use crate::core::broadcast::ChangeBroadcaster;
use crate::core::registry::{RegistryStore, ScopeStore, VolatileScope};
use crate::error::{PublishError, PublishResult};

/// Writes variables into a volatile scope and announces the change.
#[derive(Debug)]
pub struct Publisher<S = RegistryStore> {
    store: S,
    broadcaster: ChangeBroadcaster,
}

impl Publisher<RegistryStore> {
    /// Publisher for `HKCU\Volatile Environment` with the system broadcaster.
    #[must_use]
    pub fn system() -> Self {
        Self::new(RegistryStore::new(), ChangeBroadcaster::system())
    }
}

impl<S: ScopeStore> Publisher<S> {
    #[must_use]
    pub const fn new(store: S, broadcaster: ChangeBroadcaster) -> Self {
        Self { store, broadcaster }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn broadcaster(&self) -> &ChangeBroadcaster {
        &self.broadcaster
    }

    /// Stores `value` under `name` and broadcasts the change.
    ///
    /// Publishing the same pair twice leaves the same state; a new value for
    /// an existing name replaces the old one. The broadcast outcome never
    /// affects the result.
    ///
    /// # Errors
    ///
    /// - [`PublishError::InvalidName`] / [`PublishError::InvalidValue`] when the
    ///   input cannot be stored as a string value.
    /// - [`PublishError::ScopeUnavailable`] when the container cannot be opened.
    /// - [`PublishError::WriteFailed`] when the value write fails.
    pub fn publish(&self, name: &str, value: &str) -> PublishResult<()> {
        validate(name, value)?;
        self.write(name, value)?;
        self.broadcaster.broadcast();
        info!(name, "published to {}", self.store.location());
        Ok(())
    }

    fn write(&self, name: &str, value: &str) -> PublishResult<()> {
        let mut scope = self
            .store
            .open_scope()
            .map_err(|source| PublishError::ScopeUnavailable {
                location: self.store.location().to_owned(),
                source,
            })?;
        debug!(location = self.store.location(), "opened volatile scope");

        scope
            .set_string(name, value)
            .map_err(|source| PublishError::WriteFailed {
                name: name.to_owned(),
                source,
            })
    }
}

fn validate(name: &str, value: &str) -> PublishResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('\0') {
        Some("name contains a NUL character")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(PublishError::InvalidName {
            name: name.escape_debug().to_string(),
            reason,
        });
    }
    if value.contains('\0') {
        return Err(PublishError::InvalidValue {
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Returns `name` from this process's own environment.
///
/// Absent variables read as an empty string. Values that are not valid
/// Unicode are decoded lossily. This does not see values written by
/// [`Publisher::publish`] unless the process inherited them.
#[must_use]
pub fn read_current(name: &str) -> String {
    std::env::var_os(name)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}
