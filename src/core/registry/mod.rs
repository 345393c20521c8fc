// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Volatile scope stores.
//!
//! ```text
//! ScopeStore::open_scope() --> VolatileScope (exclusively owned)
//!                                 set_string(name, value)
//!                                 drop() --> release
//!
//! RegistryStore  HKCU\Volatile Environment (Windows, REG_OPTION_VOLATILE)
//! MemoryStore    in-process map (dry runs, tests)
//! ```
//!
//! A scope is never kept past the call that opened it. Stores hold no handles.

use std::collections::BTreeMap;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::{RegistryScope, RegistryStore};

/// Subkey of `HKEY_CURRENT_USER` holding session-lifetime variables.
pub const VOLATILE_ENVIRONMENT: &str = "Volatile Environment";

/// An open, writable volatile container.
///
/// Implementors release the underlying handle in `Drop`.
pub trait VolatileScope {
    /// Writes `value` under `name` as a plain string, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns the OS error reported by the underlying store.
    fn set_string(&mut self, name: &str, value: &str) -> io::Result<()>;
}

/// Source of volatile scopes.
pub trait ScopeStore {
    /// Scope type handed out by [`ScopeStore::open_scope`].
    type Scope<'a>: VolatileScope
    where
        Self: 'a;

    /// Opens (creating if needed) the volatile container with write-value access.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the container cannot be opened or created.
    fn open_scope(&self) -> io::Result<Self::Scope<'_>>;

    /// Human-readable location of the container, used in errors and logs.
    fn location(&self) -> &str;
}

// --- Non-Windows placeholder ---

/// Registry-backed store. Unavailable on this platform.
#[cfg(not(windows))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

/// Uninhabited scope of the unavailable registry store.
#[cfg(not(windows))]
#[derive(Debug)]
pub enum RegistryScope {}

#[cfg(not(windows))]
impl RegistryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl VolatileScope for RegistryScope {
    fn set_string(&mut self, _name: &str, _value: &str) -> io::Result<()> {
        match *self {}
    }
}

#[cfg(not(windows))]
impl ScopeStore for RegistryStore {
    type Scope<'a> = RegistryScope;

    fn open_scope(&self) -> io::Result<RegistryScope> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "the volatile environment registry is only available on Windows",
        ))
    }

    fn location(&self) -> &str {
        r"HKCU\Volatile Environment"
    }
}

// --- In-memory store ---

/// Failure injected into a [`MemoryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    None,
    Open(io::ErrorKind),
    Write(io::ErrorKind),
}

/// In-process volatile store.
///
/// Behaves like the registry container for a single process: values are
/// overwritten by name and vanish with the store. Counts opened and released
/// scopes so callers can check that every scope was released.
#[derive(Debug)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
    opened: AtomicUsize,
    released: AtomicUsize,
    fault: Fault,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
            opened: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
            fault: Fault::None,
        }
    }

    /// A store whose container can never be opened.
    #[must_use]
    pub const fn unavailable(kind: io::ErrorKind) -> Self {
        let mut store = Self::new();
        store.fault = Fault::Open(kind);
        store
    }

    /// A store that opens fine but rejects every write.
    #[must_use]
    pub const fn read_only(kind: io::ErrorKind) -> Self {
        let mut store = Self::new();
        store.fault = Fault::Write(kind);
        store
    }

    /// Returns the stored value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(name).cloned())
    }

    /// Returns a snapshot of all stored values, ordered by name.
    #[must_use]
    pub fn values(&self) -> BTreeMap<String, String> {
        self.values
            .lock()
            .map_or_else(|_| BTreeMap::new(), |values| values.clone())
    }

    /// Number of scopes opened so far.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of scopes released so far.
    #[must_use]
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// Scope handed out by [`MemoryStore`].
#[derive(Debug)]
pub struct MemoryScope<'a> {
    store: &'a MemoryStore,
}

impl VolatileScope for MemoryScope<'_> {
    fn set_string(&mut self, name: &str, value: &str) -> io::Result<()> {
        if let Fault::Write(kind) = self.store.fault {
            return Err(io::Error::new(kind, "memory scope rejected the write"));
        }
        let mut values = self
            .store
            .values
            .lock()
            .map_err(|_| io::Error::other("memory scope lock poisoned"))?;
        values.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

impl Drop for MemoryScope<'_> {
    fn drop(&mut self) {
        self.store.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl ScopeStore for MemoryStore {
    type Scope<'a> = MemoryScope<'a>;

    fn open_scope(&self) -> io::Result<MemoryScope<'_>> {
        if let Fault::Open(kind) = self.fault {
            return Err(io::Error::new(kind, "memory scope cannot be opened"));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryScope { store: self })
    }

    fn location(&self) -> &str {
        r"memory:\Volatile Environment"
    }
}

#[cfg(test)]
mod tests;
