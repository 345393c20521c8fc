// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-changed broadcast.
//!
//! ```text
//! ChangeBroadcaster::system()
//!   resolve user32!SendMessageTimeoutW
//!     found   --> Some(notifier)
//!     missing --> None (no-op)
//!
//! broadcast()
//!   HWND_BROADCAST, WM_SETTINGCHANGE, wParam=0, lParam=L"Environment"
//!   SMTO_ABORTIFHUNG, <= 5000 ms
//!     --> Delivered | Aborted | TimedOut   (logged, discarded)
//! ```
//!
//! Nothing here ever fails the caller.

use std::fmt;
use std::time::Duration;

use tracing::debug;

#[cfg(windows)]
mod windows;

/// Settings category named in the broadcast payload.
pub const ENVIRONMENT_CATEGORY: &str = "Environment";

/// Default and upper wait bound for the broadcast round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Parameters of a single settings-changed broadcast.
///
/// Target (all top-level windows), message, payload and the abort-if-hung
/// policy are fixed; only the timeout varies, capped at [`DEFAULT_TIMEOUT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationRequest {
    timeout: Duration,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl NotificationRequest {
    /// Builds a request, clamping `timeout` to [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        let timeout = if timeout.as_millis() > DEFAULT_TIMEOUT.as_millis() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        Self { timeout }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout in milliseconds, saturating at `u32::MAX`.
    #[must_use]
    pub fn timeout_millis(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        ENVIRONMENT_CATEGORY
    }
}

/// Result of a delivered-or-not broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// Every receiver processed the message.
    Delivered,
    /// Delivery was abandoned, e.g. a receiver was hung.
    Aborted,
    /// The overall wait bound elapsed.
    TimedOut,
}

impl BroadcastOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Aborted => "aborted",
            Self::TimedOut => "timed out",
        }
    }
}

impl fmt::Display for BroadcastOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved settings-changed notification primitive.
pub trait SettingsNotifier: Send + Sync {
    /// Sends one broadcast and reports how it went.
    fn send(&self, request: &NotificationRequest) -> BroadcastOutcome;
}

/// Best-effort settings-changed broadcaster.
///
/// Holds an optional notifier; without one, [`ChangeBroadcaster::broadcast`]
/// does nothing.
pub struct ChangeBroadcaster {
    notifier: Option<Box<dyn SettingsNotifier>>,
    request: NotificationRequest,
}

impl fmt::Debug for ChangeBroadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBroadcaster")
            .field("enabled", &self.is_enabled())
            .field("request", &self.request)
            .finish()
    }
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::system()
    }
}

impl ChangeBroadcaster {
    /// Resolves the system notification primitive.
    ///
    /// Falls back to the no-op broadcaster when it cannot be found.
    #[must_use]
    pub fn system() -> Self {
        match resolve_system_notifier() {
            Some(notifier) => Self::with_notifier(notifier),
            None => {
                debug!("settings-changed broadcast unavailable, notifications disabled");
                Self::disabled()
            }
        }
    }

    /// Broadcaster that never sends anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            notifier: None,
            request: NotificationRequest::new(DEFAULT_TIMEOUT),
        }
    }

    /// Broadcaster using the given notifier with the default request.
    #[must_use]
    pub fn with_notifier(notifier: impl SettingsNotifier + 'static) -> Self {
        Self {
            notifier: Some(Box::new(notifier)),
            request: NotificationRequest::default(),
        }
    }

    /// Replaces the delivery policy.
    #[must_use]
    pub const fn with_request(mut self, request: NotificationRequest) -> Self {
        self.request = request;
        self
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.notifier.is_some()
    }

    /// Notifies running processes that the environment changed.
    pub fn broadcast(&self) {
        let _ = self.send();
    }

    /// Sends the broadcast, returning `None` when no notifier is resolved.
    pub(crate) fn send(&self) -> Option<BroadcastOutcome> {
        let notifier = self.notifier.as_ref()?;
        let outcome = notifier.send(&self.request);
        debug!(
            category = self.request.category(),
            timeout_ms = self.request.timeout_millis(),
            %outcome,
            "settings-changed broadcast"
        );
        Some(outcome)
    }
}

#[cfg(windows)]
fn resolve_system_notifier() -> Option<self::windows::SystemNotifier> {
    self::windows::SystemNotifier::resolve()
}

#[cfg(not(windows))]
fn resolve_system_notifier() -> Option<NoNotifier> {
    None
}

/// Placeholder notifier type; never constructed off Windows.
#[cfg(not(windows))]
enum NoNotifier {}

#[cfg(not(windows))]
impl SettingsNotifier for NoNotifier {
    fn send(&self, _request: &NotificationRequest) -> BroadcastOutcome {
        match *self {}
    }
}

#[cfg(test)]
mod tests;
