// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for publishing.
//!
//! Drives the public `Publisher` API with an in-memory scope store and a
//! counting notifier in place of `SendMessageTimeoutW`.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use volenv::cmd::env::broadcaster_for;
use volenv::config::types::BroadcastConfig;
use volenv::core::broadcast::{
    BroadcastOutcome, ChangeBroadcaster, NotificationRequest, SettingsNotifier,
};
use volenv::core::env::{Publisher, read_current};
use volenv::core::registry::MemoryStore;
use volenv::error::PublishError;

#[derive(Clone, Default)]
struct CountingNotifier {
    calls: Arc<AtomicUsize>,
    last_timeout_ms: Arc<AtomicUsize>,
}

impl SettingsNotifier for CountingNotifier {
    fn send(&self, request: &NotificationRequest) -> BroadcastOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_timeout_ms
            .store(request.timeout_millis() as usize, Ordering::SeqCst);
        BroadcastOutcome::Delivered
    }
}

fn publisher_with(store: MemoryStore) -> (Publisher<MemoryStore>, CountingNotifier) {
    let notifier = CountingNotifier::default();
    let publisher = Publisher::new(store, ChangeBroadcaster::with_notifier(notifier.clone()));
    (publisher, notifier)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn publish_tool_home() {
    let (publisher, notifier) = publisher_with(MemoryStore::new());

    publisher
        .publish("MY_TOOL_HOME", r"C:\Tools\MyTool")
        .unwrap();

    assert_eq!(
        publisher.store().get("MY_TOOL_HOME").as_deref(),
        Some(r"C:\Tools\MyTool")
    );
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.last_timeout_ms.load(Ordering::SeqCst), 5000);
}

#[test]
fn publish_twice_overwrites_and_broadcasts_twice() {
    let (publisher, notifier) = publisher_with(MemoryStore::new());

    publisher.publish("X", "1").unwrap();
    publisher.publish("X", "2").unwrap();

    let values = publisher.store().values();
    assert_eq!(values.len(), 1);
    assert_eq!(values["X"], "2");
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn publish_round_trips_unicode() {
    let (publisher, _notifier) = publisher_with(MemoryStore::new());
    let value = "Grüße / 環境 / 🚀 ; with spaces";

    publisher.publish("GREETING", value).unwrap();

    assert_eq!(publisher.store().get("GREETING").as_deref(), Some(value));
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn unavailable_scope_fails_without_broadcast() {
    let (publisher, notifier) =
        publisher_with(MemoryStore::unavailable(io::ErrorKind::PermissionDenied));

    let err = publisher.publish("X", "1").unwrap_err();

    match err {
        PublishError::ScopeUnavailable { location, source } => {
            assert!(location.ends_with("Volatile Environment"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected ScopeUnavailable, got {other:?}"),
    }
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_write_releases_scope() {
    let (publisher, notifier) = publisher_with(MemoryStore::read_only(io::ErrorKind::Other));

    assert!(matches!(
        publisher.publish("X", "1"),
        Err(PublishError::WriteFailed { .. })
    ));
    assert_eq!(publisher.store().opened(), publisher.store().released());
    assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn absent_broadcast_primitive_still_succeeds() {
    let publisher = Publisher::new(MemoryStore::new(), ChangeBroadcaster::disabled());

    publisher.publish("X", "1").unwrap();

    assert!(!publisher.broadcaster().is_enabled());
    assert_eq!(publisher.store().get("X").as_deref(), Some("1"));
}

// =============================================================================
// Broadcast configuration
// =============================================================================

#[test]
fn broadcast_config_maps_to_request() {
    let settings = BroadcastConfig {
        enabled: true,
        timeout_ms: 750,
    };
    assert_eq!(
        settings.to_request(),
        NotificationRequest::new(Duration::from_millis(750))
    );

    let disabled = BroadcastConfig {
        enabled: false,
        ..BroadcastConfig::default()
    };
    assert!(!broadcaster_for(&disabled, false).is_enabled());
    assert!(!broadcaster_for(&settings, true).is_enabled());
}

#[test]
fn read_current_missing_is_empty() {
    assert_eq!(read_current("NONEXISTENT_VAR_x1"), "");
}

#[cfg(windows)]
#[test]
fn publish_to_registry() {
    use volenv::core::registry::RegistryStore;

    let publisher = Publisher::new(RegistryStore::new(), ChangeBroadcaster::system());
    let name = format!("VOLENV_IT_{}", std::process::id());

    publisher.publish(&name, "1").unwrap();
    publisher.publish(&name, "2").unwrap();

    assert_eq!(
        publisher.store().read_value(&name).unwrap().as_deref(),
        Some("2")
    );
}
