// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{
    BroadcastOutcome, ChangeBroadcaster, DEFAULT_TIMEOUT, NotificationRequest, SettingsNotifier,
};

#[derive(Clone)]
struct ScriptedNotifier {
    outcome: BroadcastOutcome,
    seen: Arc<Mutex<Vec<NotificationRequest>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedNotifier {
    fn new(outcome: BroadcastOutcome) -> Self {
        Self {
            outcome,
            seen: Arc::default(),
            calls: Arc::default(),
        }
    }
}

impl SettingsNotifier for ScriptedNotifier {
    fn send(&self, request: &NotificationRequest) -> BroadcastOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(*request);
        self.outcome
    }
}

#[test]
fn test_default_request() {
    let request = NotificationRequest::default();
    assert_eq!(request.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(request.timeout_millis(), 5000);
    assert_eq!(request.category(), "Environment");
}

#[test]
fn test_timeout_is_capped() {
    let huge = NotificationRequest::new(Duration::from_secs(u64::MAX));
    let minute = NotificationRequest::new(Duration::from_secs(60));
    let short = NotificationRequest::new(Duration::from_millis(250));

    assert_eq!(huge.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(minute.timeout_millis(), 5000);
    assert_eq!(short.timeout_millis(), 250);
}

#[test]
fn test_disabled_broadcaster_is_noop() {
    let broadcaster = ChangeBroadcaster::disabled();
    assert!(!broadcaster.is_enabled());
    assert_eq!(broadcaster.send(), None);
    broadcaster.broadcast();
}

#[test]
fn test_outcome_is_computed_but_not_surfaced() {
    let outcomes = [
        BroadcastOutcome::Delivered,
        BroadcastOutcome::Aborted,
        BroadcastOutcome::TimedOut,
    ];
    for outcome in outcomes {
        let notifier = ScriptedNotifier::new(outcome);
        let broadcaster = ChangeBroadcaster::with_notifier(notifier.clone());
        assert_eq!(broadcaster.send(), Some(outcome));
        broadcaster.broadcast();
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 2);
    }
}

#[test]
fn test_custom_request_reaches_notifier() {
    let notifier = ScriptedNotifier::new(BroadcastOutcome::Delivered);
    let request = NotificationRequest::new(Duration::from_millis(250));
    let broadcaster = ChangeBroadcaster::with_notifier(notifier.clone()).with_request(request);

    broadcaster.broadcast();

    let seen = notifier.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[request]);
}

#[test]
fn test_outcome_display() {
    insta::assert_snapshot!(
        format!(
            "{} / {} / {}",
            BroadcastOutcome::Delivered,
            BroadcastOutcome::Aborted,
            BroadcastOutcome::TimedOut
        ),
        @"delivered / aborted / timed out"
    );
}

#[cfg(not(windows))]
#[test]
fn test_system_broadcaster_absent_off_windows() {
    assert!(!ChangeBroadcaster::system().is_enabled());
}

#[cfg(windows)]
#[test]
fn test_system_broadcaster_resolves_on_windows() {
    let broadcaster = ChangeBroadcaster::system();
    assert!(broadcaster.is_enabled());
}
