// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;

use super::{ConfigError, PublishError};

#[test]
fn test_scope_unavailable_display() {
    let err = PublishError::ScopeUnavailable {
        location: r"HKCU\Volatile Environment".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "access is denied"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r"volatile scope unavailable at 'HKCU\Volatile Environment': access is denied"
    );
}

#[test]
fn test_write_failed_keeps_source() {
    let err = PublishError::WriteFailed {
        name: "MY_TOOL_HOME".to_string(),
        source: io::Error::other("disk full"),
    };
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("disk full"));
    insta::assert_snapshot!(err.to_string(), @"failed to write 'MY_TOOL_HOME': disk full");
}

#[test]
fn test_rejected_input_classification() {
    let name = PublishError::InvalidName {
        name: String::new(),
        reason: "name is empty",
    };
    let value = PublishError::InvalidValue {
        name: "X".to_string(),
    };
    let scope = PublishError::ScopeUnavailable {
        location: "x".to_string(),
        source: io::Error::other("nope"),
    };
    assert!(name.is_rejected_input());
    assert!(value.is_rejected_input());
    assert!(!scope.is_rejected_input());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "broadcast".to_string(),
        key: "timeout_ms".to_string(),
        message: "must be between 1 and 5000, got 0".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'timeout_ms' in section '[broadcast]': must be between 1 and 5000, got 0"
    );
}
