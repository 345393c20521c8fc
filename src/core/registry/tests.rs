// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;

use super::{MemoryStore, RegistryStore, ScopeStore, VolatileScope};

#[test]
fn test_memory_scope_overwrites_by_name() {
    let store = MemoryStore::new();
    {
        let mut scope = store.open_scope().unwrap();
        scope.set_string("X", "1").unwrap();
        scope.set_string("X", "2").unwrap();
        scope.set_string("Y", "y").unwrap();
    }

    let values = store.values();
    assert_eq!(values.len(), 2);
    assert_eq!(store.get("X").as_deref(), Some("2"));
    assert_eq!(store.get("Y").as_deref(), Some("y"));
    assert_eq!(store.get("Z"), None);
}

#[test]
fn test_memory_scope_released_on_drop() {
    let store = MemoryStore::new();
    let scope = store.open_scope().unwrap();
    assert_eq!((store.opened(), store.released()), (1, 0));
    drop(scope);
    assert_eq!((store.opened(), store.released()), (1, 1));
}

#[test]
fn test_memory_store_unavailable() {
    let store = MemoryStore::unavailable(io::ErrorKind::PermissionDenied);
    let err = store.open_scope().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(store.opened(), 0);
}

#[test]
fn test_memory_store_read_only() {
    let store = MemoryStore::read_only(io::ErrorKind::PermissionDenied);
    let mut scope = store.open_scope().unwrap();
    let err = scope.set_string("X", "1").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    drop(scope);
    assert!(store.values().is_empty());
    assert_eq!(store.released(), 1);
}

#[test]
fn test_registry_location() {
    insta::assert_snapshot!(RegistryStore::new().location(), @r"HKCU\Volatile Environment");
}

#[cfg(not(windows))]
#[test]
fn test_registry_store_unsupported_off_windows() {
    let err = RegistryStore::new().open_scope().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Unsupported);
}

#[cfg(windows)]
#[test]
fn test_registry_round_trip() {
    let store = RegistryStore::new();
    let name = format!("VOLENV_TEST_{}", std::process::id());
    {
        let mut scope = store.open_scope().unwrap();
        scope.set_string(&name, r"C:\Tools\MyTool").unwrap();
    }
    assert_eq!(
        store.read_value(&name).unwrap().as_deref(),
        Some(r"C:\Tools\MyTool")
    );
    assert_eq!(store.read_value("VOLENV_TEST_MISSING_x1").unwrap(), None);
}
