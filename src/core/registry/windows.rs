// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry-backed volatile store (Windows only).
//!
//! ```text
//! RegistryStore::open_scope()
//!   RegCreateKeyExW(HKCU, "Volatile Environment",
//!                   REG_OPTION_VOLATILE, KEY_SET_VALUE)
//!      |
//!      v
//! RegistryScope
//!   set_string() --> RegSetValueExW(REG_SZ)
//!   drop()       --> RegCloseKey
//! ```

use std::ffi::c_void;
use std::io;

use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS, WIN32_ERROR};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_SET_VALUE, REG_OPTION_VOLATILE, REG_SZ, RRF_RT_REG_SZ,
    RegCloseKey, RegCreateKeyExW, RegGetValueW, RegSetValueExW,
};
use windows::core::PCWSTR;

use super::{ScopeStore, VOLATILE_ENVIRONMENT, VolatileScope};

/// Converts a registry status code to a `std::io::Error`.
fn win32_result(status: WIN32_ERROR) -> io::Result<()> {
    if status == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(io::Error::from_raw_os_error(status.0.cast_signed()))
    }
}

/// Encodes `s` as a NUL-terminated UTF-16 string.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Store backed by `HKEY_CURRENT_USER\Volatile Environment`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

impl RegistryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reads a string value back from the volatile container.
    ///
    /// Returns `Ok(None)` when the value does not exist.
    ///
    /// # Errors
    ///
    /// Returns the OS error for any other failure.
    pub fn read_value(&self, name: &str) -> io::Result<Option<String>> {
        let subkey = to_wide(VOLATILE_ENVIRONMENT);
        let value_name = to_wide(name);
        let mut size: u32 = 0;

        // SAFETY: both strings are NUL-terminated and outlive the call; a null
        // data pointer asks only for the required size.
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(subkey.as_ptr()),
                PCWSTR::from_raw(value_name.as_ptr()),
                RRF_RT_REG_SZ,
                None,
                None,
                Some(&raw mut size),
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        win32_result(status)?;

        let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
        // SAFETY: `buffer` holds at least `size` bytes.
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(subkey.as_ptr()),
                PCWSTR::from_raw(value_name.as_ptr()),
                RRF_RT_REG_SZ,
                None,
                Some(buffer.as_mut_ptr().cast::<c_void>()),
                Some(&raw mut size),
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        win32_result(status)?;

        let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Ok(Some(String::from_utf16_lossy(&buffer[..len])))
    }
}

/// Open handle to the volatile container with `KEY_SET_VALUE` access.
///
/// The handle is closed when the scope is dropped.
#[derive(Debug)]
pub struct RegistryScope {
    key: HKEY,
}

impl VolatileScope for RegistryScope {
    fn set_string(&mut self, name: &str, value: &str) -> io::Result<()> {
        let name = to_wide(name);
        let data: Vec<u8> = to_wide(value)
            .into_iter()
            .flat_map(u16::to_le_bytes)
            .collect();

        // SAFETY: `self.key` is open with KEY_SET_VALUE; `name` is NUL-terminated
        // and `data` is a NUL-terminated UTF-16 buffer as REG_SZ requires.
        let status = unsafe {
            RegSetValueExW(
                self.key,
                PCWSTR::from_raw(name.as_ptr()),
                None,
                REG_SZ,
                Some(&data),
            )
        };
        win32_result(status)
    }
}

impl Drop for RegistryScope {
    fn drop(&mut self) {
        // SAFETY: we own this key handle and close it exactly once.
        unsafe {
            let _ = RegCloseKey(self.key);
        }
    }
}

impl ScopeStore for RegistryStore {
    type Scope<'a> = RegistryScope;

    fn open_scope(&self) -> io::Result<RegistryScope> {
        let subkey = to_wide(VOLATILE_ENVIRONMENT);
        let mut key = HKEY::default();

        // SAFETY: `subkey` is NUL-terminated and outlives the call; `key` is a
        // valid out-pointer. Only KEY_SET_VALUE is requested.
        let status = unsafe {
            RegCreateKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(subkey.as_ptr()),
                None,
                PCWSTR::null(),
                REG_OPTION_VOLATILE,
                KEY_SET_VALUE,
                None,
                &raw mut key,
                None,
            )
        };
        win32_result(status)?;

        Ok(RegistryScope { key })
    }

    fn location(&self) -> &str {
        r"HKCU\Volatile Environment"
    }
}
