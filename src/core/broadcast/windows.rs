// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dynamically resolved `SendMessageTimeoutW` (Windows only).

use windows::Win32::Foundation::ERROR_TIMEOUT;
use windows::Win32::System::LibraryLoader::{
    GetProcAddress, LOAD_LIBRARY_SEARCH_SYSTEM32, LoadLibraryExW,
};
use windows::core::{s, w};

use super::{BroadcastOutcome, NotificationRequest, SettingsNotifier};

const HWND_BROADCAST: isize = 0xFFFF;
const WM_SETTINGCHANGE: u32 = 0x001A;
const SMTO_ABORTIFHUNG: u32 = 0x0002;

type SendMessageTimeoutW =
    unsafe extern "system" fn(isize, u32, usize, isize, u32, u32, *mut usize) -> isize;

/// `user32!SendMessageTimeoutW`, looked up at runtime.
pub(super) struct SystemNotifier {
    send_message_timeout: SendMessageTimeoutW,
}

impl SystemNotifier {
    /// Looks up the primitive, returning `None` when user32 or the export is missing.
    pub(super) fn resolve() -> Option<Self> {
        // SAFETY: loading a system DLL from System32 only; the module is never
        // freed, so the resolved pointer stays valid for the life of the process.
        let module =
            unsafe { LoadLibraryExW(w!("user32.dll"), None, LOAD_LIBRARY_SEARCH_SYSTEM32) }
                .ok()?;
        // SAFETY: `module` is a valid loaded module and the name is NUL-terminated.
        let proc = unsafe { GetProcAddress(module, s!("SendMessageTimeoutW")) }?;
        // SAFETY: the export has exactly the `SendMessageTimeoutW` signature.
        let send_message_timeout = unsafe {
            std::mem::transmute::<unsafe extern "system" fn() -> isize, SendMessageTimeoutW>(proc)
        };
        Some(Self {
            send_message_timeout,
        })
    }
}

impl SettingsNotifier for SystemNotifier {
    fn send(&self, request: &NotificationRequest) -> BroadcastOutcome {
        let payload = w!("Environment");
        let mut result: usize = 0;

        // SAFETY: `payload` is a static NUL-terminated UTF-16 literal and
        // `result` is a valid out-pointer for the duration of the call.
        let status = unsafe {
            (self.send_message_timeout)(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                0,
                payload.as_ptr() as isize,
                SMTO_ABORTIFHUNG,
                request.timeout_millis(),
                &raw mut result,
            )
        };

        if status != 0 {
            BroadcastOutcome::Delivered
        } else if std::io::Error::last_os_error().raw_os_error()
            == Some(ERROR_TIMEOUT.0.cast_signed())
        {
            BroadcastOutcome::TimedOut
        } else {
            BroadcastOutcome::Aborted
        }
    }
}
