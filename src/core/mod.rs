// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core publishing machinery.
//!
//! ```text
//! env        Publisher::publish, read_current
//!  |
//!  +--> registry    ScopeStore / VolatileScope (RegistryStore, MemoryStore)
//!  +--> broadcast   ChangeBroadcaster (WM_SETTINGCHANGE)
//! ```

pub mod broadcast;
pub mod env;
pub mod registry;
