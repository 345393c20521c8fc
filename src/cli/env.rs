// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `set` and `get` commands.

use clap::Args;

/// Arguments for `volenv set`.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Value to store. May be empty.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Skips the settings-changed broadcast after writing.
    #[arg(long = "no-broadcast")]
    pub no_broadcast: bool,
}

/// Arguments for `volenv get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "NAME")]
    pub name: String,
}
