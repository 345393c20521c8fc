// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `set` and `get` commands.
//!
//! ```text
//! set --> dry?  MemoryStore + no broadcast
//!         else  RegistryStore + ChangeBroadcaster(config.broadcast)
//! get --> read_current
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::env::{GetArgs, SetArgs};
use crate::config::Config;
use crate::config::types::BroadcastConfig;
use crate::core::broadcast::ChangeBroadcaster;
use crate::core::env::{Publisher, read_current};
use crate::core::registry::{MemoryStore, RegistryStore};
use crate::error::Result;

/// Builds the broadcaster for a `set` invocation.
#[must_use]
pub fn broadcaster_for(settings: &BroadcastConfig, no_broadcast: bool) -> ChangeBroadcaster {
    if no_broadcast || !settings.enabled {
        ChangeBroadcaster::disabled()
    } else {
        ChangeBroadcaster::system().with_request(settings.to_request())
    }
}

/// Run the set command.
///
/// # Errors
///
/// Returns an error if the variable could not be written.
pub fn run_set_command(args: &SetArgs, config: &Config) -> Result<()> {
    if config.global.dry {
        let publisher = Publisher::new(MemoryStore::new(), ChangeBroadcaster::disabled());
        publisher
            .publish(&args.name, &args.value)
            .with_context(|| format!("failed to publish '{}'", args.name))?;
        info!(
            name = %args.name,
            value = %args.value,
            "dry run, registry not modified"
        );
        return Ok(());
    }

    let publisher = Publisher::new(
        RegistryStore::new(),
        broadcaster_for(&config.broadcast, args.no_broadcast),
    );
    publisher
        .publish(&args.name, &args.value)
        .with_context(|| format!("failed to publish '{}'", args.name))
}

/// Run the get command.
pub fn run_get_command(args: &GetArgs) {
    println!("{}", read_current(&args.name));
}
