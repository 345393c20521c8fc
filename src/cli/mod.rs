// volenv: Volatile Environment Publisher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for volenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! volenv [global options] <command>
//! set NAME VALUE [--no-broadcast]
//! get NAME
//! options
//! configs
//! version
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{GetArgs, SetArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Volatile Environment Publisher
///
/// Sets session-scoped environment variables for the current user.
#[derive(Debug, Parser)]
#[command(
    name = "volenv",
    author,
    version,
    about = "Volatile Environment Publisher",
    long_about = "volenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Writes variables to HKCU\\Volatile Environment and tells running\n\
                  programs that the environment changed. Values last until logoff.",
    after_help = "CONFIG FILES:\n\n\
                  By default, volenv loads `volenv.toml` from the current directory\n\
                  if it exists. Additional files can be given with --config; they\n\
                  are loaded in order and override earlier ones. VOLENV_SECTION__KEY\n\
                  environment variables and --set options override all files. Use\n\
                  --no-default-config to skip `volenv.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used by volenv.
    Configs,

    /// Publishes a variable to the volatile environment.
    Set(SetArgs),

    /// Prints a variable from this process's environment.
    Get(GetArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
