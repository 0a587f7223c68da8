//! Configuration layer for the `slack-feedback` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The feedback text itself is CLI-only. The webhook URL has no default and
//! must come from the CLI or the config file.
//!
//! # Config File Location
//!
//! `--config` selects a file explicitly; a missing file is an error. Without
//! it, [`defaults::config_path`] is read if it exists and ignored otherwise.
//!
//! # Metadata
//!
//! The binary stands in for a host application, so it also supplies the
//! message metadata. Unset fields fall back to the running platform
//! (see [`defaults::os_version`] and [`defaults::device_name`]).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
