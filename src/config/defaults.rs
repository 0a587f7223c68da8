//! Default values for configuration options.

use std::path::PathBuf;

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "slack-feedback";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// File written by `init` when no output path is given.
pub const INIT_OUTPUT: &str = "slack-feedback.toml";

/// Default config file location, if the platform has a config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// OS description of the running platform.
#[must_use]
pub fn os_version() -> String {
    std::env::consts::OS.to_string()
}

/// Device description of the running platform.
#[must_use]
pub fn device_name() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}
