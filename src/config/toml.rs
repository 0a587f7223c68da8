//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub slack: SlackSection,

    /// Message metadata section
    #[serde(default)]
    pub metadata: MetadataSection,

    /// Default sender identity section
    #[serde(default)]
    pub sender: SenderSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlackSection {
    /// Incoming Webhook URL
    pub webhook: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Message metadata section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSection {
    /// OS name and version
    pub os_version: Option<String>,

    /// Device name or machine identifier
    pub device: Option<String>,

    /// App version
    pub app_version: Option<String>,
}

/// Default sender identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderSection {
    /// Identifier of the person giving feedback
    pub user_id: Option<String>,

    /// Contact email
    pub email: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Slack Feedback Configuration File

[slack]
# Incoming Webhook URL (required, can be overridden by --webhook)
# webhook = "https://hooks.slack.com/services/T000/B000/XXXX"

# Request timeout in seconds (default: HTTP client default)
# timeout = 10

[metadata]
# OS name and version (default: running platform)
# os_version = "iOS 17.2"

# Device name or Apple machine identifier (default: running platform)
# Identifiers such as "iPhone16,1" are translated to "iPhone 15"
# device = "iPhone16,1"

# App version (omitted from the message when unset)
# app_version = "1.0.0"

[sender]
# Identifier of the person giving feedback
# user_id = "U123"

# Contact email shown below the feedback
# email = "someone@example.com"
"#
    .to_string()
}
