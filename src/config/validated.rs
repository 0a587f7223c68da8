//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the binary. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::metadata::{Metadata, device_name};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required, non-blank; well-formedness is checked on delivery)
    pub webhook: String,

    /// Feedback text (required, non-blank)
    pub feedback: String,

    /// Identifier of the person giving feedback
    pub user_id: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Metadata rendered into the message
    pub metadata: Metadata,

    /// Request deadline; `None` leaves the HTTP client default
    pub timeout: Option<Duration>,

    /// Dry-run mode (print the message without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout_str = self
            .timeout
            .map_or_else(|| "default".to_string(), |t| format!("{}s", t.as_secs()));

        // The webhook URL is a secret and is never displayed.
        write!(
            f,
            "Config {{ device: {}, os: {}, app_version: {}, user_id: {}, email: {}, \
             timeout: {}, dry_run: {} }}",
            self.metadata.device_name,
            self.metadata.os_version,
            self.metadata.app_version.as_deref().unwrap_or("none"),
            self.user_id.is_some(),
            self.email.is_some(),
            timeout_str,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`webhook`, feedback text)
    /// - Required fields are blank
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook = Self::resolve_webhook(cli, toml)?;
        let feedback = Self::resolve_feedback(cli)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let metadata = Self::resolve_metadata(cli, toml);

        let sender = toml.map(|t| &t.sender);
        let user_id = non_blank(
            cli.user_id
                .clone()
                .or_else(|| sender.and_then(|s| s.user_id.clone())),
        );
        let email = non_blank(
            cli.email
                .clone()
                .or_else(|| sender.and_then(|s| s.email.clone())),
        );

        Ok(Self {
            webhook,
            feedback,
            user_id,
            email,
            metadata,
            timeout,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and a config file.
    ///
    /// Uses `cli.config` if set; otherwise reads [`defaults::config_path`]
    /// when that file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let webhook = cli
            .webhook
            .as_deref()
            .or_else(|| toml.and_then(|t| t.slack.webhook.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK,
                    "Use --webhook or set slack.webhook in config file",
                )
            })?;

        let trimmed = webhook.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Blank {
                field: field::WEBHOOK,
            });
        }

        Ok(trimmed.to_string())
    }

    fn resolve_feedback(cli: &Cli) -> Result<String, ConfigError> {
        let text = cli.text.as_deref().ok_or_else(|| {
            ConfigError::missing(field::FEEDBACK, "Pass the feedback text as an argument")
        })?;

        if text.trim().is_empty() {
            return Err(ConfigError::Blank {
                field: field::FEEDBACK,
            });
        }

        Ok(text.to_string())
    }

    fn resolve_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        // Priority: CLI explicit > TOML > transport default
        let Some(seconds) = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.slack.timeout))
        else {
            return Ok(None);
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Some(Duration::from_secs(seconds)))
    }

    fn resolve_metadata(cli: &Cli, toml: Option<&TomlConfig>) -> Metadata {
        let section = toml.map(|t| &t.metadata);

        let os_version = cli
            .os_version
            .clone()
            .or_else(|| section.and_then(|m| m.os_version.clone()))
            .unwrap_or_else(defaults::os_version);

        let device = cli
            .device
            .as_deref()
            .or_else(|| section.and_then(|m| m.device.as_deref()))
            .map_or_else(defaults::device_name, |d| device_name(d, None));

        let app_version = non_blank(
            cli.app_version
                .clone()
                .or_else(|| section.and_then(|m| m.app_version.clone())),
        );

        Metadata {
            os_version,
            device_name: device,
            app_version,
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Treats whitespace-only optional values as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
