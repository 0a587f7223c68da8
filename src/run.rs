//! Application execution logic.
//!
//! This module composes the feedback message from validated config and
//! either prints it (dry run) or posts it to the webhook.

use chrono::{Local, Offset};
use thiserror::Error;

use slack_feedback::composer::MessageComposer;
use slack_feedback::config::ValidatedConfig;
use slack_feedback::delivery::{DeliveryError, WebhookClient};
use slack_feedback::feedback::{SlackConfiguration, SlackFeedback};

/// Service type used by the binary.
type AppFeedback = SlackFeedback<SlackConfiguration<MessageComposer>, WebhookClient>;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Delivery to the webhook failed.
    #[error("Failed to deliver feedback: {0}")]
    Delivery(#[source] DeliveryError),

    /// The message could not be rendered for a dry run.
    #[error("Failed to render message: {0}")]
    Render(#[source] serde_json::Error),
}

/// Executes a single feedback submission.
///
/// In dry-run mode the composed message is printed to stdout and nothing
/// is sent.
///
/// # Errors
///
/// Returns an error if rendering or delivery fails.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let service = build_service(&config);

    if config.dry_run {
        println!("{}", render(&service, &config)?);
        tracing::info!("Dry run: message not sent");
        return Ok(());
    }

    service
        .send_feedback(
            &config.feedback,
            config.user_id.as_deref(),
            config.email.as_deref(),
        )
        .await
        .map_err(RunError::Delivery)
}

/// Builds the feedback service, timestamping in the local timezone.
fn build_service(config: &ValidatedConfig) -> AppFeedback {
    let composer =
        MessageComposer::new(config.metadata.clone()).with_offset(Local::now().offset().fix());

    let mut client = WebhookClient::new();
    if let Some(timeout) = config.timeout {
        client = client.with_timeout(timeout);
    }

    SlackFeedback::with_sender(
        SlackConfiguration::new(config.webhook.clone(), composer),
        client,
    )
}

/// Renders the message the service would send as pretty JSON.
fn render(service: &AppFeedback, config: &ValidatedConfig) -> Result<String, RunError> {
    let message = service.compose_feedback(
        &config.feedback,
        config.user_id.as_deref(),
        config.email.as_deref(),
    );
    let json = message.to_pretty_json().map_err(RunError::Render)?;
    Ok(json)
}
