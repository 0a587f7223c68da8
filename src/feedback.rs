//! Feedback service: binds a webhook to a composer and sends messages.
//!
//! This is the entry point for host applications:
//! - [`FeedbackConfiguration`] pairs a webhook URL with a [`Composer`]
//! - [`SlackConfiguration`] is the default pairing
//! - [`SlackFeedback`] composes and delivers in one call
//!
//! # Example
//!
//! ```no_run
//! use slack_feedback::feedback::{SlackConfiguration, SlackFeedback};
//! use slack_feedback::metadata::Metadata;
//!
//! # async fn example() -> Result<(), slack_feedback::delivery::DeliveryError> {
//! let configuration = SlackConfiguration::with_metadata(
//!     "https://hooks.slack.com/services/T000/B000/XXXX",
//!     Metadata::new("iOS 17.2", "iPhone 15"),
//! );
//! let feedback = SlackFeedback::new(configuration);
//!
//! feedback
//!     .send_feedback("The export button is hard to find", Some("U123"), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::composer::{Composer, MessageComposer};
use crate::delivery::{DeliveryError, WebhookClient, WebhookSender};
use crate::message::Message;
use crate::metadata::Metadata;

/// Binding of a webhook URL to the composer that builds its messages.
///
/// Implement this to substitute a stub composer or a mock endpoint in tests.
pub trait FeedbackConfiguration: Send + Sync {
    /// Composer used for every message.
    type Composer: Composer;

    /// Webhook URL messages are posted to.
    fn webhook(&self) -> &str;

    /// Returns the composer.
    fn composer(&self) -> &Self::Composer;

    /// Composes a message with this configuration's composer.
    fn compose_feedback(
        &self,
        feedback: &str,
        user_id: Option<&str>,
        contact_email: Option<&str>,
    ) -> Message {
        self.composer().compose(feedback, user_id, contact_email)
    }
}

/// Default configuration holding a webhook URL and a composer.
#[derive(Debug, Clone)]
pub struct SlackConfiguration<C = MessageComposer> {
    webhook: String,
    composer: C,
}

impl SlackConfiguration<MessageComposer> {
    /// Creates a configuration using the default [`MessageComposer`].
    #[must_use]
    pub fn with_metadata(webhook: impl Into<String>, metadata: Metadata) -> Self {
        Self::new(webhook, MessageComposer::new(metadata))
    }
}

impl<C> SlackConfiguration<C> {
    /// Creates a configuration with a custom composer.
    #[must_use]
    pub fn new(webhook: impl Into<String>, composer: C) -> Self {
        Self {
            webhook: webhook.into(),
            composer,
        }
    }
}

impl<C: Composer> FeedbackConfiguration for SlackConfiguration<C> {
    type Composer = C;

    fn webhook(&self) -> &str {
        &self.webhook
    }

    fn composer(&self) -> &C {
        &self.composer
    }
}

/// Composes feedback and delivers it to the configured webhook.
///
/// Immutable after construction; concurrent calls share no mutable state
/// and each performs its own request.
///
/// # Type Parameters
///
/// - `F`: The configuration
/// - `S`: The sender (defaults to [`WebhookClient`])
#[derive(Debug, Clone)]
pub struct SlackFeedback<F, S = WebhookClient> {
    configuration: F,
    sender: S,
}

impl<F: FeedbackConfiguration> SlackFeedback<F, WebhookClient> {
    /// Creates a service that delivers with a default [`WebhookClient`].
    #[must_use]
    pub fn new(configuration: F) -> Self {
        Self::with_sender(configuration, WebhookClient::new())
    }
}

impl<F, S> SlackFeedback<F, S> {
    /// Creates a service with a custom sender.
    #[must_use]
    pub const fn with_sender(configuration: F, sender: S) -> Self {
        Self {
            configuration,
            sender,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn configuration(&self) -> &F {
        &self.configuration
    }
}

impl<F: FeedbackConfiguration, S: WebhookSender> SlackFeedback<F, S> {
    /// Composes the message that [`send_feedback`](Self::send_feedback) would send.
    #[must_use]
    pub fn compose_feedback(
        &self,
        feedback: &str,
        user_id: Option<&str>,
        contact_email: Option<&str>,
    ) -> Message {
        self.configuration
            .compose_feedback(feedback, user_id, contact_email)
    }

    /// Composes feedback and posts it to the webhook.
    ///
    /// Blank feedback is not rejected here; callers decide that policy.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the request cannot be built, Slack
    /// rejects it, or it never reaches Slack.
    pub async fn send_feedback(
        &self,
        feedback: &str,
        user_id: Option<&str>,
        contact_email: Option<&str>,
    ) -> Result<(), DeliveryError> {
        let message = self.compose_feedback(feedback, user_id, contact_email);
        self.sender
            .deliver(self.configuration.webhook(), &message)
            .await?;

        tracing::info!("Feedback delivered ({} chars)", feedback.chars().count());
        Ok(())
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
