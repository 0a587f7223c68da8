//! Webhook sender trait and single-shot HTTP implementation.

use std::time::Duration;

use super::{
    CreateMessageError, DeliveryError, HttpClient, HttpError, HttpRequest, HttpResponse,
    ReqwestClient,
};
use crate::message::Message;

/// Trait for delivering a composed message to a webhook.
///
/// This abstraction lets the feedback service be tested with a stub sender,
/// independently of the HTTP layer.
pub trait WebhookSender: Send + Sync {
    /// Posts `message` to `webhook_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] classifying why the message was not accepted.
    fn deliver(
        &self,
        webhook_url: &str,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

/// HTTP-based webhook sender.
///
/// Each call to [`deliver`](WebhookSender::deliver) validates the URL,
/// serializes the message, and issues exactly one POST. There is no retry,
/// no deduplication, and no state kept between calls: two calls with the same
/// message produce two Slack posts.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use slack_feedback::delivery::{WebhookClient, WebhookSender};
/// use slack_feedback::message::{Attachment, Block, Message};
///
/// # async fn example() -> Result<(), slack_feedback::delivery::DeliveryError> {
/// let client = WebhookClient::new();
/// let message = Message::single(Attachment::new(vec![Block::divider()]));
/// client
///     .deliver("https://hooks.slack.com/services/T000/B000/XXXX", &message)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H = ReqwestClient> {
    client: H,
    timeout: Option<Duration>,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a sender using a default [`ReqwestClient`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(ReqwestClient::new())
    }
}

impl Default for WebhookClient<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> WebhookClient<H> {
    /// Creates a sender over the given HTTP client.
    #[must_use]
    pub const fn with_client(client: H) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Sets a deadline for the whole request.
    ///
    /// Without one the transport's own default applies. An expired deadline
    /// is reported as [`DeliveryError::TransportFailure`].
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured deadline, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Sends the request, honoring the configured deadline.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.request(request))
                .await
                .unwrap_or_else(|_| Err(HttpError::Timeout)),
            None => self.client.request(request).await,
        }
    }
}

impl<H: HttpClient> WebhookSender for WebhookClient<H> {
    async fn deliver(&self, webhook_url: &str, message: &Message) -> Result<(), DeliveryError> {
        let request = build_request(webhook_url, message).map_err(|source| {
            DeliveryError::CouldNotCreateMessage {
                url: webhook_url.to_string(),
                source,
            }
        })?;

        // The URL path is the webhook secret; only the host is logged.
        let host = request.url.host_str().unwrap_or_default().to_string();
        tracing::debug!("Posting feedback to {host}");

        let response = self
            .execute(request)
            .await
            .map_err(|source| DeliveryError::TransportFailure {
                url: webhook_url.to_string(),
                source,
            })?;

        if response.is_success() {
            tracing::debug!("Webhook on {host} accepted message ({})", response.status);
            return Ok(());
        }

        tracing::warn!("Webhook on {host} rejected message ({})", response.status);
        Err(DeliveryError::CouldNotSendMessage {
            url: webhook_url.to_string(),
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

/// Builds the POST request for `message`.
///
/// # Errors
///
/// Returns [`CreateMessageError`] if the URL is malformed or not
/// `http`/`https`, or if the message cannot be encoded.
pub fn build_request(
    webhook_url: &str,
    message: &Message,
) -> Result<HttpRequest, CreateMessageError> {
    let url = url::Url::parse(webhook_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CreateMessageError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    let body = message.to_json()?;
    Ok(HttpRequest::post_json(url, body))
}
