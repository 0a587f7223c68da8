//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes why a request never produced a response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The HTTP stack rejected the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request was abandoned before a response arrived.
    #[error("Request cancelled")]
    Cancelled,
}

/// Reason a request could not be built.
#[derive(Debug, Error)]
pub enum CreateMessageError {
    /// The webhook URL does not parse.
    #[error("malformed webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The webhook URL parses but is not `http` or `https`.
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// The message could not be encoded as JSON.
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Error type for a delivery attempt.
///
/// Exactly one of three outcomes, so callers can tell a configuration
/// problem, a rejection by Slack, and an unreachable endpoint apart.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request could not be built; nothing was sent.
    #[error("Could not create message: {source}")]
    CouldNotCreateMessage {
        /// The webhook URL as supplied
        url: String,
        /// What went wrong
        #[source]
        source: CreateMessageError,
    },

    /// Slack answered with a non-2xx status.
    #[error("Could not send message: webhook returned {status}")]
    CouldNotSendMessage {
        /// The webhook URL as supplied
        url: String,
        /// Status code received
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The request never completed.
    #[error("Transport failure: {source}")]
    TransportFailure {
        /// The webhook URL as supplied
        url: String,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },
}

impl DeliveryError {
    /// Returns the webhook URL the failed delivery targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::CouldNotCreateMessage { url, .. }
            | Self::CouldNotSendMessage { url, .. }
            | Self::TransportFailure { url, .. } => url,
        }
    }

    /// Returns true for [`DeliveryError::CouldNotCreateMessage`].
    #[must_use]
    pub const fn is_create_error(&self) -> bool {
        matches!(self, Self::CouldNotCreateMessage { .. })
    }

    /// Returns true for [`DeliveryError::CouldNotSendMessage`].
    #[must_use]
    pub const fn is_send_error(&self) -> bool {
        matches!(self, Self::CouldNotSendMessage { .. })
    }

    /// Returns true for [`DeliveryError::TransportFailure`].
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }
}
