//! Delivery layer for posting composed messages to a Slack Incoming Webhook.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot webhook delivery ([`WebhookClient`])
//! - Classified delivery failures ([`DeliveryError`])

mod client;
mod error;
mod http;
mod webhook;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{CreateMessageError, DeliveryError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use webhook::{WebhookClient, WebhookSender, build_request};
