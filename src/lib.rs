//! Slack Feedback: deliver user feedback to Slack.
//!
//! A library for turning short free-text feedback into a Slack Block Kit
//! message and posting it through an Incoming Webhook.

pub mod composer;
pub mod config;
pub mod delivery;
pub mod feedback;
pub mod message;
pub mod metadata;
pub mod time;
