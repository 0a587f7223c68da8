//! Slack Block Kit message model.
//!
//! This module provides the serializable tree sent to an Incoming Webhook:
//! - [`Message`] (root, one or more [`Attachment`]s)
//! - [`Attachment`] (ordered [`Block`]s)
//! - [`Block`] (section, context, or divider)
//! - [`TextElement`] (`mrkdwn` text)
//!
//! The JSON keys are fixed by Slack: `attachments`, `blocks`, `type`,
//! `elements`, and `text`.

mod model;


pub use model::{Attachment, Block, BlockKind, Message, TextElement, TextKind};
