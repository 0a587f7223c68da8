//! Composer trait and default Block Kit composer.

use chrono::FixedOffset;

use super::emoji;
use crate::message::{Attachment, Block, Message, TextElement};
use crate::metadata::Metadata;
use crate::time::{Clock, SystemClock, format_timestamp, utc_offset};

/// Turns feedback text into a Slack message.
///
/// This abstraction lets callers substitute a composer that produces a fixed
/// message in tests, or a different layout entirely.
///
/// # Example
///
/// ```
/// use slack_feedback::composer::Composer;
/// use slack_feedback::message::{Attachment, Block, Message};
/// use slack_feedback::metadata::Metadata;
///
/// struct Fixed(Metadata);
///
/// impl Composer for Fixed {
///     fn metadata(&self) -> &Metadata {
///         &self.0
///     }
///
///     fn compose(&self, _: &str, _: Option<&str>, _: Option<&str>) -> Message {
///         Message::single(Attachment::new(vec![Block::divider()]))
///     }
/// }
/// ```
pub trait Composer: Send + Sync {
    /// Returns the metadata rendered into every message.
    fn metadata(&self) -> &Metadata;

    /// Composes a message.
    ///
    /// # Arguments
    ///
    /// * `feedback` - Feedback text; callers are expected to reject blank input
    /// * `user_id` - Optional identifier of the author
    /// * `contact_email` - Optional address the author can be reached at
    fn compose(
        &self,
        feedback: &str,
        user_id: Option<&str>,
        contact_email: Option<&str>,
    ) -> Message;
}

/// Default composer producing one attachment with an info header.
///
/// The layout is fixed:
/// 1. A context block with device, OS, app version (if any), date, and the
///    user id (if any)
/// 2. A divider
/// 3. A section with the feedback text
/// 4. A section with the contact email (if any)
///
/// # Type Parameters
///
/// - `C`: The clock used for the date element (defaults to [`SystemClock`])
#[derive(Debug, Clone)]
pub struct MessageComposer<C = SystemClock> {
    metadata: Metadata,
    clock: C,
    offset: FixedOffset,
}

impl MessageComposer<SystemClock> {
    /// Creates a composer that timestamps with the system clock in UTC.
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            clock: SystemClock,
            offset: utc_offset(),
        }
    }
}

impl<C> MessageComposer<C> {
    /// Sets a custom clock.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> MessageComposer<C2> {
        MessageComposer {
            metadata: self.metadata,
            clock,
            offset: self.offset,
        }
    }

    /// Sets the UTC offset the date element is rendered in.
    #[must_use]
    pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the configured UTC offset.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl<C: Clock> Composer for MessageComposer<C> {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn compose(
        &self,
        feedback: &str,
        user_id: Option<&str>,
        contact_email: Option<&str>,
    ) -> Message {
        let timestamp = format_timestamp(self.clock.now(), self.offset);
        compose_with(feedback, user_id, contact_email, &self.metadata, &timestamp)
    }
}

/// Builds the message for the given inputs.
///
/// Pure: the date element shows `timestamp` verbatim. See [`MessageComposer`]
/// for the block order.
#[must_use]
pub fn compose_with(
    feedback: &str,
    user_id: Option<&str>,
    contact_email: Option<&str>,
    metadata: &Metadata,
    timestamp: &str,
) -> Message {
    let mut info = vec![
        labeled(emoji::DEVICE, &metadata.device_name),
        labeled(emoji::OS_VERSION, &metadata.os_version),
    ];
    if let Some(version) = &metadata.app_version {
        info.push(labeled(emoji::APP_VERSION, version));
    }
    info.push(labeled(emoji::DATE, timestamp));
    if let Some(user_id) = user_id {
        info.push(labeled(emoji::USER, user_id));
    }

    let mut blocks = vec![
        Block::context(info),
        Block::divider(),
        Block::section(emphasized(feedback)),
    ];
    if let Some(email) = contact_email {
        blocks.push(Block::section(emphasized(email)));
    }

    Message::single(Attachment::new(blocks))
}

/// `*<emoji>\t<value>*`
fn labeled(emoji: &str, value: &str) -> TextElement {
    TextElement::markdown(format!("*{emoji}\t{value}*"))
}

/// `*<value>*`
fn emphasized(value: &str) -> TextElement {
    TextElement::markdown(format!("*{value}*"))
}
