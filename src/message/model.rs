//! Value types for the Block Kit payload.

use serde::{Deserialize, Serialize};

/// Text format of a [`TextElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextKind {
    /// Slack's markdown dialect.
    #[serde(rename = "mrkdwn")]
    Markdown,
}

/// A single piece of text inside a section or context block.
///
/// Serializes as `{"type": "mrkdwn", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    /// Text format
    #[serde(rename = "type")]
    pub kind: TextKind,
    /// Rendered text, including any emphasis markers
    pub text: String,
}

impl TextElement {
    /// Creates a markdown element with the given text.
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Markdown,
            text: text.into(),
        }
    }
}

/// Discriminant of a [`Block`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A section block
    Section,
    /// A context block
    Context,
    /// A divider block
    Divider,
}

/// One structural unit of a Slack message.
///
/// The block type decides which payload is present: a section carries exactly
/// one `text`, a context carries `elements`, and a divider carries nothing.
/// Modelling this as an enum means a block can never carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Container for a single piece of text.
    Section {
        /// The section text
        text: TextElement,
    },
    /// Compact row of short text elements.
    ///
    /// Expected to hold at least one element.
    Context {
        /// Elements in display order
        elements: Vec<TextElement>,
    },
    /// Horizontal rule between blocks.
    Divider,
}

impl Block {
    /// Creates a section block.
    #[must_use]
    pub const fn section(text: TextElement) -> Self {
        Self::Section { text }
    }

    /// Creates a context block.
    #[must_use]
    pub const fn context(elements: Vec<TextElement>) -> Self {
        Self::Context { elements }
    }

    /// Creates a divider block.
    #[must_use]
    pub const fn divider() -> Self {
        Self::Divider
    }

    /// Returns the block's kind.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Section { .. } => BlockKind::Section,
            Self::Context { .. } => BlockKind::Context,
            Self::Divider => BlockKind::Divider,
        }
    }

    /// Returns the section text, if this is a section block.
    #[must_use]
    pub const fn text(&self) -> Option<&TextElement> {
        match self {
            Self::Section { text } => Some(text),
            Self::Context { .. } | Self::Divider => None,
        }
    }

    /// Returns the context elements, or an empty slice for other kinds.
    #[must_use]
    pub fn elements(&self) -> &[TextElement] {
        match self {
            Self::Context { elements } => elements,
            Self::Section { .. } | Self::Divider => &[],
        }
    }
}

/// An ordered group of blocks forming one visual unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Blocks in display order
    pub blocks: Vec<Block>,
}

impl Attachment {
    /// Creates an attachment from its blocks.
    #[must_use]
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// Root payload posted to an Incoming Webhook.
///
/// Holds at least one attachment. Built fresh for every composition and
/// discarded once serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Attachments in display order
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Creates a message from its attachments.
    #[must_use]
    pub const fn new(attachments: Vec<Attachment>) -> Self {
        Self { attachments }
    }

    /// Creates a message holding exactly one attachment.
    #[must_use]
    pub fn single(attachment: Attachment) -> Self {
        Self::new(vec![attachment])
    }

    /// Iterates over every block of every attachment, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.attachments.iter().flat_map(|a| a.blocks.iter())
    }

    /// Serializes the message to the compact JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Serializes the message to indented JSON for display.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
