//! Message composition from feedback text and metadata.
//!
//! This module provides:
//! - The composition seam ([`Composer`])
//! - The default composer ([`MessageComposer`])
//! - The pure composition function ([`compose_with`])
//! - The emoji glyphs prefixed to context elements ([`emoji`])

mod compose;
pub mod emoji;

#[cfg(test)]
mod compose_tests;

pub use compose::{Composer, MessageComposer, compose_with};
