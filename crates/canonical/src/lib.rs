//! dupescan canonical text layer.
//!
//! Turns raw short messages into the views the comparators work on:
//!
//! - **normalized text**: `#` markers, `@mentions` and URL-like spans
//!   removed, whitespace collapsed, lowercased ([`normalize`])
//! - **tokens**: words split on every non-letter except the apostrophe
//!   ([`tokenize`])
//! - **content tokens**: tokens minus stop words ([`filter_stopwords`])
//!
//! [`Message::annotate`] runs all three and freezes the result.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no global mutable state. The same text, stop-word set
//! and config always produce the same [`Message`], and normalizing already
//! normalized text changes nothing.

mod config;
mod error;
mod message;
mod normalize;
mod stopwords;
mod token;
mod whitespace;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::message::{Message, MessageId};
pub use crate::normalize::{normalize, normalize_with};
pub use crate::stopwords::StopWords;
pub use crate::token::{filter_stopwords, is_delimiter, tokenize};
pub use crate::whitespace::collapse_whitespace;
