//! Annotated message values.
//!
//! A [`Message`] pairs the original text with everything derived from it:
//! normalized text, word tokens and stop-word-filtered content tokens. The
//! derived fields are computed once in [`Message::annotate`] and can't be
//! edited afterwards, so a corpus can be shared across comparator threads
//! without synchronization.
//!
//! # Identity
//!
//! Ids are signed. Messages taken from a fetched timeline carry their
//! non-negative source id; injected ground-truth messages carry negative ids,
//! and an injected pair that is meant to be matched shares the same negative
//! id in both corpora. Comparators use that equality as the oracle for
//! hit vs. false positive.
//!
//! ```rust
//! use canonical::{CanonicalizeConfig, Message, StopWords};
//!
//! let stopwords = StopWords::from_words(["to"]);
//! let msg = Message::annotate(
//!     -3,
//!     "Adding some #messages to timeline.",
//!     &stopwords,
//!     &CanonicalizeConfig::default(),
//! );
//!
//! assert_eq!(msg.normalized_text(), "adding some messages to timeline.");
//! assert_eq!(msg.tokens(), ["adding", "some", "messages", "to", "timeline"]);
//! assert_eq!(msg.content_tokens(), ["adding", "some", "messages", "timeline"]);
//! assert!(msg.is_injected());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::normalize::normalize_with;
use crate::stopwords::StopWords;
use crate::token::{filter_stopwords, tokenize};

/// Signed message identity. Negative ids mark injected ground truth.
pub type MessageId = i64;

/// A message with its derived comparison views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    raw_text: String,
    normalized_text: String,
    /// Length of `normalized_text` in characters.
    normalized_len: usize,
    tokens: Vec<String>,
    content_tokens: Vec<String>,
}

impl Message {
    /// Normalizes and tokenizes `raw_text`.
    ///
    /// The result depends only on `raw_text`, `stopwords` and `cfg`.
    pub fn annotate(
        id: MessageId,
        raw_text: impl Into<String>,
        stopwords: &StopWords,
        cfg: &CanonicalizeConfig,
    ) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize_with(&raw_text, cfg);
        let normalized_len = normalized_text.chars().count();
        let tokens = tokenize(&normalized_text);
        let content_tokens = filter_stopwords(&tokens, stopwords);
        Self {
            id,
            raw_text,
            normalized_text,
            normalized_len,
            tokens,
            content_tokens,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Original, unmodified text.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Character count of the normalized text, used for fingerprint sizing.
    pub fn normalized_len(&self) -> usize {
        self.normalized_len
    }

    /// All word tokens in text order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens left after stop-word removal, in text order.
    pub fn content_tokens(&self) -> &[String] {
        &self.content_tokens
    }

    /// True for injected ground-truth messages.
    pub fn is_injected(&self) -> bool {
        self.id < 0
    }
}
