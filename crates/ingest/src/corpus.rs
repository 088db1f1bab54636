//! Corpus assembly.
//!
//! A corpus is the fetched messages followed by the injected ground-truth
//! messages, in insertion order. Injected messages get ids `-1, -2, ...` in
//! the order they were injected, so the k-th injection into the left corpus
//! and the k-th injection into the right corpus share id `-k` and count as
//! a true duplicate pair.

use std::time::Instant;

use canonical::{CanonicalizeConfig, Message, MessageId, StopWords};
use tracing::info;

use crate::error::IngestError;
use crate::types::RawMessage;

/// Collects fetched and injected messages before annotation.
#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    label: String,
    fetched: Vec<RawMessage>,
    injected: Vec<String>,
}

impl CorpusBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Appends messages from the primary source. Their ids must be >= 0.
    pub fn fetched<I>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = RawMessage>,
    {
        self.fetched.extend(messages);
        self
    }

    /// Appends injected ground-truth texts.
    pub fn inject<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.injected.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Annotates every message and freezes the corpus.
    pub fn build(
        self,
        stopwords: &StopWords,
        cfg: &CanonicalizeConfig,
    ) -> Result<Corpus, IngestError> {
        let start = Instant::now();
        cfg.validate()?;

        if let Some(bad) = self.fetched.iter().find(|m| m.id < 0) {
            return Err(IngestError::NegativeSourceId { id: bad.id });
        }

        let injected = self.injected.len();
        let mut messages = Vec::with_capacity(self.fetched.len() + injected);
        messages.extend(
            self.fetched
                .into_iter()
                .map(|raw| Message::annotate(raw.id, raw.text, stopwords, cfg)),
        );
        messages.extend(
            self.injected
                .into_iter()
                .zip(1..)
                .map(|(text, n): (String, MessageId)| {
                    Message::annotate(-n, text, stopwords, cfg)
                }),
        );

        info!(
            corpus = %self.label,
            messages = messages.len(),
            injected,
            elapsed_micros = start.elapsed().as_micros(),
            "corpus_built"
        );

        Ok(Corpus {
            label: self.label,
            messages,
            injected,
        })
    }
}

/// An ordered, immutable collection of annotated messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    label: String,
    messages: Vec<Message>,
    injected: usize,
}

impl Corpus {
    /// Builds a corpus directly from annotated messages.
    ///
    /// The injected count is the number of messages with negative ids.
    pub fn from_messages(label: impl Into<String>, messages: Vec<Message>) -> Self {
        let injected = messages.iter().filter(|m| m.is_injected()).count();
        Self {
            label: label.into(),
            messages,
            injected,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of injected ground-truth messages.
    pub fn injected_count(&self) -> usize {
        self.injected
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// The two corpora under comparison.
///
/// Construction fails when the injected counts differ, since the ground
/// truth would no longer pair up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPair {
    left: Corpus,
    right: Corpus,
}

impl CorpusPair {
    pub fn new(left: Corpus, right: Corpus) -> Result<Self, IngestError> {
        if left.injected_count() != right.injected_count() {
            return Err(IngestError::GroundTruthMismatch {
                left: left.injected_count(),
                right: right.injected_count(),
            });
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &Corpus {
        &self.left
    }

    pub fn right(&self) -> &Corpus {
        &self.right
    }

    /// Number of true duplicate pairs planted in the data.
    pub fn expected_pairs(&self) -> usize {
        self.left.injected_count()
    }
}
