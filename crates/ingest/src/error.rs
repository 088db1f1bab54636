//! Error types produced by the ingest crate.
//!
//! Every variant is a setup problem: the run cannot start until the input
//! files or the corpus configuration are fixed. None of them is retried.
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`Io`](IngestError::Io) | A source file could not be read |
//! | [`Parse`](IngestError::Parse) | A timeline file is not the expected JSON shape |
//! | [`EmptyStopWords`](IngestError::EmptyStopWords) | The stop-word file has no words |
//! | [`NegativeSourceId`](IngestError::NegativeSourceId) | A fetched message uses the injected id range |
//! | [`GroundTruthMismatch`](IngestError::GroundTruthMismatch) | The corpora inject different numbers of messages |
//! | [`Canonical`](IngestError::Canonical) | The normalization config is invalid |
use canonical::CanonicalError;
use thiserror::Error;

/// Errors raised while loading sources or assembling corpora.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// A source file could not be opened or read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A timeline file could not be decoded.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The stop-word source produced no words.
    #[error("stop-word source {path} contains no words")]
    EmptyStopWords { path: String },

    /// Negative ids are reserved for injected ground truth.
    #[error("fetched message id {id} is negative; negative ids are reserved for injected messages")]
    NegativeSourceId { id: i64 },

    /// The two corpora inject a different number of ground-truth messages.
    #[error("ground-truth count mismatch: left corpus has {left}, right corpus has {right}")]
    GroundTruthMismatch { left: usize, right: usize },

    /// Normalization config rejected.
    #[error("canonical config error: {0}")]
    Canonical(#[from] CanonicalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_counts() {
        let err = IngestError::GroundTruthMismatch { left: 3, right: 2 };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn canonical_errors_convert() {
        let err: IngestError = CanonicalError::InvalidConfig("bad".into()).into();
        assert!(matches!(err, IngestError::Canonical(_)));
    }
}
