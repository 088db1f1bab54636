//! # dupescan matcher (`matcher`)
//!
//! Pairwise near-duplicate detection between two corpora of annotated
//! messages. Every comparator is a pure function of the two corpora (plus a
//! caller-supplied random source for fingerprinting) and emits
//! [`MatchRecord`] values for the pairs that pass its test.
//!
//! ## Strategies
//!
//! - [`Strategy::Exact`]: raw texts are equal. Any rewording defeats it.
//! - [`Strategy::WordOverlap`]: share of index-aligned tokens that agree,
//!   over the longer token list; reported when strictly above the threshold.
//! - [`Strategy::Fingerprint`]: a random quarter of the left message's
//!   normalized text is searched for in each right message. Matches between
//!   equal ids are hits, everything else is a false positive.
//!   [`Matcher::run_trials`] repeats the pass to estimate recall.
//! - [`Strategy::Cosine`]: cosine similarity of term-frequency vectors over
//!   the pair's own vocabulary; reported when strictly above the threshold.
//!
//! ## Example
//!
//! ```
//! use canonical::{CanonicalizeConfig, StopWords};
//! use fastrand::Rng;
//! use ingest::CorpusBuilder;
//! use matcher::{MatchConfig, Matcher};
//!
//! let stopwords = StopWords::from_words(["to"]);
//! let cfg = CanonicalizeConfig::default();
//! let left = CorpusBuilder::new("left")
//!     .inject(["Adding some messages to timeline."])
//!     .build(&stopwords, &cfg)
//!     .unwrap();
//! let right = CorpusBuilder::new("right")
//!     .inject(["Adding more messages to timeline."])
//!     .build(&stopwords, &cfg)
//!     .unwrap();
//!
//! let matcher = Matcher::new(MatchConfig::default()).unwrap();
//! assert_eq!(matcher.word_overlap(&left, &right).len(), 1);
//!
//! let summary = matcher.run_trials(&left, &right, 10, &mut Rng::with_seed(7));
//! assert_eq!(summary.expected_hits, 10);
//! assert_eq!(summary.false_positives, 0);
//! ```

mod cosine;
mod engine;
mod fingerprint;
mod metrics;
mod overlap;
mod types;

pub use crate::cosine::{cosine_score, PairVectors};
pub use crate::engine::Matcher;
pub use crate::fingerprint::{draw_fingerprint, fingerprint_at, fingerprint_size, Fingerprint};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::overlap::word_overlap_score;
pub use crate::types::{
    FingerprintOutcome, FingerprintProbe, MatchConfig, MatchError, MatchRecord, MessageRef,
    Strategy, TrialSummary,
};
