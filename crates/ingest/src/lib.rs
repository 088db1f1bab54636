//! dupescan ingest layer.
//!
//! This is where messages enter the pipeline. Fetched messages and injected
//! ground-truth messages are merged into a [`Corpus`], annotated once, and
//! paired into a [`CorpusPair`] for comparison.
//!
//! ## What we do here
//!
//! - **Load inputs**: stop-word lists, injected-message files and saved
//!   timelines ([`load_stopwords`], [`load_inserts`], [`load_timeline`])
//! - **Assign ground-truth ids**: injected messages get `-1, -2, ...`, so
//!   paired injections share an id across corpora
//! - **Check the setup**: unequal injection counts, negative fetched ids and
//!   empty stop-word lists are rejected before any comparison runs
//! - **Log**: structured `tracing` events for every load and build
//!
//! ## Example
//!
//! ```
//! use canonical::{CanonicalizeConfig, StopWords};
//! use ingest::{CorpusBuilder, CorpusPair, RawMessage};
//!
//! let stopwords = StopWords::from_words(["to"]);
//! let cfg = CanonicalizeConfig::default();
//!
//! let left = CorpusBuilder::new("cnnbrk")
//!     .fetched([RawMessage::new(100, "Storm makes landfall")])
//!     .inject(["Adding some messages to timeline."])
//!     .build(&stopwords, &cfg)
//!     .unwrap();
//! let right = CorpusBuilder::new("nasa")
//!     .inject(["Adding more messages to timeline."])
//!     .build(&stopwords, &cfg)
//!     .unwrap();
//!
//! let pair = CorpusPair::new(left, right).unwrap();
//! assert_eq!(pair.expected_pairs(), 1);
//! ```

mod corpus;
mod error;
mod loader;
mod types;

pub use crate::corpus::{Corpus, CorpusBuilder, CorpusPair};
pub use crate::error::IngestError;
pub use crate::loader::{load_inserts, load_stopwords, load_timeline};
pub use crate::types::RawMessage;
