//! Workspace umbrella crate for dupescan.
//!
//! Wires the stages together: [`load_corpora`] reads the stop words and both
//! corpora named in a [`DetectConfig`], and [`run_detection`] runs every
//! selected strategy over them and collects a [`DetectionReport`].
//!
//! ```no_run
//! use dupescan::{detect, DetectConfig};
//!
//! let cfg = DetectConfig::load("dupescan.yaml")?;
//! let report = detect(&cfg)?;
//! for strategy in &report.strategies {
//!     println!("{}", strategy.summary_line());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod report;

pub use canonical::{
    collapse_whitespace, filter_stopwords, normalize, normalize_with, tokenize,
    CanonicalError, CanonicalizeConfig, Message, MessageId, StopWords,
};
pub use ingest::{
    load_inserts, load_stopwords, load_timeline, Corpus, CorpusBuilder, CorpusPair,
    IngestError, RawMessage,
};
pub use matcher::{
    set_match_metrics, FingerprintOutcome, MatchConfig, MatchError, MatchMetrics, MatchRecord,
    Matcher, MessageRef, Strategy, TrialSummary,
};

pub use crate::config::{ConfigLoadError, ConfigOverrides, CorpusSource, DetectConfig};
pub use crate::report::{DetectionReport, StrategyReport, TrialStats};

use fastrand::Rng;
use thiserror::Error;
use tracing::info;

/// Errors that abort a run before or during setup.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("ingest failure: {0}")]
    Ingest(#[from] IngestError),
    #[error("matcher failure: {0}")]
    Match(#[from] MatchError),
}

/// Loads stop words and both corpora, then checks the ground truth pairs up.
pub fn load_corpora(cfg: &DetectConfig) -> Result<CorpusPair, DetectError> {
    let stopwords = load_stopwords(&cfg.stopwords)?;
    let left = load_corpus(&cfg.left, "left", &stopwords, &cfg.canonical)?;
    let right = load_corpus(&cfg.right, "right", &stopwords, &cfg.canonical)?;
    Ok(CorpusPair::new(left, right)?)
}

fn load_corpus(
    source: &CorpusSource,
    fallback: &str,
    stopwords: &StopWords,
    canonical: &CanonicalizeConfig,
) -> Result<Corpus, IngestError> {
    let fetched = match &source.timeline {
        Some(path) => load_timeline(path)?,
        None => Vec::new(),
    };
    let injected = match &source.inserts {
        Some(path) => load_inserts(path)?,
        None => Vec::new(),
    };
    CorpusBuilder::new(source.label(fallback))
        .fetched(fetched)
        .inject(injected)
        .build(stopwords, canonical)
}

/// Runs each selected strategy in order over `pair`.
///
/// `seed` drives every fingerprint anchor, so the same seed over the same
/// corpora reproduces the same report.
pub fn run_detection(
    cfg: &DetectConfig,
    pair: &CorpusPair,
    seed: u64,
) -> Result<DetectionReport, DetectError> {
    if cfg.strategies.is_empty() {
        return Err(ConfigLoadError::NoStrategies.into());
    }
    let matcher = Matcher::new(cfg.matcher.clone())?;
    let mut rng = Rng::with_seed(seed);
    let (left, right) = (pair.left(), pair.right());
    let expected = pair.expected_pairs();

    let strategies = cfg
        .strategies
        .iter()
        .map(|&strategy| match strategy {
            Strategy::Exact => {
                StrategyReport::pairwise(strategy, expected, matcher.exact(left, right))
            }
            Strategy::WordOverlap => {
                StrategyReport::pairwise(strategy, expected, matcher.word_overlap(left, right))
            }
            Strategy::Cosine => {
                StrategyReport::pairwise(strategy, expected, matcher.cosine(left, right))
            }
            Strategy::Fingerprint => StrategyReport::fingerprint(matcher.run_trials(
                left,
                right,
                cfg.matcher.fingerprint_trials,
                &mut rng,
            )),
        })
        .collect();

    Ok(DetectionReport {
        left: left.label().to_string(),
        right: right.label().to_string(),
        left_messages: left.len(),
        right_messages: right.len(),
        expected_pairs: expected,
        seed,
        strategies,
    })
}

/// Loads the corpora and runs detection with the configured seed, drawing
/// and logging a fresh one when none is set.
pub fn detect(cfg: &DetectConfig) -> Result<DetectionReport, DetectError> {
    let pair = load_corpora(cfg)?;
    let seed = cfg.seed.unwrap_or_else(|| {
        let seed = fastrand::u64(..);
        info!(seed, "seed_drawn");
        seed
    });
    run_detection(cfg, &pair, seed)
}
