use std::fmt;
use std::str::FromStr;

use canonical::{Message, MessageId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four comparison heuristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Literal raw-text equality.
    Exact,
    /// Index-aligned token agreement.
    WordOverlap,
    /// Random 25% substring probe over normalized text.
    Fingerprint,
    /// Cosine similarity of per-pair term-frequency vectors.
    Cosine,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Exact,
        Strategy::WordOverlap,
        Strategy::Fingerprint,
        Strategy::Cosine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::WordOverlap => "word_overlap",
            Strategy::Fingerprint => "fingerprint",
            Strategy::Cosine => "cosine",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exact" | "message" => Ok(Strategy::Exact),
            "word_overlap" | "word" => Ok(Strategy::WordOverlap),
            "fingerprint" => Ok(Strategy::Fingerprint),
            "cosine" | "angular" => Ok(Strategy::Cosine),
            _ => Err(MatchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Position and identity of a message inside its corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRef {
    /// Index in the corpus.
    pub index: usize,
    pub id: MessageId,
}

impl MessageRef {
    pub fn new(index: usize, msg: &Message) -> Self {
        Self {
            index,
            id: msg.id(),
        }
    }
}

/// The substring that produced a fingerprint match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintProbe {
    /// The probed substring of the left message's normalized text.
    pub text: String,
    /// Character offset of the probe in the left message.
    pub anchor: usize,
    /// Trial that drew the probe, starting at 0.
    pub trial: usize,
}

/// A pair that passed a comparator's test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub strategy: Strategy,
    pub left: MessageRef,
    pub right: MessageRef,
    /// Similarity score, for the strategies that compute one.
    pub score: Option<f64>,
    /// Probe evidence, for fingerprint matches.
    pub fingerprint: Option<FingerprintProbe>,
}

impl MatchRecord {
    /// True when both sides carry the same id, i.e. a planted duplicate
    /// (or the same fetched message present in both corpora).
    pub fn ids_match(&self) -> bool {
        self.left.id == self.right.id
    }
}

/// Result of one fingerprint pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FingerprintOutcome {
    pub hits: usize,
    pub false_positives: usize,
    pub records: Vec<MatchRecord>,
}

/// Totals over repeated fingerprint passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialSummary {
    pub trials_run: usize,
    pub hits: usize,
    pub false_positives: usize,
    /// `trials_run` times the number of planted duplicate pairs.
    pub expected_hits: usize,
    pub records: Vec<MatchRecord>,
}

/// Thresholds and execution knobs for the comparators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Word-overlap score must be strictly greater than this.
    pub word_threshold: f64,
    /// Cosine score must be strictly greater than this.
    pub cosine_threshold: f64,
    /// Fingerprint passes per run.
    pub fingerprint_trials: usize,
    /// Spread the outer loop over the rayon pool. Output order is unchanged.
    pub use_parallel: bool,
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [
            ("word_threshold", self.word_threshold),
            ("cosine_threshold", self.cosine_threshold),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }
        if self.fingerprint_trials == 0 {
            return Err(MatchError::InvalidConfig(
                "fingerprint_trials must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            word_threshold: 0.5,
            cosine_threshold: 0.5,
            fingerprint_trials: 10,
            use_parallel: false,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("unknown strategy `{0}` (expected exact, word_overlap, fingerprint or cosine)")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.fingerprint_trials, 10);
    }

    #[test]
    fn threshold_of_one_rejected() {
        let cfg = MatchConfig {
            cosine_threshold: 1.0,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("cosine_threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_and_nan_thresholds_rejected() {
        for bad in [-0.1, f64::NAN] {
            let cfg = MatchConfig {
                word_threshold: bad,
                ..MatchConfig::default()
            };
            assert!(cfg.validate().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn zero_trials_rejected() {
        let cfg = MatchConfig {
            fingerprint_trials: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("Word-Overlap".parse::<Strategy>(), Ok(Strategy::WordOverlap));
        assert_eq!("angular".parse::<Strategy>(), Ok(Strategy::Cosine));
        assert!("levenshtein".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_serializes_snake_case() {
        let json = serde_json::to_string(&Strategy::WordOverlap).expect("serialize");
        assert_eq!(json, "\"word_overlap\"");
    }
}
