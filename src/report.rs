//! Result types for a detection run.

use matcher::{MatchRecord, Strategy, TrialSummary};
use serde::Serialize;

/// Fingerprint trial counters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrialStats {
    pub trials_run: usize,
    pub hits: usize,
    pub false_positives: usize,
}

/// Outcome of one strategy.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrategyReport {
    pub strategy: Strategy,
    /// Planted pairs this strategy should find; multiplied by the trial
    /// count for fingerprinting.
    pub expected: usize,
    /// Present for fingerprinting only.
    pub trials: Option<TrialStats>,
    pub records: Vec<MatchRecord>,
}

impl StrategyReport {
    pub(crate) fn pairwise(strategy: Strategy, expected: usize, records: Vec<MatchRecord>) -> Self {
        Self {
            strategy,
            expected,
            trials: None,
            records,
        }
    }

    pub(crate) fn fingerprint(summary: TrialSummary) -> Self {
        Self {
            strategy: Strategy::Fingerprint,
            expected: summary.expected_hits,
            trials: Some(TrialStats {
                trials_run: summary.trials_run,
                hits: summary.hits,
                false_positives: summary.false_positives,
            }),
            records: summary.records,
        }
    }

    /// One-line human summary.
    pub fn summary_line(&self) -> String {
        match &self.trials {
            Some(t) => format!(
                "{}: {} hits, {} false positives over {} trials (expected {})",
                self.strategy, t.hits, t.false_positives, t.trials_run, self.expected
            ),
            None => format!(
                "{}: {} matches (expected {})",
                self.strategy,
                self.records.len(),
                self.expected
            ),
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetectionReport {
    pub left: String,
    pub right: String,
    pub left_messages: usize,
    pub right_messages: usize,
    /// Planted duplicate pairs.
    pub expected_pairs: usize,
    /// Seed the fingerprint anchors were drawn from.
    pub seed: u64,
    pub strategies: Vec<StrategyReport>,
}

impl DetectionReport {
    pub fn strategy(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.strategies.iter().find(|r| r.strategy == strategy)
    }
}
