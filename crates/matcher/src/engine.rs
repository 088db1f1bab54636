use std::time::Instant;

use canonical::Message;
use fastrand::Rng;
use ingest::Corpus;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cosine::cosine_score;
use crate::fingerprint::{draw_fingerprint, Fingerprint};
use crate::metrics::metrics_recorder;
use crate::overlap::word_overlap_score;
use crate::types::{
    FingerprintOutcome, FingerprintProbe, MatchConfig, MatchError, MatchRecord, MessageRef,
    Strategy, TrialSummary,
};

#[cfg(test)]
mod tests;

/// Runs the comparators over a pair of corpora.
///
/// Every comparator visits all `|A| x |B|` pairs in left-major order and
/// returns records in that order, whether or not the outer loop runs on the
/// rayon pool.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Pairs whose raw texts are byte-for-byte equal.
    pub fn exact(&self, left: &Corpus, right: &Corpus) -> Vec<MatchRecord> {
        let start = Instant::now();
        let records = self.pairwise(left, right, |i, m1, j, m2| {
            (m1.raw_text() == m2.raw_text()).then(|| record(Strategy::Exact, i, m1, j, m2, None))
        });
        finish(Strategy::Exact, left, right, start, records)
    }

    /// Pairs whose index-aligned token overlap exceeds `word_threshold`.
    pub fn word_overlap(&self, left: &Corpus, right: &Corpus) -> Vec<MatchRecord> {
        let start = Instant::now();
        let threshold = self.cfg.word_threshold;
        let records = self.pairwise(left, right, |i, m1, j, m2| {
            let score = word_overlap_score(m1.tokens(), m2.tokens());
            (score > threshold).then(|| record(Strategy::WordOverlap, i, m1, j, m2, Some(score)))
        });
        finish(Strategy::WordOverlap, left, right, start, records)
    }

    /// Pairs whose local-vocabulary cosine similarity exceeds `cosine_threshold`.
    pub fn cosine(&self, left: &Corpus, right: &Corpus) -> Vec<MatchRecord> {
        let start = Instant::now();
        let threshold = self.cfg.cosine_threshold;
        let records = self.pairwise(left, right, |i, m1, j, m2| {
            let score = cosine_score(m1, m2);
            (score > threshold).then(|| record(Strategy::Cosine, i, m1, j, m2, Some(score)))
        });
        finish(Strategy::Cosine, left, right, start, records)
    }

    /// One fingerprint pass: draw a fingerprint per left message and probe
    /// every right message with it.
    ///
    /// Anchors are drawn in corpus order before any probing, so the outcome
    /// depends only on `rng`'s state.
    pub fn fingerprint(&self, left: &Corpus, right: &Corpus, rng: &mut Rng) -> FingerprintOutcome {
        self.fingerprint_pass(left, right, rng, 0)
    }

    /// Repeats the fingerprint pass `trials` times and sums the outcomes.
    ///
    /// Each trial gets its own generator seeded from `rng` up front, so the
    /// totals are identical whether trials run sequentially or in parallel.
    pub fn run_trials(
        &self,
        left: &Corpus,
        right: &Corpus,
        trials: usize,
        rng: &mut Rng,
    ) -> TrialSummary {
        let start = Instant::now();
        let seeds: Vec<u64> = (0..trials).map(|_| rng.u64(..)).collect();
        let run = |(trial, seed): (usize, &u64)| {
            self.fingerprint_pass(left, right, &mut Rng::with_seed(*seed), trial)
        };
        let outcomes: Vec<FingerprintOutcome> = if self.cfg.use_parallel {
            seeds.par_iter().enumerate().map(run).collect()
        } else {
            seeds.iter().enumerate().map(run).collect()
        };

        let mut summary = TrialSummary {
            trials_run: trials,
            expected_hits: trials * left.injected_count(),
            ..TrialSummary::default()
        };
        for outcome in outcomes {
            summary.hits += outcome.hits;
            summary.false_positives += outcome.false_positives;
            summary.records.extend(outcome.records);
        }

        info!(
            left = %left.label(),
            right = %right.label(),
            trials,
            hits = summary.hits,
            false_positives = summary.false_positives,
            expected_hits = summary.expected_hits,
            elapsed_micros = start.elapsed().as_micros(),
            "fingerprint_trials_finished"
        );
        summary
    }

    fn fingerprint_pass(
        &self,
        left: &Corpus,
        right: &Corpus,
        rng: &mut Rng,
        trial: usize,
    ) -> FingerprintOutcome {
        let start = Instant::now();
        let probes: Vec<Option<Fingerprint>> =
            left.iter().map(|m| draw_fingerprint(m, rng)).collect();

        let records = self.pairwise(left, right, |i, m1, j, m2| {
            let fp = probes[i].as_ref()?;
            fp.found_in(m2).then(|| MatchRecord {
                fingerprint: Some(FingerprintProbe {
                    text: fp.text.clone(),
                    anchor: fp.anchor,
                    trial,
                }),
                ..record(Strategy::Fingerprint, i, m1, j, m2, None)
            })
        });
        let records = finish(Strategy::Fingerprint, left, right, start, records);

        let hits = records.iter().filter(|r| r.ids_match()).count();
        FingerprintOutcome {
            hits,
            false_positives: records.len() - hits,
            records,
        }
    }

    fn pairwise<F>(&self, left: &Corpus, right: &Corpus, test: F) -> Vec<MatchRecord>
    where
        F: Fn(usize, &Message, usize, &Message) -> Option<MatchRecord> + Sync,
    {
        let test = &test;
        if self.cfg.use_parallel {
            left.messages()
                .par_iter()
                .enumerate()
                .flat_map_iter(|(i, m1)| row(right, test, i, m1))
                .collect()
        } else {
            left.iter()
                .enumerate()
                .flat_map(|(i, m1)| row(right, test, i, m1))
                .collect()
        }
    }
}

fn row<'a, F>(
    right: &'a Corpus,
    test: &'a F,
    i: usize,
    m1: &'a Message,
) -> impl Iterator<Item = MatchRecord> + 'a
where
    F: Fn(usize, &Message, usize, &Message) -> Option<MatchRecord>,
{
    right
        .iter()
        .enumerate()
        .filter_map(move |(j, m2)| test(i, m1, j, m2))
}

fn record(
    strategy: Strategy,
    i: usize,
    m1: &Message,
    j: usize,
    m2: &Message,
    score: Option<f64>,
) -> MatchRecord {
    MatchRecord {
        strategy,
        left: MessageRef::new(i, m1),
        right: MessageRef::new(j, m2),
        score,
        fingerprint: None,
    }
}

fn finish(
    strategy: Strategy,
    left: &Corpus,
    right: &Corpus,
    start: Instant,
    records: Vec<MatchRecord>,
) -> Vec<MatchRecord> {
    let elapsed = start.elapsed();
    let pairs = left.len() * right.len();

    for r in &records {
        debug!(
            strategy = %strategy,
            left_id = r.left.id,
            right_id = r.right.id,
            score = r.score,
            fingerprint = r.fingerprint.as_ref().map(|p| p.text.as_str()),
            "match"
        );
    }
    info!(
        strategy = %strategy,
        left = %left.label(),
        right = %right.label(),
        pairs,
        records = records.len(),
        elapsed_micros = elapsed.as_micros(),
        "compare_finished"
    );

    if let Some(metrics) = metrics_recorder() {
        metrics.record_compare(strategy, elapsed, pairs, records.len());
    }
    records
}
