use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use canonical::{CanonicalizeConfig, Message, MessageId, StopWords};
use fastrand::Rng;
use ingest::Corpus;

use super::*;
use crate::metrics::{set_match_metrics, MatchMetrics};

fn corpus(label: &str, messages: &[(MessageId, &str)]) -> Corpus {
    let stopwords = StopWords::from_words(["to", "the", "a", "of"]);
    let cfg = CanonicalizeConfig::default();
    Corpus::from_messages(
        label,
        messages
            .iter()
            .map(|(id, text)| Message::annotate(*id, *text, &stopwords, &cfg))
            .collect(),
    )
}

fn matcher(use_parallel: bool) -> Matcher {
    Matcher::new(MatchConfig {
        use_parallel,
        ..MatchConfig::default()
    })
    .expect("valid config")
}

#[test]
fn invalid_config_rejected() {
    let cfg = MatchConfig {
        word_threshold: 1.5,
        ..MatchConfig::default()
    };
    assert!(matches!(Matcher::new(cfg), Err(MatchError::InvalidConfig(_))));
}

#[test]
fn trailing_punctuation_matches_by_words_and_cosine() {
    let left = corpus("a", &[(1, "Breaking: markets fall sharply today")]);
    let right = corpus("b", &[(2, "Breaking: markets fall sharply today!!")]);
    let m = matcher(false);

    assert!(m.exact(&left, &right).is_empty());

    let words = m.word_overlap(&left, &right);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].score, Some(1.0));

    let cosine = m.cosine(&left, &right);
    assert_eq!(cosine.len(), 1);
    assert_eq!(cosine[0].score, Some(1.0));
}

#[test]
fn positional_overlap_above_threshold() {
    let left = corpus("a", &[(1, "a b c d e")]);
    let right = corpus("b", &[(2, "a b c x y")]);
    let records = matcher(false).word_overlap(&left, &right);
    assert_eq!(records.len(), 1);
    let score = records[0].score.expect("scored");
    assert!((score - 0.6).abs() < 1e-12);
    assert_eq!(records[0].strategy, Strategy::WordOverlap);
}

#[test]
fn word_score_equal_to_threshold_not_reported() {
    let left = corpus("a", &[(1, "a b c d")]);
    let right = corpus("b", &[(2, "a b x y")]);
    assert!(matcher(false).word_overlap(&left, &right).is_empty());
}

#[test]
fn cosine_score_equal_to_threshold_not_reported() {
    let left = corpus("a", &[(1, "apple banana")]);
    let right = corpus("b", &[(2, "apple cherry")]);
    assert!(matcher(false).cosine(&left, &right).is_empty());
}

#[test]
fn exact_matches_are_symmetric() {
    let left = corpus("a", &[(1, "same text"), (2, "other"), (3, "same text")]);
    let right = corpus("b", &[(4, "Same text"), (5, "same text"), (6, "other")]);
    let m = matcher(false);

    let mut forward: Vec<(usize, usize)> = m
        .exact(&left, &right)
        .iter()
        .map(|r| (r.left.index, r.right.index))
        .collect();
    let mut backward: Vec<(usize, usize)> = m
        .exact(&right, &left)
        .iter()
        .map(|r| (r.right.index, r.left.index))
        .collect();
    forward.sort_unstable();
    backward.sort_unstable();
    assert_eq!(forward, vec![(0, 1), (1, 2), (2, 1)]);
    assert_eq!(forward, backward);
}

#[test]
fn records_follow_left_major_order() {
    let left = corpus("a", &[(1, "x"), (2, "x")]);
    let right = corpus("b", &[(3, "x"), (4, "x")]);
    for parallel in [false, true] {
        let order: Vec<(usize, usize)> = matcher(parallel)
            .exact(&left, &right)
            .iter()
            .map(|r| (r.left.index, r.right.index))
            .collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}

#[test]
fn planted_pair_found_through_shared_substring() {
    let left = corpus("a", &[(-3, "Adding some messages to timeline.")]);
    let right = corpus("b", &[(-3, "Adding more messages to timeline.")]);

    // anchor 12 starts at "messages"
    let probe = crate::fingerprint::fingerprint_at(&left.messages()[0], 12).expect("fits");
    assert_eq!(probe.text, "messages");
    assert!(probe.found_in(&right.messages()[0]));

    let summary = matcher(false).run_trials(&left, &right, 50, &mut Rng::with_seed(3));
    assert!(summary.hits >= 1);
    assert_eq!(summary.false_positives, 0);
    assert_eq!(summary.expected_hits, 50);
    assert!(summary.records.iter().all(MatchRecord::ids_match));
}

#[test]
fn identical_planted_pair_hits_every_trial() {
    let text = "Crew returns safely after six months aboard the station";
    let left = corpus("a", &[(7, "unrelated launch update"), (-1, text)]);
    let right = corpus("b", &[(-1, text)]);

    let summary = matcher(false).run_trials(&left, &right, 25, &mut Rng::with_seed(11));
    assert_eq!(summary.trials_run, 25);
    assert_eq!(summary.hits, 25);
    assert_eq!(summary.false_positives, 0);
    assert_eq!(summary.expected_hits, 25);
}

#[test]
fn false_positive_when_ids_differ() {
    let left = corpus("a", &[(5, "identical words in both corpora")]);
    let right = corpus("b", &[(9, "identical words in both corpora")]);
    let outcome = matcher(false).fingerprint(&left, &right, &mut Rng::with_seed(1));
    assert_eq!(outcome.hits, 0);
    assert_eq!(outcome.false_positives, 1);
    let probe = outcome.records[0].fingerprint.as_ref().expect("evidence");
    assert_eq!(probe.trial, 0);
    assert!(!probe.text.is_empty());
}

#[test]
fn short_candidates_never_match() {
    // source len 16 gives a 4-char fingerprint; candidate has exactly 4 chars
    let left = corpus("a", &[(-1, "aaaaaaaaaaaaaaaa")]);
    let right = corpus("b", &[(-1, "aaaa"), (-1, "aaa")]);
    let summary = matcher(false).run_trials(&left, &right, 10, &mut Rng::with_seed(5));
    assert_eq!(summary.hits, 0);
    assert!(summary.records.is_empty());
}

#[test]
fn too_short_source_skipped() {
    let left = corpus("a", &[(-1, "abc"), (-2, "")]);
    let right = corpus("b", &[(-1, "abc"), (-2, "")]);
    let outcome = matcher(false).fingerprint(&left, &right, &mut Rng::with_seed(2));
    assert_eq!(outcome, FingerprintOutcome::default());
}

#[test]
fn seeded_trials_reproducible_and_parallel_safe() {
    let left = corpus(
        "a",
        &[
            (1, "Storm makes landfall near the coast tonight"),
            (-1, "Adding some messages to timeline."),
            (-2, "Rocket launch delayed by weather"),
        ],
    );
    let right = corpus(
        "b",
        &[
            (2, "coast guard on alert as storm nears"),
            (-1, "Adding more messages to timeline."),
            (-2, "Weather delays the rocket launch"),
        ],
    );
    let sequential = matcher(false).run_trials(&left, &right, 10, &mut Rng::with_seed(99));
    let again = matcher(false).run_trials(&left, &right, 10, &mut Rng::with_seed(99));
    let parallel = matcher(true).run_trials(&left, &right, 10, &mut Rng::with_seed(99));
    assert_eq!(sequential, again);
    assert_eq!(sequential, parallel);
}

#[derive(Default)]
struct CountingMetrics {
    calls: AtomicUsize,
}

impl MatchMetrics for CountingMetrics {
    fn record_compare(
        &self,
        strategy: Strategy,
        _latency: Duration,
        pairs: usize,
        _records: usize,
    ) {
        if strategy == Strategy::Exact && pairs == 6 {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn metrics_recorder_observes_runs() {
    let metrics = Arc::new(CountingMetrics::default());
    set_match_metrics(Some(metrics.clone()));

    let left = corpus("a", &[(1, "one"), (2, "two")]);
    let right = corpus("b", &[(3, "one"), (4, "two"), (5, "three")]);
    matcher(false).exact(&left, &right);

    set_match_metrics(None);
    assert!(metrics.calls.load(Ordering::SeqCst) >= 1);
}
