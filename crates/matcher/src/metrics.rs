// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every comparator run on a `Matcher` reports its latency and volume.
use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

use crate::types::Strategy;

/// Metrics observer for comparator runs.
pub trait MatchMetrics: Send + Sync {
    /// Record one comparator run.
    ///
    /// `pairs` is the number of message pairs examined and `records` the
    /// number of match records emitted. Fingerprint trials report once per
    /// trial.
    fn record_compare(&self, strategy: Strategy, latency: Duration, pairs: usize, records: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
