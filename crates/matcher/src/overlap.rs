//! Index-aligned word overlap.
//!
//! Tokens are compared position by position only. Inserting or deleting a
//! single leading word shifts every later position and collapses the score;
//! no sliding or edit-distance alignment is attempted.

/// Fraction of aligned positions where both token sequences agree.
///
/// The denominator is the longer sequence's length. Two empty sequences
/// score `0.0`.
pub fn word_overlap_score<S: AsRef<str>>(left: &[S], right: &[S]) -> f64 {
    let word_count = left.len().max(right.len());
    if word_count == 0 {
        return 0.0;
    }
    let duplicates = left
        .iter()
        .zip(right)
        .filter(|(a, b)| a.as_ref() == b.as_ref())
        .count();
    duplicates as f64 / word_count as f64
}
