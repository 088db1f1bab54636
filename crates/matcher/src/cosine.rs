//! Per-pair bag-of-words cosine similarity.
//!
//! The vocabulary is local to the pair: the first-occurrence-ordered union of
//! both messages' content tokens. Frequencies, however, are counted over the
//! full token lists, so a stop word that is also a content token elsewhere
//! still counts on both sides.

use canonical::Message;
use fxhash::FxHashMap;

/// Term-frequency vectors over a pair's joint vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairVectors {
    pub vocabulary: Vec<String>,
    pub left: Vec<u64>,
    pub right: Vec<u64>,
}

impl PairVectors {
    pub fn build<S: AsRef<str>>(
        left_content: &[S],
        right_content: &[S],
        left_tokens: &[S],
        right_tokens: &[S],
    ) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut vocabulary = Vec::new();
        for token in left_content.iter().chain(right_content) {
            let token = token.as_ref();
            if !index.contains_key(token) {
                index.insert(token, vocabulary.len());
                vocabulary.push(token.to_string());
            }
        }

        let count = |tokens: &[S]| {
            let mut counts = vec![0u64; vocabulary.len()];
            for token in tokens {
                if let Some(&i) = index.get(token.as_ref()) {
                    counts[i] += 1;
                }
            }
            counts
        };
        let left = count(left_tokens);
        let right = count(right_tokens);

        Self {
            vocabulary,
            left,
            right,
        }
    }

    pub fn for_messages(m1: &Message, m2: &Message) -> Self {
        Self::build(
            m1.content_tokens(),
            m2.content_tokens(),
            m1.tokens(),
            m2.tokens(),
        )
    }

    /// `dot / sqrt(normA * normB)`, or `0.0` when either side has no
    /// counted terms.
    pub fn score(&self) -> f64 {
        let (mut dot, mut norm_a, mut norm_b) = (0u64, 0u64, 0u64);
        for (&a, &b) in self.left.iter().zip(&self.right) {
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }
        dot as f64 / (norm_a as f64 * norm_b as f64).sqrt()
    }
}

/// Cosine similarity of two annotated messages.
pub fn cosine_score(m1: &Message, m2: &Message) -> f64 {
    PairVectors::for_messages(m1, m2).score()
}
