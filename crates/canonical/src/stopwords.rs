use fxhash::FxHashSet;

/// Immutable set of lowercase stop words.
///
/// Built once per run and shared read-only by every message annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// Builds a set from any word iterator. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Membership test. `word` must already be lowercase.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
