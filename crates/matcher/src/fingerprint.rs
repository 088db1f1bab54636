//! Random-anchor substring fingerprints.
//!
//! A fingerprint is a contiguous quarter of a message's normalized text,
//! starting at an anchor drawn uniformly from the positions where a full
//! quarter fits. Lengths and offsets are counted in characters, so slices
//! never split a multi-byte character.

use canonical::Message;
use fastrand::Rng;

/// A drawn fingerprint and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub text: String,
    /// Character offset into the source's normalized text.
    pub anchor: usize,
    /// Length of `text` in characters.
    pub size: usize,
}

impl Fingerprint {
    /// Whether `candidate` is long enough to be probed and contains the
    /// fingerprint. Candidates no longer than the fingerprint never match.
    pub fn found_in(&self, candidate: &Message) -> bool {
        candidate.normalized_len() > self.size
            && candidate.normalized_text().contains(self.text.as_str())
    }
}

/// Fingerprint size for a text of `len` characters.
pub fn fingerprint_size(len: usize) -> usize {
    len / 4
}

/// Extracts the fingerprint starting at character `anchor`.
///
/// Returns `None` when the message is too short to yield a non-empty
/// fingerprint or when the anchor is out of range.
pub fn fingerprint_at(msg: &Message, anchor: usize) -> Option<Fingerprint> {
    let len = msg.normalized_len();
    let size = fingerprint_size(len);
    if size == 0 || anchor >= len - size {
        return None;
    }
    let text: String = msg
        .normalized_text()
        .chars()
        .skip(anchor)
        .take(size)
        .collect();
    Some(Fingerprint { text, anchor, size })
}

/// Draws a fingerprint with an anchor uniform over `[0, len - size)`.
///
/// Messages shorter than four characters are skipped and consume no
/// randomness.
pub fn draw_fingerprint(msg: &Message, rng: &mut Rng) -> Option<Fingerprint> {
    let len = msg.normalized_len();
    let size = fingerprint_size(len);
    if size == 0 {
        return None;
    }
    let anchor = rng.usize(0..len - size);
    fingerprint_at(msg, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonical::{CanonicalizeConfig, StopWords};

    fn annotate(id: i64, text: &str) -> Message {
        Message::annotate(id, text, &StopWords::default(), &CanonicalizeConfig::default())
    }

    #[test]
    fn quarter_of_text_extracted() {
        let msg = annotate(1, "abcdefghijklmnop");
        let fp = fingerprint_at(&msg, 3).expect("fits");
        assert_eq!(fp.text, "defg");
        assert_eq!(fp.size, 4);
    }

    #[test]
    fn last_valid_anchor() {
        let msg = annotate(1, "abcdefgh");
        // len 8, size 2: anchors 0..6
        assert_eq!(fingerprint_at(&msg, 5).map(|f| f.text), Some("fg".to_string()));
        assert_eq!(fingerprint_at(&msg, 6), None);
    }

    #[test]
    fn short_messages_skipped() {
        let mut rng = Rng::with_seed(7);
        for text in ["", "a", "abc"] {
            assert_eq!(draw_fingerprint(&annotate(1, text), &mut rng), None, "{text:?}");
        }
        assert!(draw_fingerprint(&annotate(1, "abcd"), &mut rng).is_some());
    }

    #[test]
    fn multibyte_text_sliced_by_char() {
        let msg = annotate(1, "ééééxxxx");
        let fp = fingerprint_at(&msg, 3).expect("fits");
        assert_eq!(fp.text, "éx");
        assert!(fp.found_in(&msg));
    }

    #[test]
    fn candidate_not_longer_than_fingerprint_never_matches() {
        let source = annotate(1, "aaaaaaaaaaaaaaaa");
        let fp = fingerprint_at(&source, 0).expect("fits");
        assert_eq!(fp.text, "aaaa");
        assert!(!fp.found_in(&annotate(2, "aaaa")));
        assert!(fp.found_in(&annotate(2, "aaaaa")));
    }

    #[test]
    fn drawn_fingerprint_always_inside_source() {
        let msg = annotate(-3, "Adding some messages to timeline.");
        let mut rng = Rng::with_seed(42);
        for _ in 0..200 {
            let fp = draw_fingerprint(&msg, &mut rng).expect("long enough");
            assert_eq!(fp.size, msg.normalized_len() / 4);
            assert!(fp.anchor + fp.size < msg.normalized_len());
            assert!(msg.normalized_text().contains(&fp.text));
        }
    }
}
