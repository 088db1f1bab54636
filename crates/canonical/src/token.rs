use crate::stopwords::StopWords;

/// Returns true for characters that end a word.
///
/// Letters and the apostrophe (so `don't` stays one word) are word
/// characters; digits, punctuation and whitespace are all delimiters.
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    !ch.is_alphabetic() && ch != '\''
}

/// Splits normalized text into word tokens, in order.
///
/// Consecutive, leading and trailing delimiters never produce empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_delimiter(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(text[token_start..idx].to_string());
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(text[token_start..].to_string());
    }

    tokens
}

/// Keeps the tokens that are not stop words.
///
/// The lookup is case-insensitive but kept tokens retain their case, so
/// content tokens always appear verbatim in the token list. Order and
/// duplicates are preserved.
pub fn filter_stopwords<S: AsRef<str>>(tokens: &[S], stopwords: &StopWords) -> Vec<String> {
    tokens
        .iter()
        .map(|t| AsRef::<str>::as_ref(t))
        .filter(|t| !stopwords.contains(&t.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_digits() {
        assert_eq!(
            tokenize("breaking: markets fall 3% today!!"),
            vec!["breaking", "markets", "fall", "today"]
        );
    }

    #[test]
    fn apostrophe_is_part_of_a_word() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn no_empty_tokens_at_edges() {
        assert_eq!(tokenize("  ...hello,, world--  "), vec!["hello", "world"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 !!! 456").is_empty());
    }

    #[test]
    fn non_ascii_letters_are_word_characters() {
        assert_eq!(tokenize("café über"), vec!["café", "über"]);
    }

    #[test]
    fn stopwords_removed_order_and_duplicates_kept() {
        let stopwords = StopWords::from_words(["the", "a", "to"]);
        let tokens = tokenize("the cat ran to the cat a lot");
        assert_eq!(
            filter_stopwords(&tokens, &stopwords),
            vec!["cat", "ran", "cat", "lot"]
        );
    }

    #[test]
    fn filter_lookup_ignores_case_and_keeps_token_case() {
        let stopwords = StopWords::from_words(["the"]);
        assert_eq!(filter_stopwords(&["The", "Moon"], &stopwords), vec!["Moon"]);
    }
}
