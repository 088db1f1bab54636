//! Whitespace collapsing.
//!
//! Every run of Unicode whitespace (spaces, tabs, newlines, carriage returns,
//! non-breaking spaces, ...) becomes exactly one ASCII space. Unlike a
//! trim-and-join, leading and trailing runs are kept as a single space, so
//! the character offsets of the surrounding text shift as little as possible
//! for fingerprint extraction.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("hello \t\n world"), "hello world");
//! assert_eq!(collapse_whitespace("  padded  "), " padded ");
//! assert_eq!(collapse_whitespace(""), "");
//! ```

/// Collapses every run of whitespace into a single ASCII space.
///
/// Runs in O(n) and allocates at most the input length.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed
}
