//! Structural-noise removal for short social-media messages.
//!
//! The steps run in a fixed order, each on the previous step's output:
//!
//! 1. drop every `#` (the hashtag word stays)
//! 2. drop `@mentions`, together with any `.` run right before the `@`
//! 3. drop URL-like spans (`scheme://sub.domain.tld/path/segments`)
//!
//!    Steps 2 and 3 repeat until neither removes anything, since a removal
//!    can join its neighbours into a new span (`f00http://x.co/.com`).
//! 4. collapse whitespace runs into one space
//! 5. lowercase
//!
//! Mentions go before URLs so that `@nasa.gov` loses the handle first and
//! the remaining `.gov` is left alone. Lowercasing is last because it never
//! turns a character that the patterns reject into one they accept.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::CanonicalizeConfig;
use crate::whitespace::collapse_whitespace;

static RE_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.*@[\p{Alphabetic}\p{N}]+").expect("mention pattern compiles")
});

static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:\p{Alphabetic}+://)?",
        r"(?:[\p{Alphabetic}\p{N}]+\.)*",
        r"[\p{Alphabetic}\p{N}]+\.\p{Alphabetic}{2,}",
        r"(?:/[\p{Alphabetic}\p{N}]*)*",
    ))
    .expect("url pattern compiles")
});

/// Normalizes `raw` with the default configuration.
///
/// Accepts any string, including the empty string, and never fails.
///
/// ```rust
/// use canonical::normalize;
///
/// let text = normalize("Watch #Artemis launch live .@NASA https://t.co/x1Y2z3");
/// assert_eq!(text, "watch artemis launch live ");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &CanonicalizeConfig::default())
}

/// Normalizes `raw`, skipping the steps disabled in `cfg`.
pub fn normalize_with(raw: &str, cfg: &CanonicalizeConfig) -> String {
    let mut text: Cow<'_, str> = Cow::Borrowed(raw);

    if cfg.strip_hashtags && text.contains('#') {
        text = Cow::Owned(text.replace('#', ""));
    }
    // Every pattern match is non-empty, so an unchanged length means a
    // pass removed nothing.
    loop {
        let before = text.len();
        if cfg.strip_mentions {
            text = strip(text, &RE_MENTION);
        }
        if cfg.strip_urls {
            text = strip(text, &RE_URL);
        }
        if text.len() == before {
            break;
        }
    }

    let collapsed = collapse_whitespace(&text);
    if cfg.lowercase {
        collapsed.to_lowercase()
    } else {
        collapsed
    }
}

fn strip<'a>(text: Cow<'a, str>, re: &Regex) -> Cow<'a, str> {
    let stripped = match re.replace_all(&text, "") {
        Cow::Borrowed(_) => None,
        Cow::Owned(stripped) => Some(stripped),
    };
    stripped.map_or(text, Cow::Owned)
}
