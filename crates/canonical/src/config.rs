//! Configuration for the message normalization pipeline.
//!
//! [`CanonicalizeConfig`] toggles the individual noise filters applied by
//! [`normalize_with`](crate::normalize_with). The filters always run in the
//! same order; a disabled filter is simply skipped.
//!
//! # Versioning
//!
//! Any change to normalization output (even a regex fix) must come with a
//! version bump so that annotated corpora produced by different builds can be
//! told apart.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.strip_hashtags);
//! assert!(config.strip_mentions);
//! assert!(config.strip_urls);
//! assert!(config.lowercase);
//! ```
//!
//! Keeping URLs in the normalized text:
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig {
//!     strip_urls: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalization pipeline.
///
/// Serializes to and from YAML/JSON so it can live in the run configuration:
///
/// ```json
/// {
///   "version": 1,
///   "strip_hashtags": true,
///   "strip_mentions": true,
///   "strip_urls": true,
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the normalization behavior. Must be >= 1.
    pub version: u32,

    /// Remove every `#` marker. The hashtag word itself is kept.
    pub strip_hashtags: bool,

    /// Remove `@user` mentions, including any run of `.` directly before the
    /// `@` (the `.@user` reply idiom).
    pub strip_mentions: bool,

    /// Remove URL-like spans such as `t.co/abc123` or `https://nasa.gov`.
    ///
    /// This is a best-effort heuristic aimed at the shortened links found in
    /// short social-media posts, not a URL grammar.
    pub strip_urls: bool,

    /// Lowercase the whole string as the final step.
    pub lowercase: bool,
}

impl CanonicalizeConfig {
    /// Reject configurations that cannot be applied.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_hashtags: true,
            strip_mentions: true,
            strip_urls: true,
            lowercase: true,
        }
    }
}
