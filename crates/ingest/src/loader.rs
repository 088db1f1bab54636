//! Flat-file and JSON loaders for corpus inputs.
//!
//! - stop words: one word per line
//! - injected messages: one message per line; line `k` becomes id `-k`
//! - timeline: a JSON array of [`RawMessage`] objects

use std::fs;
use std::path::Path;

use canonical::StopWords;
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::types::RawMessage;

fn read(path: &Path) -> Result<String, IngestError> {
    fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Loads a stop-word list. Blank lines are ignored; an empty result is a
/// configuration error.
pub fn load_stopwords(path: impl AsRef<Path>) -> Result<StopWords, IngestError> {
    let path = path.as_ref();
    let content = read(path)?;
    let stopwords = StopWords::from_words(content.lines());
    if stopwords.is_empty() {
        warn!(path = %path.display(), "stopwords_empty");
        return Err(IngestError::EmptyStopWords {
            path: path.display().to_string(),
        });
    }
    debug!(path = %path.display(), words = stopwords.len(), "stopwords_loaded");
    Ok(stopwords)
}

/// Loads injected ground-truth messages, one per line.
///
/// Every line counts, blank ones included, so that line numbers (and with
/// them the negative ids) stay aligned between the two insert files.
pub fn load_inserts(path: impl AsRef<Path>) -> Result<Vec<String>, IngestError> {
    let path = path.as_ref();
    let inserts: Vec<String> = read(path)?.lines().map(str::to_string).collect();
    debug!(path = %path.display(), inserts = inserts.len(), "inserts_loaded");
    Ok(inserts)
}

/// Loads a saved timeline (JSON array of `{ "id": .., "text": .. }`).
pub fn load_timeline(path: impl AsRef<Path>) -> Result<Vec<RawMessage>, IngestError> {
    let path = path.as_ref();
    let content = read(path)?;
    let messages: Vec<RawMessage> =
        serde_json::from_str(&content).map_err(|e| IngestError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), messages = messages.len(), "timeline_loaded");
    Ok(messages)
}
