//! Input record shape for fetched messages.
//!
//! A saved timeline is a JSON array of objects carrying at least `id` and
//! `text`; any other fields (timestamps, user objects, entity lists) are
//! ignored:
//!
//! ```json
//! [
//!   { "id": 1021, "text": "Liftoff! #Artemis", "created_at": "..." },
//!   { "id": 1022, "text": "Crew is safe." }
//! ]
//! ```

use canonical::MessageId;
use serde::{Deserialize, Serialize};

/// An un-annotated message as delivered by a source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawMessage {
    pub id: MessageId,
    pub text: String,
}

impl RawMessage {
    pub fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
