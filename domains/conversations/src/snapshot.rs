//! Decoding of conversation snapshots delivered by the backend
//!
//! The backend client returns query results either as a bare array of rows
//! or wrapped in an envelope (`{"data": [...], "error": null}`). Both forms
//! are accepted, as is a `conversations` envelope used by exported fixtures.
//!
//! Each field accepts one spelling per row. A row carrying both a field and
//! one of its aliases (`kind` and `type`, say) is rejected, and with it the
//! whole snapshot.

use serde_json::Value;
use tracing::{debug, warn};

use campus_common::{Error, Result};

use crate::domain::entities::Conversation;

/// Envelope keys checked, in order, when the snapshot is an object
const ENVELOPE_KEYS: [&str; 2] = ["data", "conversations"];

/// Pull the row array out of a bare or enveloped snapshot
fn unwrap_rows(value: Value) -> Result<Value> {
    match value {
        rows @ Value::Array(_) => Ok(rows),
        Value::Object(mut map) => {
            for key in ENVELOPE_KEYS {
                if let Some(rows) = map.remove(key) {
                    return match rows {
                        Value::Array(_) => Ok(rows),
                        other => Err(Error::Validation(format!(
                            "Snapshot field '{}' must be an array, found {}",
                            key,
                            json_type_name(&other)
                        ))),
                    };
                }
            }
            Err(Error::Validation(
                "Snapshot object has no 'data' or 'conversations' array".to_string(),
            ))
        }
        other => Err(Error::Validation(format!(
            "Snapshot must be an array or an object, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode an already-parsed snapshot
pub fn decode_snapshot_value(value: Value) -> Result<Vec<Conversation>> {
    let rows = unwrap_rows(value)?;
    let conversations: Vec<Conversation> = serde_json::from_value(rows)?;

    for conversation in conversations.iter().filter(|c| !c.kind.is_recognized()) {
        warn!(
            conversation_id = %conversation.id,
            kind = %conversation.kind,
            "Unrecognized conversation kind, using generic fallback name"
        );
    }

    debug!(count = conversations.len(), "Decoded conversation snapshot");
    Ok(conversations)
}

/// Decode a JSON snapshot into conversations
pub fn decode_snapshot(input: &str) -> Result<Vec<Conversation>> {
    let value: Value = serde_json::from_str(input)?;
    decode_snapshot_value(value)
}
