//! Favorites blob format
//!
//! The current format is a JSON array of id strings in ascending order:
//!
//! ```text
//! ["1","26","57165"]
//! ```
//!
//! Older payloads stored whole record objects. Those still decode, keeping
//! only each object's `id`.

use crate::catalog::RecordId;
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Id(RecordId),
    Record { id: RecordId },
}

impl StoredEntry {
    fn into_id(self) -> RecordId {
        match self {
            Self::Id(id) | Self::Record { id } => id,
        }
    }
}

/// Serialize a set of ids into the current blob format
#[must_use]
pub fn encode(ids: &BTreeSet<RecordId>) -> Vec<u8> {
    let list: Vec<&str> = ids.iter().map(RecordId::as_str).collect();
    // A list of strings always serializes.
    serde_json::to_vec(&list).unwrap_or_else(|_| b"[]".to_vec())
}

/// Parse a stored blob
///
/// A JSON `null` decodes to an empty set.
///
/// # Errors
///
/// Returns the decoder's message if the blob is not a list of ids or of
/// objects with an `id` field.
pub fn decode(blob: &[u8]) -> Result<BTreeSet<RecordId>, String> {
    let entries: Option<Vec<StoredEntry>> =
        serde_json::from_slice(blob).map_err(|e| e.to_string())?;

    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(StoredEntry::into_id)
        .collect())
}
