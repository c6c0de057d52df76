//! This module declares the note record served by the API.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record in the static collection.
///
/// The backing file guarantees an identifier and a content field. Any
/// other fields a note carries are kept as opaque JSON and re-emitted
/// unchanged when the note is serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
