use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored event: a server-assigned id plus whatever fields the client
/// sent at creation time, kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl EventRecord {
    /// The server id wins over any client-supplied `id` field; a duplicate
    /// key in the flattened payload would otherwise serialize twice.
    pub fn new(id: String, mut payload: Map<String, Value>) -> Self {
        payload.remove("id");
        Self { id, payload }
    }
}

pub fn new_event_id() -> String {
    Uuid::now_v7().to_string()
}
