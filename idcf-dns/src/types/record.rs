use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single DNS resource record within a zone.
///
/// `content` is kept as the JSON value the API returned; its shape depends on
/// the record type and is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordWire")]
pub struct Record {
    /// Record UUID.
    pub uuid: String,
    /// Record name.
    pub name: String,
    /// Record type (`A`, `TXT`, `MX`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// TTL in seconds.
    pub ttl: u32,
    /// Record content.
    pub content: Value,
    /// Priority for MX/SRV; 0 when the API omits it.
    pub priority: u32,
    /// Creation time.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update time.
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Record {
    /// Content as a string, when the API returned it as one.
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_str()
    }
}

#[derive(Deserialize)]
struct RecordWire {
    uuid: String,
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    ttl: u32,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    priority: Option<u32>,
    #[serde(default, with = "crate::utils::datetime")]
    created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "crate::utils::datetime")]
    updated_at: Option<DateTime<FixedOffset>>,
}

impl From<RecordWire> for Record {
    fn from(w: RecordWire) -> Self {
        Self {
            uuid: w.uuid,
            name: w.name,
            record_type: w.record_type,
            ttl: w.ttl,
            content: w.content,
            priority: w.priority.unwrap_or_default(),
            created_at: w.created_at,
            updated_at: w.updated_at.or(w.created_at),
        }
    }
}
