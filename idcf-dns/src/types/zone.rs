use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A DNS zone managed through the API.
///
/// Decoding is strict for identity and settings and lenient for timestamps:
/// a missing `created_at` stays `None`, a missing `updated_at` takes the value
/// of `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ZoneWire")]
pub struct Zone {
    /// Zone UUID.
    pub uuid: String,
    /// Zone (domain) name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// TTL applied to new records that do not set one, in seconds.
    pub default_ttl: u32,
    /// Whether domain ownership has been verified.
    pub authenticated: bool,
    /// Creation time.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update time.
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Zone object as sent by the API.
#[derive(Deserialize)]
struct ZoneWire {
    uuid: String,
    name: String,
    description: String,
    default_ttl: u32,
    authenticated: bool,
    #[serde(default, with = "crate::utils::datetime")]
    created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "crate::utils::datetime")]
    updated_at: Option<DateTime<FixedOffset>>,
}

impl From<ZoneWire> for Zone {
    fn from(w: ZoneWire) -> Self {
        Self {
            uuid: w.uuid,
            name: w.name,
            description: w.description,
            default_ttl: w.default_ttl,
            authenticated: w.authenticated,
            created_at: w.created_at,
            updated_at: w.updated_at.or(w.created_at),
        }
    }
}
