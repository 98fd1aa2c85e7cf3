//! Request parameter builders
//!
//! Required fields are constructor arguments, optional fields are chained setters.
//! Path identifiers (`zone_id`, `record_id`) are held beside the body fields and
//! are never serialized.

use serde::Serialize;
use serde_json::Value;

/// Body of `POST /api/v1/zones`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateZoneParams {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_ttl: Option<u32>,
}

impl CreateZoneParams {
    /// Zone name and the administrator e-mail are required.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            description: None,
            default_ttl: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = Some(ttl);
        self
    }
}

/// Body of `PUT /api/v1/zones/{zoneid}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateZoneParams {
    #[serde(skip)]
    zone_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_ttl: Option<u32>,
}

impl UpdateZoneParams {
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            description: None,
            default_ttl: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Target zone.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }
}

/// Body of `POST /api/v1/zones/{zoneid}/records`.
///
/// When no TTL is set, [`Client::create_record`](crate::Client::create_record)
/// looks up the zone and uses its `default_ttl`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRecordParams {
    #[serde(skip)]
    zone_id: String,
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u32>,
}

impl CreateRecordParams {
    pub fn new(
        zone_id: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<Value>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: None,
            priority: None,
        }
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Owning zone.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// TTL, if set explicitly.
    pub fn ttl_value(&self) -> Option<u32> {
        self.ttl
    }
}

/// Body of `PUT /api/v1/zones/{zoneid}/records/{recordid}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRecordParams {
    #[serde(skip)]
    zone_id: String,
    #[serde(skip)]
    record_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u32>,
}

impl UpdateRecordParams {
    pub fn new(zone_id: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            record_id: record_id.into(),
            name: None,
            record_type: None,
            content: None,
            ttl: None,
            priority: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Value>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Owning zone.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Target record.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }
}
