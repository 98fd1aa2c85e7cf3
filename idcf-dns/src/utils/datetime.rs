//! 日期时间序列化/反序列化工具
//!
//! The API sends timestamps as `2006-01-02T15:04:05+09:00`: a numeric UTC offset,
//! optionally with fractional seconds. `Z` is not part of the layout and is rejected.
//!
//! Use with `#[serde(default, with = "crate::utils::datetime")]` on an
//! `Option<DateTime<FixedOffset>>` field: absent and `null` both map to `None`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serializer};

/// chrono layout for API timestamps.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parse an API timestamp, keeping its offset.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(s, TIMESTAMP_LAYOUT)
}

/// 序列化 Option<`DateTime`<FixedOffset>> 为 Option<RFC3339 字符串>
pub fn serialize<S>(dt: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：`null` -> None，字符串按 API 格式解析，解析失败即报错
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .map_err(|e| Error::custom(format!("Invalid timestamp '{s}': {e}"))),
        None => Ok(None),
    }
}
