// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serializer for response timestamps: RFC 3339 with millisecond precision
/// and a `Z` suffix. Wire up with `#[serde(serialize_with = "...")]`.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    serializer.serialize_str(&formatted)
}
