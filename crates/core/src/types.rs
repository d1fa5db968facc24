use chrono::SubsecRound;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time truncated to the millisecond precision timestamps are
/// stored with, so a record read back compares equal to the one written.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(3)
}

/// Serde adapter writing timestamps as ISO-8601 with millisecond precision
/// and a `Z` suffix (`2024-05-01T09:30:00.000Z`).
///
/// Deserialization accepts any RFC 3339 string, including the
/// microsecond/offset form Postgres emits.
pub mod iso8601 {
    use chrono::SecondsFormat;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        chrono::DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(serde::de::Error::custom)
    }
}
