//! Serde helpers for Discord snowflake IDs.
//!
//! Snowflakes exceed the 53-bit integer range JavaScript can represent
//! exactly, so they always cross the JSON boundary as decimal strings.

use serde::Serializer;

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn serialize_vec<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|v| v.to_string()))
}
