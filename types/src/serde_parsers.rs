//! Custom serde helpers for fields whose wire representation differs from
//! their Rust type.

use serde::{de::Deserializer, ser::Serializer, Deserialize};

/// Largest integer an [f64] can hold without losing precision (2^53).
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Serialize an [f64], writing whole numbers as JSON integers. Stake amounts
/// such as `1000.0` go out as `1000` while `0.01` stays `0.01`.
pub fn serialize_trimmed_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_F64_INT {
        return serializer.serialize_i64(*value as i64);
    }

    serializer.serialize_f64(*value)
}

/// Deserialize a non-empty string of ASCII digits. Commitment coordinates are
/// field elements far wider than any native integer so they stay textual, but
/// anything that is not a decimal integer is rejected.
pub fn deserialize_decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserializer)?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(serde::de::Error::custom(format!(
            "'{value}' is not a decimal integer"
        )));
    }

    Ok(value)
}
