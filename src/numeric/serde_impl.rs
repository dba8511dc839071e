// ============================================================================
// Serde Support
// Decimals travel as strings so no precision is lost in JSON
// ============================================================================

use super::config::FormatOptions;
use super::fixed_point::FixedPointDecimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Serialized untrimmed at the value's own scale, so the scale survives a
/// round trip: `1.50` stays at scale 2.
impl Serialize for FixedPointDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_with(FormatOptions::new().trim(false)))
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = FixedPointDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal numeral string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        FixedPointDecimal::parse_strict(v, None).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FixedPointDecimal::from_integer(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FixedPointDecimal::from_integer(v))
    }
}

/// Accepts numeral strings (strict, scale inferred) and integers (scale 0).
/// Floats are rejected since they cannot carry an exact scale.
impl<'de> Deserialize<'de> for FixedPointDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
