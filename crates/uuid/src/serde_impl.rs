//! Serde support.
//!
//! Human-readable formats carry the canonical string. Binary formats carry the `(high, low)`
//! pair, which is the canonical binary representation.

use crate::CompactUuid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for CompactUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut buf = [0u8; CompactUuid::STRING_LENGTH];
            serializer.serialize_str(self.encode(&mut buf))
        } else {
            (self.high(), self.low()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for CompactUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            CompactUuid::parse(&s).map_err(serde::de::Error::custom)
        } else {
            let (high, low) = <(u64, u64)>::deserialize(deserializer)?;
            Ok(CompactUuid::from_halves(high, low))
        }
    }
}
