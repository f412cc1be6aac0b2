//! Serialization and deserialization for card and catalog types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;
use super::catalog::HalfSuitId;

// Card serde (compact id token like "7S", "10H", "JokerJ"). Tokens double as
// JSON map keys in claim assignments.
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

// HalfSuitId serde (numeric id 0-8, as the transport protocol exchanges it)
impl Serialize for HalfSuitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for HalfSuitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let idx = u8::deserialize(deserializer)?;
        HalfSuitId::from_index(idx).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
