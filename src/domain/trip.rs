use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::normalize_key;
use crate::errors::ValidationError;

/// Directionality of a day's trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Factor applied to the entered distance to get the travelled distance.
    pub const fn multiplier(self) -> f64 {
        match self {
            TripType::OneWay => 1.0,
            TripType::RoundTrip => 2.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "One-way",
            TripType::RoundTrip => "Round-trip",
        }
    }

    pub fn parse_label(raw: &str) -> Result<Self, ValidationError> {
        let key: String = normalize_key(raw)
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "oneway" => Ok(TripType::OneWay),
            "roundtrip" | "return" => Ok(TripType::RoundTrip),
            _ => Err(ValidationError::unknown("trip type", raw.trim())),
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripType::parse_label(s)
    }
}

impl Serialize for TripType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TripType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TripType::parse_label(&raw).map_err(serde::de::Error::custom)
    }
}
