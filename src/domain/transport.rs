//! Transport modes and the static per-kilometre rate table.

use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::{closest_label, normalize_key, Displayable};
use crate::errors::ValidationError;

/// Closed set of supported travel methods, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransportMode {
    MotorcycleScooter,
    CarPetrol,
    CarDiesel,
    Bus,
    Train,
    AutoRickshaw,
    Bicycle,
    Walking,
    DomesticFlight,
    ElectricScooter,
}

/// Emission and cost factors applied per travelled kilometre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTableEntry {
    pub emission_factor_g_per_km: f64,
    pub cost_factor_per_km: f64,
}

impl RateTableEntry {
    const fn new(emission_factor_g_per_km: f64, cost_factor_per_km: f64) -> Self {
        Self {
            emission_factor_g_per_km,
            cost_factor_per_km,
        }
    }
}

/// Rate used for labels outside the table. Never reached through `TransportMode`.
pub const FALLBACK_RATE: RateTableEntry = RateTableEntry::new(75.0, 3.5);

impl TransportMode {
    pub const ALL: [TransportMode; 10] = [
        TransportMode::MotorcycleScooter,
        TransportMode::CarPetrol,
        TransportMode::CarDiesel,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::AutoRickshaw,
        TransportMode::Bicycle,
        TransportMode::Walking,
        TransportMode::DomesticFlight,
        TransportMode::ElectricScooter,
    ];

    /// Static factors for this mode.
    pub const fn rate(self) -> RateTableEntry {
        match self {
            TransportMode::MotorcycleScooter => RateTableEntry::new(80.0, 3.5),
            TransportMode::CarPetrol => RateTableEntry::new(120.0, 6.0),
            TransportMode::CarDiesel => RateTableEntry::new(100.0, 4.5),
            TransportMode::Bus => RateTableEntry::new(40.0, 2.0),
            TransportMode::Train => RateTableEntry::new(30.0, 1.5),
            TransportMode::AutoRickshaw => RateTableEntry::new(90.0, 12.0),
            TransportMode::Bicycle => RateTableEntry::new(0.0, 0.0),
            TransportMode::Walking => RateTableEntry::new(0.0, 0.0),
            TransportMode::DomesticFlight => RateTableEntry::new(200.0, 8.0),
            TransportMode::ElectricScooter => RateTableEntry::new(20.0, 0.5),
        }
    }

    /// Label used in exported reports, e.g. `🚌 Bus`.
    pub const fn label(self) -> &'static str {
        match self {
            TransportMode::MotorcycleScooter => "🏍️ Motorcycle/Scooter",
            TransportMode::CarPetrol => "🚗 Car (Petrol)",
            TransportMode::CarDiesel => "🚗 Car (Diesel)",
            TransportMode::Bus => "🚌 Bus",
            TransportMode::Train => "🚆 Train",
            TransportMode::AutoRickshaw => "🚕 Auto Rickshaw",
            TransportMode::Bicycle => "🚲 Bicycle",
            TransportMode::Walking => "🚶 Walking",
            TransportMode::DomesticFlight => "✈️ Flight (Domestic)",
            TransportMode::ElectricScooter => "🛵 Electric Scooter",
        }
    }

    /// Label without the pictogram prefix.
    pub const fn plain_name(self) -> &'static str {
        match self {
            TransportMode::MotorcycleScooter => "Motorcycle/Scooter",
            TransportMode::CarPetrol => "Car (Petrol)",
            TransportMode::CarDiesel => "Car (Diesel)",
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::AutoRickshaw => "Auto Rickshaw",
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Walking => "Walking",
            TransportMode::DomesticFlight => "Flight (Domestic)",
            TransportMode::ElectricScooter => "Electric Scooter",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            TransportMode::MotorcycleScooter => "motorcycle_scooter",
            TransportMode::CarPetrol => "car_petrol",
            TransportMode::CarDiesel => "car_diesel",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::AutoRickshaw => "auto_rickshaw",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walking => "walking",
            TransportMode::DomesticFlight => "domestic_flight",
            TransportMode::ElectricScooter => "electric_scooter",
        }
    }

    /// Parses any accepted spelling: export label, plain name or snake_case key.
    pub fn parse_label(raw: &str) -> Result<Self, ValidationError> {
        LABEL_INDEX
            .get(&normalize_key(raw))
            .copied()
            .ok_or_else(|| ValidationError::UnknownEnumValue {
                kind: "transport mode",
                value: raw.trim().to_string(),
                suggestion: closest_label(
                    raw,
                    TransportMode::ALL.iter().map(|mode| mode.plain_name()),
                ),
            })
    }
}

static LABEL_INDEX: Lazy<HashMap<String, TransportMode>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for mode in TransportMode::ALL {
        for spelling in [mode.label(), mode.plain_name(), mode.key()] {
            index.insert(normalize_key(spelling), mode);
        }
    }
    index
});

/// Looks up the factors for a mode.
pub fn lookup(mode: TransportMode) -> RateTableEntry {
    mode.rate()
}

/// Label-keyed lookup for callers holding raw selector text.
/// Unknown labels resolve to [`FALLBACK_RATE`]; validated input never needs this.
pub fn rate_for_label(label: &str) -> RateTableEntry {
    TransportMode::parse_label(label)
        .map(TransportMode::rate)
        .unwrap_or(FALLBACK_RATE)
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Displayable for TransportMode {
    fn display_label(&self) -> String {
        self.label().to_string()
    }
}

impl FromStr for TransportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::parse_label(s)
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TransportMode::parse_label(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_and_train_factors_match_table() {
        assert_eq!(lookup(TransportMode::Bus), RateTableEntry::new(40.0, 2.0));
        assert_eq!(lookup(TransportMode::Train), RateTableEntry::new(30.0, 1.5));
    }

    #[test]
    fn every_spelling_parses_to_the_same_mode() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::parse_label(mode.label()), Ok(mode));
            assert_eq!(TransportMode::parse_label(mode.plain_name()), Ok(mode));
            assert_eq!(TransportMode::parse_label(mode.key()), Ok(mode));
        }
        assert_eq!(
            TransportMode::parse_label("  car (diesel) "),
            Ok(TransportMode::CarDiesel)
        );
    }

    #[test]
    fn unknown_label_is_rejected_with_suggestion() {
        let err = TransportMode::parse_label("Trian").expect_err("unknown label");
        match err {
            ValidationError::UnknownEnumValue {
                value, suggestion, ..
            } => {
                assert_eq!(value, "Trian");
                assert_eq!(suggestion.as_deref(), Some("Train"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn raw_label_lookup_falls_back_for_unknown_text() {
        assert_eq!(rate_for_label("Hovercraft"), FALLBACK_RATE);
        assert_eq!(rate_for_label("🚆 Train"), TransportMode::Train.rate());
    }

    #[test]
    fn modes_serialize_as_export_labels() {
        let json = serde_json::to_string(&TransportMode::DomesticFlight).unwrap();
        assert_eq!(json, "\"✈️ Flight (Domestic)\"");
        let parsed: TransportMode = serde_json::from_str("\"🛵 Electric Scooter\"").unwrap();
        assert_eq!(parsed, TransportMode::ElectricScooter);
    }
}
