//! Day-level travel records and the raw candidates they are built from.

use serde::{Deserialize, Serialize};

use crate::core::calculator::{self, TripEstimate};
use crate::domain::common::Displayable;
use crate::domain::transport::TransportMode;
use crate::domain::trip::TripType;
use crate::domain::weekday::Weekday;
use crate::errors::ValidationError;

/// Raw form values for one weekday, as handed over by an input front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayInput {
    pub day: String,
    pub traveled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
}

impl DayInput {
    /// A "did not travel" candidate for `day`.
    pub fn no_travel(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            traveled: false,
            ..Self::default()
        }
    }

    pub fn travel(
        day: impl Into<String>,
        destination: impl Into<String>,
        transport: impl Into<String>,
        distance_km: f64,
        trip_type: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            traveled: true,
            destination: Some(destination.into()),
            transport: Some(transport.into()),
            distance_km: Some(distance_km),
            trip_type: Some(trip_type.into()),
        }
    }
}

/// One traveled day. Only these are ever stored in the weekly ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    destination: String,
    transport: TransportMode,
    entered_distance_km: f64,
    trip_type: TripType,
    actual_distance_km: f64,
    estimate: TripEstimate,
}

impl DayEntry {
    /// Validates the travel fields and derives distance, cost and emission.
    pub fn new(
        destination: impl Into<String>,
        transport: TransportMode,
        entered_distance_km: f64,
        trip_type: TripType,
    ) -> Result<Self, ValidationError> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(ValidationError::MissingField("destination"));
        }
        if !(entered_distance_km.is_finite() && entered_distance_km > 0.0) {
            return Err(ValidationError::MissingField("distance"));
        }
        let actual_distance_km = entered_distance_km * trip_type.multiplier();
        if !actual_distance_km.is_finite() {
            return Err(ValidationError::NotFinite("distance"));
        }
        let estimate = calculator::compute(actual_distance_km, transport);
        if !(estimate.cost.is_finite() && estimate.emission_grams.is_finite()) {
            return Err(ValidationError::NotFinite("estimate"));
        }
        Ok(Self {
            destination,
            transport,
            entered_distance_km,
            trip_type,
            actual_distance_km,
            estimate,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn transport(&self) -> TransportMode {
        self.transport
    }

    pub fn entered_distance_km(&self) -> f64 {
        self.entered_distance_km
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn actual_distance_km(&self) -> f64 {
        self.actual_distance_km
    }

    pub fn cost(&self) -> f64 {
        self.estimate.cost
    }

    pub fn emission_grams(&self) -> f64 {
        self.estimate.emission_grams
    }

    pub fn estimate(&self) -> TripEstimate {
        self.estimate
    }
}

impl Displayable for DayEntry {
    fn display_label(&self) -> String {
        format!(
            "{} via {} ({} km, {})",
            self.destination, self.transport, self.actual_distance_km, self.trip_type
        )
    }
}

/// Outcome of validating a [`DayInput`].
#[derive(Debug, Clone, PartialEq)]
pub enum DayProposal {
    Travel(Weekday, DayEntry),
    NoTravel(Weekday),
}

impl DayProposal {
    pub fn day(&self) -> Weekday {
        match self {
            DayProposal::Travel(day, _) | DayProposal::NoTravel(day) => *day,
        }
    }
}

/// Turns raw form values into a [`DayProposal`].
///
/// A rejected proposal carries no state; the caller's ledger is untouched.
pub fn propose_day(input: &DayInput) -> Result<DayProposal, ValidationError> {
    let day = Weekday::parse_label(&input.day)?;
    if !input.traveled {
        return Ok(DayProposal::NoTravel(day));
    }

    let destination = input
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingField("destination"))?;
    let distance_km = input
        .distance_km
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(ValidationError::MissingField("distance"))?;
    let transport = match input.transport.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => TransportMode::parse_label(label)?,
        _ => return Err(ValidationError::MissingField("transport")),
    };
    let trip_type = match input.trip_type.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => TripType::parse_label(label)?,
        _ => TripType::OneWay,
    };

    let entry = DayEntry::new(destination, transport, distance_km, trip_type)?;
    Ok(DayProposal::Travel(day, entry))
}
