//! Per-trip cost and emission estimates derived from the rate table.

use serde::{Deserialize, Serialize};

use crate::domain::transport::{lookup, TransportMode};

/// Monetary cost and CO2 mass for a single travelled distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripEstimate {
    pub cost: f64,
    pub emission_grams: f64,
}

/// Multiplies the travelled distance by the mode's factors.
///
/// Total for every input: negative or non-finite distances are treated as zero.
pub fn compute(distance_km: f64, mode: TransportMode) -> TripEstimate {
    let distance = if distance_km.is_finite() {
        distance_km.max(0.0)
    } else {
        0.0
    };
    let rate = lookup(mode);
    TripEstimate {
        cost: distance * rate.cost_factor_per_km,
        emission_grams: distance * rate.emission_factor_g_per_km,
    }
}
