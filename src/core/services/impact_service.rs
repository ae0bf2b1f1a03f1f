//! Illustrative environmental-impact figures derived from weekly totals.
//!
//! These are rough talking points for the summary screen, not audited
//! carbon accounting. The constants are kept exactly as the exported
//! reports have always used them.

use serde::Serialize;

use super::summary_service::WeeklyAggregate;

/// Divisor for the trees figure. Nominally 22 kg of CO2 per tree per year,
/// but applied to a gram total as-is, so the result reads 1000x high.
pub const TREE_ABSORPTION_DIVISOR: f64 = 22_000.0;
/// Reference emission of an average car, g/km.
pub const REFERENCE_CAR_G_PER_KM: f64 = 120.0;
/// Assumed trip length for a day spent at home.
pub const ASSUMED_IDLE_TRIP_KM: f64 = 10.0;
/// Assumed emission factor for that trip, g/km.
pub const ASSUMED_IDLE_TRIP_G_PER_KM: f64 = 125.0;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactMetrics {
    pub trees_to_offset: f64,
    pub car_km_equivalent: f64,
    pub hypothetical_saved_emission_grams: f64,
}

pub struct ImpactService;

impl ImpactService {
    pub fn estimate(aggregate: &WeeklyAggregate) -> ImpactMetrics {
        let idle_days = DAYS_PER_WEEK.saturating_sub(aggregate.travel_days) as f64;
        ImpactMetrics {
            trees_to_offset: aggregate.total_emission_grams / TREE_ABSORPTION_DIVISOR,
            car_km_equivalent: aggregate.total_emission_grams / REFERENCE_CAR_G_PER_KM,
            hypothetical_saved_emission_grams: idle_days
                * ASSUMED_IDLE_TRIP_KM
                * ASSUMED_IDLE_TRIP_G_PER_KM,
        }
    }
}
