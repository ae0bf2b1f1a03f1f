use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{TransportMode, Weekday};
use crate::ledger::WeeklyLedger;

/// Per-mode rollup of the week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModeBreakdown {
    pub distance_km: f64,
    pub cost: f64,
    pub emission_grams: f64,
    pub trip_count: usize,
}

/// Weekly totals. Always derived from the ledger, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyAggregate {
    pub total_distance_km: f64,
    pub total_cost: f64,
    pub total_emission_grams: f64,
    pub travel_days: usize,
    /// Only modes used this week, in canonical mode order.
    pub per_mode: BTreeMap<TransportMode, ModeBreakdown>,
}

impl WeeklyAggregate {
    pub fn is_empty(&self) -> bool {
        self.travel_days == 0
    }

    /// Mode with the lowest emission; `None` unless at least two modes were used.
    pub fn most_eco_friendly(&self) -> Option<(TransportMode, &ModeBreakdown)> {
        self.argmin_by(|breakdown| breakdown.emission_grams)
    }

    /// Mode with the lowest cost; `None` unless at least two modes were used.
    pub fn most_cost_effective(&self) -> Option<(TransportMode, &ModeBreakdown)> {
        self.argmin_by(|breakdown| breakdown.cost)
    }

    // Strict `<` keeps the earlier mode on ties; the map iterates in canonical order.
    fn argmin_by<F>(&self, metric: F) -> Option<(TransportMode, &ModeBreakdown)>
    where
        F: Fn(&ModeBreakdown) -> f64,
    {
        if self.per_mode.len() < 2 {
            return None;
        }
        let mut best: Option<(TransportMode, &ModeBreakdown)> = None;
        for (mode, breakdown) in &self.per_mode {
            match best {
                Some((_, current)) if metric(breakdown) >= metric(current) => {}
                _ => best = Some((*mode, breakdown)),
            }
        }
        best
    }
}

/// One bar of the daily distance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub day: Weekday,
    pub distance_km: f64,
    pub cost: f64,
    pub emission_grams: f64,
    pub transport: TransportMode,
}

/// One slice of the distance-by-mode chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeShare {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub fraction: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums every stored day. An empty ledger gives an all-zero aggregate.
    pub fn aggregate(ledger: &WeeklyLedger) -> WeeklyAggregate {
        let mut aggregate = WeeklyAggregate::default();
        for (_, entry) in ledger.entries() {
            aggregate.total_distance_km += entry.actual_distance_km();
            aggregate.total_cost += entry.cost();
            aggregate.total_emission_grams += entry.emission_grams();
            aggregate.travel_days += 1;

            let breakdown = aggregate.per_mode.entry(entry.transport()).or_default();
            breakdown.distance_km += entry.actual_distance_km();
            breakdown.cost += entry.cost();
            breakdown.emission_grams += entry.emission_grams();
            breakdown.trip_count += 1;
        }
        aggregate
    }

    /// Traveled days in weekday order, for the daily distance chart.
    pub fn daily_series(ledger: &WeeklyLedger) -> Vec<DailyPoint> {
        ledger
            .entries()
            .map(|(day, entry)| DailyPoint {
                day,
                distance_km: entry.actual_distance_km(),
                cost: entry.cost(),
                emission_grams: entry.emission_grams(),
                transport: entry.transport(),
            })
            .collect()
    }

    /// Each used mode's share of total distance. Empty when nothing was travelled.
    pub fn mode_distance_shares(aggregate: &WeeklyAggregate) -> Vec<ModeShare> {
        if aggregate.total_distance_km <= 0.0 {
            return Vec::new();
        }
        aggregate
            .per_mode
            .iter()
            .map(|(mode, breakdown)| ModeShare {
                mode: *mode,
                distance_km: breakdown.distance_km,
                fraction: breakdown.distance_km / aggregate.total_distance_km,
            })
            .collect()
    }
}
