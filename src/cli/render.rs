//! Text rendering of the weekly summary screen.

use crate::cli::table::{Alignment, Table, TableColumn};
use crate::core::services::{ImpactService, SummaryService, WeeklyAggregate};
use crate::domain::{
    DayEntry, Displayable, NamedEntity, TransportMode, UserProfile, Weekday,
};
use crate::ledger::WeeklyLedger;

const BAR_WIDTH: usize = 30;
const BAR_CHAR: char = '█';

/// Formatting knobs taken from the user's config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub show_live_estimate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            show_live_estimate: true,
        }
    }
}

impl RenderOptions {
    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

pub fn render_profile(profile: &UserProfile) -> String {
    format!(
        "{} | age {} | {} | {}",
        profile.name(),
        profile.age(),
        profile.vehicle(),
        profile.city()
    )
}

/// One card per weekday, traveled or not.
pub fn render_day_cards(ledger: &WeeklyLedger, options: &RenderOptions) -> Vec<String> {
    Weekday::ALL
        .iter()
        .map(|day| match ledger.get(*day) {
            Some(entry) => render_day_card(*day, entry, options),
            None => format!("{day}: no travel (money and CO₂ saved)"),
        })
        .collect()
}

fn render_day_card(day: Weekday, entry: &DayEntry, options: &RenderOptions) -> String {
    let mut card = format!(
        "{day}: {} | {} km ({}) | total {} km | {} | {:.0} g CO₂",
        entry.display_label(),
        entry.entered_distance_km(),
        entry.trip_type(),
        entry.actual_distance_km(),
        options.money(entry.cost()),
        entry.emission_grams()
    );
    if options.show_live_estimate {
        card.push_str(&format!(
            "\n    {} km × {} = {} cost, {:.0} g CO₂",
            entry.actual_distance_km(),
            entry.transport(),
            options.money(entry.cost()),
            entry.emission_grams()
        ));
    }
    card
}

pub fn render_totals(aggregate: &WeeklyAggregate, options: &RenderOptions) -> Vec<String> {
    vec![
        format!("Total distance: {:.1} km", aggregate.total_distance_km),
        format!("Total cost: {}", options.money(aggregate.total_cost)),
        format!(
            "CO₂ emission: {:.2} kg",
            aggregate.total_emission_grams / 1000.0
        ),
        format!("Travel days: {}/7", aggregate.travel_days),
    ]
}

/// Horizontal bars scaled to the longest day.
pub fn render_daily_chart(ledger: &WeeklyLedger) -> Vec<String> {
    let series = SummaryService::daily_series(ledger);
    let longest = series
        .iter()
        .map(|point| point.distance_km)
        .fold(0.0_f64, f64::max);
    series
        .iter()
        .map(|point| {
            let bar_len = if longest > 0.0 {
                ((point.distance_km / longest) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<9} {} {:.1} km ({})",
                point.day.label(),
                BAR_CHAR.to_string().repeat(bar_len.max(1)),
                point.distance_km,
                point.transport.plain_name()
            )
        })
        .collect()
}

pub fn render_mode_table(aggregate: &WeeklyAggregate, options: &RenderOptions) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("Transport Mode", Alignment::Left),
        TableColumn::new("Distance", Alignment::Right),
        TableColumn::new("Cost", Alignment::Right),
        TableColumn::new("Emission", Alignment::Right),
        TableColumn::new("Trips", Alignment::Right),
    ]);
    for (mode, breakdown) in &aggregate.per_mode {
        table.push_row(vec![
            mode.label().to_string(),
            format!("{:.1} km", breakdown.distance_km),
            options.money(breakdown.cost),
            format!("{:.0}g", breakdown.emission_grams),
            breakdown.trip_count.to_string(),
        ]);
    }
    table.render()
}

pub fn render_best_performers(aggregate: &WeeklyAggregate, options: &RenderOptions) -> Vec<String> {
    let eco = match aggregate.most_eco_friendly() {
        Some((mode, stats)) => format!("{mode} ({:.0}g CO₂)", stats.emission_grams),
        None => "not applicable".to_string(),
    };
    let cheap = match aggregate.most_cost_effective() {
        Some((mode, stats)) => format!("{mode} ({})", options.money(stats.cost)),
        None => "not applicable".to_string(),
    };
    vec![
        format!("Most eco-friendly: {eco}"),
        format!("Most cost-effective: {cheap}"),
    ]
}

pub fn render_mode_shares(aggregate: &WeeklyAggregate) -> Vec<String> {
    SummaryService::mode_distance_shares(aggregate)
        .iter()
        .map(|share| format!("{}: {:.1}%", share.mode, share.fraction * 100.0))
        .collect()
}

pub fn render_impact(aggregate: &WeeklyAggregate) -> Vec<String> {
    let impact = ImpactService::estimate(aggregate);
    vec![
        format!("Trees needed to offset: {:.2}", impact.trees_to_offset),
        format!("Equivalent car km: {:.1}", impact.car_km_equivalent),
        format!(
            "CO₂ saved on rest days (g): {:.0}",
            impact.hypothetical_saved_emission_grams
        ),
    ]
}

/// Rate table rows for the `rates` command.
pub fn render_rate_table(options: &RenderOptions) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("Transport Mode", Alignment::Left),
        TableColumn::new("g CO₂/km", Alignment::Right),
        TableColumn::new("Cost/km", Alignment::Right),
    ]);
    for mode in TransportMode::ALL {
        let rate = mode.rate();
        table.push_row(vec![
            mode.label().to_string(),
            format!("{:.0}", rate.emission_factor_g_per_km),
            options.money(rate.cost_factor_per_km),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfileInput, TripType};

    fn options() -> RenderOptions {
        RenderOptions {
            currency_symbol: "Rs ".into(),
            show_live_estimate: false,
        }
    }

    fn week() -> WeeklyLedger {
        let mut ledger = WeeklyLedger::new();
        ledger.set(
            Weekday::Monday,
            DayEntry::new("Office", TransportMode::Bus, 10.0, TripType::OneWay).unwrap(),
        );
        ledger.set(
            Weekday::Wednesday,
            DayEntry::new("Campus", TransportMode::Train, 10.0, TripType::RoundTrip).unwrap(),
        );
        ledger
    }

    #[test]
    fn day_cards_cover_the_whole_week() {
        let cards = render_day_cards(&week(), &options());
        assert_eq!(cards.len(), 7);
        assert!(cards[0].starts_with("Monday: Office via 🚌 Bus"));
        assert!(cards[0].contains("Rs 20.00"));
        assert_eq!(cards[1], "Tuesday: no travel (money and CO₂ saved)");
    }

    #[test]
    fn live_estimate_is_optional() {
        let mut opts = options();
        opts.show_live_estimate = true;
        let cards = render_day_cards(&week(), &opts);
        assert!(cards[2].contains("20 km × 🚆 Train = Rs 30.00 cost, 600 g CO₂"));
    }

    #[test]
    fn chart_scales_to_longest_day() {
        let lines = render_daily_chart(&week());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(BAR_CHAR).count(), 15);
        assert_eq!(lines[1].matches(BAR_CHAR).count(), BAR_WIDTH);
    }

    #[test]
    fn totals_and_impact_lines() {
        let aggregate = SummaryService::aggregate(&week());
        let totals = render_totals(&aggregate, &options());
        assert_eq!(totals[0], "Total distance: 30.0 km");
        assert_eq!(totals[1], "Total cost: Rs 50.00");
        assert_eq!(totals[2], "CO₂ emission: 1.00 kg");
        assert_eq!(totals[3], "Travel days: 2/7");
        let impact = render_impact(&aggregate);
        assert_eq!(impact[2], "CO₂ saved on rest days (g): 6250");
    }

    #[test]
    fn best_performers_report_not_applicable_for_one_mode() {
        let mut ledger = WeeklyLedger::new();
        ledger.set(
            Weekday::Friday,
            DayEntry::new("Park", TransportMode::Bicycle, 8.0, TripType::OneWay).unwrap(),
        );
        let lines = render_best_performers(&SummaryService::aggregate(&ledger), &options());
        assert_eq!(lines[0], "Most eco-friendly: not applicable");
    }

    #[test]
    fn profile_line_lists_all_fields() {
        let profile =
            UserProfile::new(&ProfileInput::new("Dev", 22, "KTM Duke 200", "Indore")).unwrap();
        assert_eq!(render_profile(&profile), "Dev | age 22 | KTM Duke 200 | Indore");
    }
}
