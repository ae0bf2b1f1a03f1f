use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{DayEntry, DayProposal, Weekday};

/// Traveled days of one week, keyed by weekday.
///
/// A missing key means "did not travel"; no placeholder entries are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyLedger {
    days: BTreeMap<Weekday, DayEntry>,
}

impl WeeklyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday) -> Option<&DayEntry> {
        self.days.get(&day)
    }

    /// Stores `entry` for `day`, returning the entry it replaced.
    pub fn set(&mut self, day: Weekday, entry: DayEntry) -> Option<DayEntry> {
        debug!(%day, destination = entry.destination(), "recording travel day");
        self.days.insert(day, entry)
    }

    pub fn remove(&mut self, day: Weekday) -> Option<DayEntry> {
        let removed = self.days.remove(&day);
        if removed.is_some() {
            debug!(%day, "cleared travel day");
        }
        removed
    }

    /// Commits a validated proposal: travel replaces the day, no-travel clears it.
    pub fn apply(&mut self, proposal: DayProposal) -> Option<DayEntry> {
        match proposal {
            DayProposal::Travel(day, entry) => self.set(day, entry),
            DayProposal::NoTravel(day) => self.remove(day),
        }
    }

    /// Entries in Monday..Sunday order.
    pub fn entries(&self) -> impl Iterator<Item = (Weekday, &DayEntry)> + '_ {
        self.days.iter().map(|(day, entry)| (*day, entry))
    }

    pub fn traveled(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
