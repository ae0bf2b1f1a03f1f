//! Explicit per-user session state: one profile, one weekly ledger.
//!
//! Sessions are single-owner values. A multi-request host should keep one
//! session per user behind its own `Mutex`; nothing here is shared.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{propose_day, DayEntry, DayInput, DayProposal, ProfileInput, UserProfile};
use crate::errors::{Result, TrackerError};

use super::weekly::WeeklyLedger;

/// Which screen of the workflow the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Tracking,
}

#[derive(Debug, Clone)]
pub struct TrackerSession {
    pub id: Uuid,
    profile: Option<UserProfile>,
    ledger: WeeklyLedger,
    phase: Phase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for TrackerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile: None,
            ledger: WeeklyLedger::new(),
            phase: Phase::Setup,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn ledger(&self) -> &WeeklyLedger {
        &self.ledger
    }

    /// Validates and stores the profile, then enters the tracking phase.
    pub fn save_profile(&mut self, input: &ProfileInput) -> Result<&UserProfile> {
        let profile = UserProfile::new(input).map_err(|err| {
            warn!(session = %self.id, "profile rejected: {err}");
            TrackerError::from(err)
        })?;
        self.phase = Phase::Tracking;
        self.touch();
        Ok(self.profile.insert(profile))
    }

    /// Returns to setup. The current profile is kept to pre-fill the form.
    pub fn edit_profile(&mut self) -> Option<ProfileInput> {
        self.phase = Phase::Setup;
        self.touch();
        self.profile.as_ref().map(UserProfile::to_input)
    }

    /// Validates one day's form values and commits the result.
    ///
    /// Returns the entry now stored for that day, or `None` when the day was cleared.
    pub fn record_day(&mut self, input: &DayInput) -> Result<Option<&DayEntry>> {
        if self.phase != Phase::Tracking {
            return Err(TrackerError::ProfileIncomplete);
        }
        let proposal = propose_day(input).map_err(|err| {
            warn!(session = %self.id, day = %input.day, "day entry rejected: {err}");
            TrackerError::from(err)
        })?;
        let day = proposal.day();
        self.ledger.apply(proposal);
        self.touch();
        Ok(self.ledger.get(day))
    }

    /// Proposes without committing, for live previews.
    pub fn preview_day(&self, input: &DayInput) -> Result<DayProposal> {
        Ok(propose_day(input)?)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
