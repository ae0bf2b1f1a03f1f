//! Value types for one week of travel: modes, days, trips and the user profile.

pub mod common;
pub mod day_entry;
pub mod profile;
pub mod transport;
pub mod trip;
pub mod weekday;

pub use common::{Displayable, NamedEntity};
pub use day_entry::{propose_day, DayEntry, DayInput, DayProposal};
pub use profile::{ProfileInput, UserProfile, VEHICLE_PRESETS};
pub use transport::{lookup, RateTableEntry, TransportMode, FALLBACK_RATE};
pub use trip::TripType;
pub use weekday::Weekday;
