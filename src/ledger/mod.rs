//! The mutable side of the crate: the weekly ledger and the session that owns it.

pub mod session;
pub mod weekly;

pub use session::{Phase, TrackerSession};
pub use weekly::WeeklyLedger;
