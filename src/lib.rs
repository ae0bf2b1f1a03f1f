#![doc(test(attr(deny(warnings))))]

//! Travel Core keeps a one-week travel log and derives cost, CO₂ and
//! illustrative impact figures from it.
//!
//! The flow is: raw form values ([`domain::DayInput`]) are validated into
//! [`domain::DayEntry`] values, committed into a [`ledger::WeeklyLedger`]
//! owned by a [`ledger::TrackerSession`], and read back through
//! [`core::services`] as aggregates, impact metrics and an export snapshot.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Travel Core tracing initialized.");
    });
}
