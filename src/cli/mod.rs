//! Terminal front end: replays a week plan file and prints or exports the result.

pub mod commands;
pub mod output;
pub mod render;
pub mod table;

pub use commands::{replay_plan, run_cli, CliError, LoadedWeek};
