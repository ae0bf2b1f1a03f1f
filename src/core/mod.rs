pub mod calculator;
pub mod services;
pub mod utils;
