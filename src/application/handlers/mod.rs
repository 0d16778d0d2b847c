//! Command handlers grouped by aggregate.

pub mod checkin;
pub mod user;
