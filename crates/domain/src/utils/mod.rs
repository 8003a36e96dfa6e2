//! Utility functions for domain logic

pub mod schedule;

pub use schedule::{format_time, weekday_to_str};
