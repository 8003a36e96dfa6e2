//! Schedule formatting helpers
//!
//! Standup times travel as `HH:MM:SS` strings and weekdays as three-letter
//! English abbreviations.

use chrono::{NaiveTime, Weekday};

use crate::errors::{GeekbotError, Result};

/// Format an hour/minute pair as the `HH:MM:00` string the API expects.
///
/// # Errors
///
/// Returns `GeekbotError::InvalidInput` when `hour > 23` or `minute > 59`.
///
/// # Examples
///
/// ```
/// use geekbot_domain::utils::schedule::format_time;
///
/// assert_eq!(format_time(9, 5).unwrap(), "09:05:00");
/// assert!(format_time(24, 0).is_err());
/// ```
pub fn format_time(hour: u32, minute: u32) -> Result<String> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        GeekbotError::InvalidInput(format!("invalid time of day {hour}:{minute}"))
    })?;
    Ok(time.format("%H:%M:%S").to_string())
}

/// Map a zero-based weekday index (0 = Monday) to its abbreviation.
///
/// # Errors
///
/// Returns `GeekbotError::InvalidInput` for indices outside `0..=6`.
///
/// # Examples
///
/// ```
/// use geekbot_domain::utils::schedule::weekday_to_str;
///
/// assert_eq!(weekday_to_str(0).unwrap(), "Mon");
/// assert_eq!(weekday_to_str(6).unwrap(), "Sun");
/// ```
pub fn weekday_to_str(day: u8) -> Result<&'static str> {
    let weekday = Weekday::try_from(day)
        .map_err(|_| GeekbotError::InvalidInput(format!("weekday index {day} is not in 0..=6")))?;
    Ok(match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    })
}
