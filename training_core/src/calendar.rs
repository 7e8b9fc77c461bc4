//! Calendar helpers shared by the generator and resolver.
//!
//! Official programs are authored Monday-first (0 = Monday .. 6 = Sunday).
//! Every weekday lookup in the crate goes through [`monday_index`].

use chrono::{Datelike, Days, Local, NaiveDate};

/// Monday-first day index of `date` (0 = Monday, 6 = Sunday).
///
/// Remaps the Sunday-first weekday number with `(weekday + 6) % 7`.
pub fn monday_index(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_sunday() + 6) % 7
}

/// `date` shifted forward by `days` calendar days.
///
/// Saturates at the last representable date instead of panicking.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Today's date in the local timezone
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Short English weekday name, Monday-first
pub fn weekday_name(date: NaiveDate) -> &'static str {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    NAMES[monday_index(date) as usize]
}
