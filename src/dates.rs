// ABOUTME: Calendar date helpers for day-keyed logs and weekly summaries
// ABOUTME: YYYY-MM-DD formatting, Monday-start weeks, last-N-days windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Date utilities.
//!
//! All logs are keyed by local calendar date in `YYYY-MM-DD` form; weeks
//! start on Monday.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Canonical day-key format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as its `YYYY-MM-DD` day key
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day key
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Monday and Sunday of the week containing `date`
#[must_use]
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// All seven days of the week containing `date`, Monday first
#[must_use]
pub fn days_in_week(date: NaiveDate) -> Vec<NaiveDate> {
    let (start, _) = week_range(date);
    (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// The last `n` days ending at `end` inclusive, oldest first
#[must_use]
pub fn last_n_days(end: NaiveDate, n: u64) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(back)))
        .collect()
}

/// Day name, short ("Mon") or long ("Monday")
#[must_use]
pub fn day_name(date: NaiveDate, short: bool) -> String {
    if short {
        date.format("%a").to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// Weekday index with Monday as 0 and Sunday as 6
#[must_use]
pub fn weekday_monday0(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
