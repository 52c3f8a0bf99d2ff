//! Urgency of a next scheduled contact.
//!
//! Overdue is an instant comparison; due-today is a calendar-date
//! comparison. Overdue is checked first, so an instant earlier on the same
//! day is overdue, never due today.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Date format used to decide whether two instants share a calendar day.
pub const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Next date is strictly before now.
    Overdue,
    /// Next date falls on today's calendar date and is not overdue.
    DueToday,
    /// Upcoming.
    Scheduled,
}

/// Classifies `next_date` against `now`.
///
/// `now` is read in `next_date`'s offset, so both calendar dates come from
/// the same zone.
pub fn classify_urgency(next_date: DateTime<FixedOffset>, now: DateTime<Utc>) -> Urgency {
    if next_date.with_timezone(&Utc) < now {
        return Urgency::Overdue;
    }

    let now_local = now.with_timezone(next_date.offset());
    if calendar_day(&next_date) == calendar_day(&now_local) {
        return Urgency::DueToday;
    }

    Urgency::Scheduled
}

fn calendar_day(value: &DateTime<FixedOffset>) -> String {
    value.format(CALENDAR_DAY_FORMAT).to_string()
}
