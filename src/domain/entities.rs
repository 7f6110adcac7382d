//! Domain entities. Pure value objects for the estimator.
//!
//! No terminal/IO types here; the UI shell maps its input into these.

use crate::domain::DomainError;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use std::fmt;

/// A day in the proleptic Gregorian calendar.
///
/// Month and day are always valid for the year (leap years included). Any year
/// chrono can represent is accepted; narrower year gates belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from numeric components.
    ///
    /// # Errors
    /// `DomainError::InvalidDate` when the month is outside 1..=12, the day does
    /// not exist in that month, or the year is beyond chrono's range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DomainError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days. Saturates at the calendar bounds.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = TimeDelta::try_days(days).and_then(|d| self.0.checked_add_signed(d));
        Self(shifted.unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        }))
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(&self, other: CalendarDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// "Month DD, YYYY", e.g. `March 05, 2024`.
    pub fn long_format(&self) -> String {
        self.0.format("%B %d, %Y").to_string()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DomainError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Full English weekday name ("Monday" .. "Sunday").
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Romantic,
    Passionate,
    Spontaneous,
    Loving,
    Magical,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Romantic,
        Mood::Passionate,
        Mood::Spontaneous,
        Mood::Loving,
        Mood::Magical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Romantic => "romantic",
            Mood::Passionate => "passionate",
            Mood::Spontaneous => "spontaneous",
            Mood::Loving => "loving",
            Mood::Magical => "magical",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of one estimation. Built once, displayed, discarded.
///
/// The weekday is derived from `date` on construction, so the two can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimationResult {
    date: CalendarDate,
    day_of_week: Weekday,
    time_of_day: TimeOfDay,
    mood: Mood,
}

impl EstimationResult {
    pub fn new(date: CalendarDate, time_of_day: TimeOfDay, mood: Mood) -> Self {
        Self {
            date,
            day_of_week: date.weekday(),
            time_of_day,
            mood,
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    pub fn day_of_week_label(&self) -> &'static str {
        weekday_label(self.day_of_week)
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }
}
