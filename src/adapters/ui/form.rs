//! Date form state: the selected date plus the raw year/month/day fields.
//!
//! Local to the UI session. A rejected edit never touches the selected date.

use crate::domain::{CalendarDate, DomainError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DateForm {
    selected: CalendarDate,
    year: String,
    month: String,
    day: String,
    min_year: i32,
    max_year: i32,
}

impl DateForm {
    /// Form showing `initial`, accepting typed years in `min_year..=max_year`.
    pub fn new(initial: CalendarDate, (min_year, max_year): (i32, i32)) -> Self {
        let mut form = Self {
            selected: initial,
            year: String::new(),
            month: String::new(),
            day: String::new(),
            min_year,
            max_year,
        };
        form.sync_fields();
        form
    }

    pub fn selected(&self) -> CalendarDate {
        self.selected
    }

    /// Current `(year, month, day)` field text.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.year, &self.month, &self.day)
    }

    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Replace the selection (calendar picker). Fields follow the new date.
    pub fn select(&mut self, date: CalendarDate) {
        self.selected = date;
        self.sync_fields();
    }

    /// Store raw field text and try to turn it into the new selection.
    ///
    /// # Errors
    /// `NotANumber`, `YearOutOfRange` or `InvalidDate`. On error the previous
    /// selection is kept and the fields are reset to it.
    pub fn submit(
        &mut self,
        year: impl Into<String>,
        month: impl Into<String>,
        day: impl Into<String>,
    ) -> Result<CalendarDate, DomainError> {
        self.year = year.into();
        self.month = month.into();
        self.day = day.into();
        match self.parse_fields() {
            Ok(date) => {
                self.select(date);
                debug!(date = %date, "date updated from fields");
                Ok(date)
            }
            Err(e) => {
                self.sync_fields();
                Err(e)
            }
        }
    }

    fn parse_fields(&self) -> Result<CalendarDate, DomainError> {
        let year: i32 = parse_field("year", &self.year)?;
        let month: u32 = parse_field("month", &self.month)?;
        let day: u32 = parse_field("day", &self.day)?;
        if !(self.min_year..=self.max_year).contains(&year) {
            return Err(DomainError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        CalendarDate::new(year, month, day)
    }

    fn sync_fields(&mut self) {
        self.year = self.selected.year().to_string();
        self.month = self.selected.month().to_string();
        self.day = self.selected.day().to_string();
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, DomainError> {
    raw.trim().parse().map_err(|_| DomainError::NotANumber {
        field,
        value: raw.to_string(),
    })
}
