use crate::error::{ConfigError, OutOfTimeError};
use std::fmt;
use std::iter::successors;
use std::str::FromStr;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Column of the weekday in a Sunday-first week
    fn index0(&self) -> usize;

    fn is_weekend(&self) -> bool;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_sunday().into()
    }

    fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

/// The month currently displayed by a picker, identified by its first day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ViewMonth(Date);

impl ViewMonth {
    pub fn new(year: i32, month: Month) -> Result<ViewMonth, OutOfTimeError> {
        Date::from_calendar_date(year, month, 1)
            .map(ViewMonth)
            .map_err(|_| OutOfTimeError)
    }

    /// The month containing `date`
    pub fn containing(date: Date) -> ViewMonth {
        ViewMonth(date.replace_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        self.0.month()
    }

    /// Zero-based month, January being 0
    pub fn month_index(&self) -> u8 {
        self.month_number() - 1
    }

    /// One-based month, January being 1
    pub fn month_number(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn first_day(&self) -> Date {
        self.0
    }

    pub fn days_in_month(&self) -> u8 {
        self.days().last().map_or(1, Date::day)
    }

    /// Number of days in the month before this one
    pub fn days_in_previous_month(&self) -> u8 {
        // Before the beginning of time, pretend the previous month was a
        // December.
        self.previous().map_or(31, |prev| prev.days_in_month())
    }

    /// Column (0 = Sunday) on which the first day of the month falls
    pub fn first_weekday_offset(&self) -> usize {
        self.0.weekday().index0()
    }

    /// Number of Sunday-first week rows needed to show the whole month
    pub fn week_count(&self) -> usize {
        (usize::from(self.days_in_month()) + self.first_weekday_offset()).div_ceil(DAYS_IN_WEEK)
    }

    pub fn previous(&self) -> Result<ViewMonth, OutOfTimeError> {
        match self.month() {
            Month::January => ViewMonth::new(self.year() - 1, Month::December),
            m => ViewMonth::new(self.year(), m.previous()),
        }
    }

    pub fn next(&self) -> Result<ViewMonth, OutOfTimeError> {
        match self.month() {
            Month::December => ViewMonth::new(self.year() + 1, Month::January),
            m => ViewMonth::new(self.year(), m.next()),
        }
    }

    /// Every date in the month, in order
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let month = self.month();
        successors(Some(self.0), |&d| d.next_day()).take_while(move |d| d.month() == month)
    }
}

impl fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month_number())
    }
}

/// Lookup key for a calendar date, written `{year}-{month}-{day}` with a
/// one-based month and no zero padding, e.g. `2024-3-7`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateKey {
    year: i32,
    month: u8,
    day: u8,
}

impl DateKey {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The date the key names, or `None` if no such date exists
    pub fn to_date(self) -> Option<Date> {
        let month = Month::try_from(self.month).ok()?;
        Date::from_calendar_date(self.year, month, self.day).ok()
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> DateKey {
        DateKey {
            year: date.year(),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<DateKey, ConfigError> {
        let invalid = || ConfigError::InvalidDateKey(s.to_owned());
        // Split from the right so that negative years keep their sign
        let mut parts = s.rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        let key = DateKey {
            year: year.parse().map_err(|_| invalid())?,
            month: month.parse().map_err(|_| invalid())?,
            day: day.parse().map_err(|_| invalid())?,
        };
        if key.to_date().is_none() || key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}
