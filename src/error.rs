use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("month names must contain exactly 12 elements, got {found}")]
    MonthNameCount { found: usize },
    #[error("invalid date key {0:?}; expected YEAR-MONTH-DAY without zero padding")]
    InvalidDateKey(String),
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;
