use crate::date::DateKey;
use crate::error::ConfigError;
use crate::format::DateFormat;
use std::collections::BTreeMap;
use time::{Date, Month};

pub const DEFAULT_INPUT_ID: &str = "datepickerInput";

pub const DEFAULT_CALENDAR_ID: &str = "calendar";

static ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The twelve month names shown in the calendar header and used when
/// formatting dates
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthNames(Vec<String>);

impl MonthNames {
    /// Fails unless exactly twelve names are given
    pub fn new<I, S>(names: I) -> Result<MonthNames, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect::<Vec<_>>();
        if names.len() != 12 {
            return Err(ConfigError::MonthNameCount { found: names.len() });
        }
        Ok(MonthNames(names))
    }

    pub fn name(&self, month: Month) -> &str {
        // Invariant: there are always twelve names
        &self.0[usize::from(u8::from(month) - 1)]
    }
}

impl Default for MonthNames {
    fn default() -> MonthNames {
        MonthNames(ENGLISH_MONTHS.iter().map(|&s| String::from(s)).collect())
    }
}

/// Holiday names keyed by date
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Holidays(BTreeMap<DateKey, String>);

impl Holidays {
    pub fn new() -> Holidays {
        Holidays::default()
    }

    pub fn insert<S: Into<String>>(&mut self, key: DateKey, name: S) {
        self.0.insert(key, name.into());
    }

    pub fn get(&self, key: DateKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(DateKey, S)> for Holidays {
    fn from_iter<I: IntoIterator<Item = (DateKey, S)>>(iter: I) -> Holidays {
        Holidays(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Settings fixed at the time a picker is attached
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    input_id: String,
    calendar_id: String,
    month_names: MonthNames,
    disable_weekends: bool,
    holidays: Holidays,
    date_format: DateFormat,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    pub fn with_input_id<S: Into<String>>(mut self, id: S) -> Config {
        self.input_id = id.into();
        self
    }

    pub fn with_calendar_id<S: Into<String>>(mut self, id: S) -> Config {
        self.calendar_id = id.into();
        self
    }

    pub fn with_month_names<I, S>(mut self, names: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.month_names = MonthNames::new(names)?;
        Ok(self)
    }

    pub fn with_disabled_weekends(mut self, disable: bool) -> Config {
        self.disable_weekends = disable;
        self
    }

    pub fn with_holidays(mut self, holidays: Holidays) -> Config {
        self.holidays = holidays;
        self
    }

    pub fn with_holiday<S: Into<String>>(mut self, date: Date, name: S) -> Config {
        self.holidays.insert(DateKey::from(date), name);
        self
    }

    /// Add a holiday by its date key, e.g. `"2024-12-25"`
    pub fn with_holiday_key<S: Into<String>>(
        mut self,
        key: &str,
        name: S,
    ) -> Result<Config, ConfigError> {
        self.holidays.insert(key.parse()?, name);
        Ok(self)
    }

    pub fn with_date_format<F: Into<DateFormat>>(mut self, format: F) -> Config {
        self.date_format = format.into();
        self
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    pub fn month_names(&self) -> &MonthNames {
        &self.month_names
    }

    pub fn disable_weekends(&self) -> bool {
        self.disable_weekends
    }

    pub fn holidays(&self) -> &Holidays {
        &self.holidays
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// Identifier of the "previous month" button rendered for this picker
    pub fn prev_button_id(&self) -> String {
        format!("{PREV_BUTTON_PREFIX}_{}", self.input_id)
    }

    /// Identifier of the "next month" button rendered for this picker
    pub fn next_button_id(&self) -> String {
        format!("{NEXT_BUTTON_PREFIX}_{}", self.input_id)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input_id: String::from(DEFAULT_INPUT_ID),
            calendar_id: String::from(DEFAULT_CALENDAR_ID),
            month_names: MonthNames::default(),
            disable_weekends: false,
            holidays: Holidays::new(),
            date_format: DateFormat::default(),
        }
    }
}

pub(crate) const PREV_BUTTON_PREFIX: &str = "prevMonth";

pub(crate) const NEXT_BUTTON_PREFIX: &str = "nextMonth";

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_month_names_count() {
        let eleven = &ENGLISH_MONTHS[..11];
        assert_eq!(
            MonthNames::new(eleven.iter().copied()),
            Err(ConfigError::MonthNameCount { found: 11 })
        );
        let thirteen = ENGLISH_MONTHS.iter().copied().chain(["Undecimber"]);
        assert_eq!(
            MonthNames::new(thirteen),
            Err(ConfigError::MonthNameCount { found: 13 })
        );
        assert_eq!(MonthNames::new(ENGLISH_MONTHS), Ok(MonthNames::default()));
    }

    #[test]
    fn test_month_name_lookup() {
        let names = MonthNames::new([
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ])
        .unwrap();
        assert_eq!(names.name(Month::January), "janvier");
        assert_eq!(names.name(Month::August), "août");
        assert_eq!(names.name(Month::December), "décembre");
    }

    #[test]
    fn test_config_rejects_bad_month_names() {
        let r = Config::new().with_month_names(["Jan", "Feb"]);
        assert_eq!(r, Err(ConfigError::MonthNameCount { found: 2 }));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input_id(), "datepickerInput");
        assert_eq!(config.calendar_id(), "calendar");
        assert!(!config.disable_weekends());
        assert!(config.holidays().is_empty());
        assert_eq!(config.month_names().name(Month::March), "March");
        assert_eq!(config.prev_button_id(), "prevMonth_datepickerInput");
        assert_eq!(config.next_button_id(), "nextMonth_datepickerInput");
    }

    #[test]
    fn test_holidays() {
        let config = Config::new()
            .with_holiday(date!(2024 - 12 - 25), "Christmas Day")
            .with_holiday_key("2024-1-1", "New Year's Day")
            .unwrap();
        let holidays = config.holidays();
        assert_eq!(holidays.len(), 2);
        assert_eq!(
            holidays.get(DateKey::from(date!(2024 - 12 - 25))),
            Some("Christmas Day")
        );
        assert_eq!(
            holidays.get(DateKey::from(date!(2024 - 01 - 01))),
            Some("New Year's Day")
        );
        assert_eq!(holidays.get(DateKey::from(date!(2024 - 01 - 02))), None);
    }

    #[test]
    fn test_holiday_key_must_be_unpadded() {
        let r = Config::new().with_holiday_key("2024-01-01", "New Year's Day");
        assert_eq!(
            r,
            Err(ConfigError::InvalidDateKey(String::from("2024-01-01")))
        );
    }
}
