use crate::config::MonthNames;
use time::Date;

const MONTH_TOKEN: &str = "MM";
const DAY_TOKEN: &str = "DD";
const YEAR_TOKEN: &str = "YYYY";
const MONTH_NAME_TOKEN: &str = "selectedMonth";

/// Template for the text written into the input when a date is picked.
///
/// A template is only used if it contains all of `MM`, `DD`, and `YYYY`; in
/// that case every `MM` becomes the zero-padded month number, every `DD` the
/// zero-padded day, every `YYYY` the year, and every `selectedMonth` the
/// month's name.  Any other template (including the empty default) produces
/// `"{MonthName} {Day}, {Year}"`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new<S: Into<String>>(template: S) -> DateFormat {
        DateFormat(template.into())
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    /// Whether the template is used rather than the built-in format
    pub fn is_custom(&self) -> bool {
        [MONTH_TOKEN, DAY_TOKEN, YEAR_TOKEN]
            .iter()
            .all(|tok| self.0.contains(tok))
    }

    pub fn format(&self, date: Date, names: &MonthNames) -> String {
        let month_name = names.name(date.month());
        if self.is_custom() {
            self.0
                .replace(MONTH_TOKEN, &format!("{:02}", u8::from(date.month())))
                .replace(DAY_TOKEN, &format!("{:02}", date.day()))
                .replace(YEAR_TOKEN, &date.year().to_string())
                .replace(MONTH_NAME_TOKEN, month_name)
        } else {
            format!("{month_name} {}, {}", date.day(), date.year())
        }
    }
}

impl From<String> for DateFormat {
    fn from(template: String) -> DateFormat {
        DateFormat(template)
    }
}

impl From<&str> for DateFormat {
    fn from(template: &str) -> DateFormat {
        DateFormat(template.to_owned())
    }
}
