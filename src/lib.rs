//! A month-grid date picker bound to an input element and a calendar
//! container on some host [`Surface`].
//!
//! Clicking the input shows or hides the calendar; the calendar's header
//! buttons page between months; clicking a day writes the formatted date into
//! the input and hides the calendar.  Weekends can be made unselectable, and
//! holidays are marked with their names.
//!
//! ```
//! use datepicker::{ClickOutcome, Config, DatePicker, DateKey, Document};
//! use time::macros::date;
//!
//! let mut doc = Document::new()
//!     .with_element("datepickerInput")
//!     .with_element("calendar");
//! let mut picker = DatePicker::attach(Config::default(), date!(2024 - 03 - 01), &mut doc);
//! picker.handle_click(&doc.click_element("datepickerInput"), &mut doc);
//! let click = doc
//!     .click_date("calendar", DateKey::from(date!(2024 - 03 - 07)))
//!     .unwrap();
//! assert_eq!(
//!     picker.handle_click(&click, &mut doc),
//!     ClickOutcome::Selected(String::from("March 7, 2024"))
//! );
//! assert_eq!(doc.value("datepickerInput"), Some("March 7, 2024"));
//! picker.dispose(&mut doc);
//! ```
mod config;
mod date;
mod document;
mod error;
mod format;
mod grid;
mod html;
mod picker;
mod surface;
pub use crate::config::{Config, Holidays, MonthNames, DEFAULT_CALENDAR_ID, DEFAULT_INPUT_ID};
pub use crate::date::{DateKey, ViewMonth};
pub use crate::document::Document;
pub use crate::error::{ConfigError, OutOfTimeError};
pub use crate::format::DateFormat;
pub use crate::grid::{Cell, CellKind, MonthGrid, Week};
pub use crate::html::render_calendar;
pub use crate::picker::{ClickOutcome, DatePicker, VISIBLE_CLASS};
pub use crate::surface::{Click, ListenerId, Surface};
