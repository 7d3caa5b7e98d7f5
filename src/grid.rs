use crate::config::Config;
use crate::date::{DateKey, ViewMonth, WeekdayExt, DAYS_IN_WEEK};
use std::array;
use time::Date;

/// What a single calendar cell shows and whether it can be picked
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    /// A day outside the displayed month: one of the previous month's
    /// trailing days, or an empty placeholder after the month's end
    Filler { day: Option<u8> },
    /// A pickable day
    Selectable { date: Date },
    /// A Saturday or Sunday while weekends are disabled
    DisabledWeekend { date: Date },
    Holiday {
        date: Date,
        name: String,
    },
    /// A holiday falling on a disabled weekend
    DisabledHoliday {
        date: Date,
        name: String,
    },
}

/// The mutually exclusive kinds of [`Cell`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellKind {
    Filler,
    Selectable,
    DisabledWeekend,
    Holiday,
    DisabledHoliday,
}

impl Cell {
    /// Classify a day of the displayed month.  Weekend disabling takes
    /// priority over selectability, and holidays are marked either way.
    pub fn classify(date: Date, config: &Config) -> Cell {
        let weekend_disabled = config.disable_weekends() && date.weekday().is_weekend();
        let holiday = config.holidays().get(DateKey::from(date)).map(String::from);
        match (weekend_disabled, holiday) {
            (true, Some(name)) => Cell::DisabledHoliday { date, name },
            (true, None) => Cell::DisabledWeekend { date },
            (false, Some(name)) => Cell::Holiday { date, name },
            (false, None) => Cell::Selectable { date },
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Filler { .. } => CellKind::Filler,
            Cell::Selectable { .. } => CellKind::Selectable,
            Cell::DisabledWeekend { .. } => CellKind::DisabledWeekend,
            Cell::Holiday { .. } => CellKind::Holiday,
            Cell::DisabledHoliday { .. } => CellKind::DisabledHoliday,
        }
    }

    /// The date of a cell in the displayed month
    pub fn date(&self) -> Option<Date> {
        match self {
            Cell::Filler { .. } => None,
            Cell::Selectable { date }
            | Cell::DisabledWeekend { date }
            | Cell::Holiday { date, .. }
            | Cell::DisabledHoliday { date, .. } => Some(*date),
        }
    }

    /// The day number shown in the cell, if any
    pub fn day(&self) -> Option<u8> {
        match self {
            Cell::Filler { day } => *day,
            _ => self.date().map(Date::day),
        }
    }

    pub fn holiday_name(&self) -> Option<&str> {
        match self {
            Cell::Holiday { name, .. } | Cell::DisabledHoliday { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Cell::Selectable { .. })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Week([Cell; DAYS_IN_WEEK]);

impl Week {
    /// The week's cells, Sunday first
    pub fn cells(&self) -> &[Cell; DAYS_IN_WEEK] {
        &self.0
    }
}

/// One month laid out as Sunday-first weeks
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    view: ViewMonth,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn generate(view: ViewMonth, config: &Config) -> MonthGrid {
        let offset = view.first_weekday_offset();
        let prev_days = usize::from(view.days_in_previous_month());
        let week_qty = view.week_count();
        let mut days = view.days();
        let mut weeks = Vec::with_capacity(week_qty);
        for i in 0..week_qty {
            weeks.push(Week(array::from_fn(|j| {
                if i == 0 && j < offset {
                    let day = prev_days - offset + j + 1;
                    Cell::Filler {
                        day: u8::try_from(day).ok(),
                    }
                } else {
                    match days.next() {
                        Some(date) => Cell::classify(date, config),
                        None => Cell::Filler { day: None },
                    }
                }
            })));
        }
        MonthGrid { view, weeks }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.weeks.iter().flat_map(|w| w.0.iter())
    }

    /// The cell showing `date`, if it belongs to the displayed month
    pub fn cell_for(&self, date: Date) -> Option<&Cell> {
        self.cells().find(|c| c.date() == Some(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Holidays;
    use time::macros::date;
    use time::Month;

    fn grid(year: i32, month: Month, config: &Config) -> MonthGrid {
        MonthGrid::generate(ViewMonth::new(year, month).unwrap(), config)
    }

    fn kinds(week: &Week) -> [CellKind; DAYS_IN_WEEK] {
        array::from_fn(|i| week.cells()[i].kind())
    }

    #[test]
    fn test_march_2024() {
        let g = grid(2024, Month::March, &Config::default());
        assert_eq!(g.weeks().len(), 6);
        let first = &g.weeks()[0];
        // February 2024 had 29 days and March 1 is a Friday
        let leading = first.cells()[..5]
            .iter()
            .map(Cell::day)
            .collect::<Vec<_>>();
        assert_eq!(
            leading,
            [Some(25), Some(26), Some(27), Some(28), Some(29)]
        );
        assert!(first.cells()[..5]
            .iter()
            .all(|c| c.kind() == CellKind::Filler));
        assert_eq!(
            first.cells()[5],
            Cell::Selectable {
                date: date!(2024 - 03 - 01)
            }
        );
        let last = &g.weeks()[5];
        assert_eq!(
            last.cells()[0],
            Cell::Selectable {
                date: date!(2024 - 03 - 31)
            }
        );
        assert!(last.cells()[1..]
            .iter()
            .all(|c| *c == Cell::Filler { day: None }));
    }

    #[test]
    fn test_month_starting_on_sunday() {
        let g = grid(2024, Month::September, &Config::default());
        assert_eq!(g.weeks().len(), 5);
        assert_eq!(g.weeks()[0].cells()[0].day(), Some(1));
        assert!(g.weeks()[0].cells().iter().all(Cell::is_selectable));
    }

    #[test]
    fn test_four_week_february() {
        let g = grid(2015, Month::February, &Config::default());
        assert_eq!(g.weeks().len(), 4);
        assert!(g.cells().all(Cell::is_selectable));
    }

    #[test]
    fn test_week_rows_and_days_for_many_months() {
        let config = Config::default();
        let mut view = ViewMonth::new(1999, Month::January).unwrap();
        for _ in 0..(12 * 30) {
            let g = MonthGrid::generate(view, &config);
            let expected_weeks =
                (usize::from(view.days_in_month()) + view.first_weekday_offset()).div_ceil(7);
            assert_eq!(g.weeks().len(), expected_weeks, "{view}");
            let days = g
                .cells()
                .filter_map(Cell::date)
                .map(|d| d.day())
                .collect::<Vec<_>>();
            let expected_days = (1..=view.days_in_month()).collect::<Vec<_>>();
            assert_eq!(days, expected_days, "{view}");
            for cell in g.cells() {
                if let Some(date) = cell.date() {
                    assert_eq!(date.month(), view.month(), "{view}");
                    assert_eq!(date.year(), view.year(), "{view}");
                }
            }
            view = view.next().unwrap();
        }
    }

    #[test]
    fn test_cells_fall_on_their_weekday_column() {
        let g = grid(2023, Month::November, &Config::default());
        for week in g.weeks() {
            for (i, cell) in week.cells().iter().enumerate() {
                if let Some(date) = cell.date() {
                    assert_eq!(date.weekday().index0(), i, "{date}");
                }
            }
        }
    }

    #[test]
    fn test_disabled_weekends() {
        let config = Config::new().with_disabled_weekends(true);
        let g = grid(2024, Month::March, &config);
        use CellKind::*;
        assert_eq!(
            kinds(&g.weeks()[1]),
            [
                DisabledWeekend,
                Selectable,
                Selectable,
                Selectable,
                Selectable,
                Selectable,
                DisabledWeekend
            ]
        );
        for cell in g.cells() {
            if let Some(date) = cell.date() {
                assert_eq!(
                    cell.is_selectable(),
                    !date.weekday().is_weekend(),
                    "{date}"
                );
            }
        }
    }

    #[test]
    fn test_holiday_on_weekday() {
        let config = Config::new().with_holiday(date!(2024 - 12 - 25), "Christmas Day");
        let g = grid(2024, Month::December, &config);
        let cell = g.cell_for(date!(2024 - 12 - 25)).unwrap();
        assert_eq!(cell.kind(), CellKind::Holiday);
        assert_eq!(cell.holiday_name(), Some("Christmas Day"));
        assert!(!cell.is_selectable());
        assert_eq!(
            g.cells()
                .filter(|c| c.holiday_name().is_some())
                .count(),
            1
        );
    }

    #[test]
    fn test_holiday_on_weekend() {
        // 2024-07-06 is a Saturday
        let holidays = [(DateKey::from(date!(2024 - 07 - 06)), "Picnic Day")]
            .into_iter()
            .collect::<Holidays>();
        let config = Config::new().with_holidays(holidays);
        let cell = grid(2024, Month::July, &config)
            .cell_for(date!(2024 - 07 - 06))
            .cloned()
            .unwrap();
        assert_eq!(cell.kind(), CellKind::Holiday);

        let config = config.with_disabled_weekends(true);
        let cell = grid(2024, Month::July, &config)
            .cell_for(date!(2024 - 07 - 06))
            .cloned()
            .unwrap();
        assert_eq!(
            cell,
            Cell::DisabledHoliday {
                date: date!(2024 - 07 - 06),
                name: String::from("Picnic Day")
            }
        );
        assert!(!cell.is_selectable());
    }

    #[test]
    fn test_holidays_in_other_months_ignored() {
        let config = Config::new().with_holiday(date!(2024 - 11 - 25), "Not this month");
        let g = grid(2024, Month::December, &config);
        assert!(g.cells().all(|c| c.holiday_name().is_none()));
    }

    #[test]
    fn test_january_leading_days_come_from_december() {
        // 2025-01-01 is a Wednesday
        let g = grid(2025, Month::January, &Config::default());
        let leading = g.weeks()[0].cells()[..3]
            .iter()
            .map(Cell::day)
            .collect::<Vec<_>>();
        assert_eq!(leading, [Some(29), Some(30), Some(31)]);
    }
}
