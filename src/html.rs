use crate::config::Config;
use crate::date::DateKey;
use crate::grid::{Cell, MonthGrid};
use std::fmt::{self, Write};

static WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render the complete contents of the calendar container: the navigation
/// header followed by the month table.
pub fn render_calendar(grid: &MonthGrid, config: &Config) -> String {
    let mut html = String::new();
    // Writing to a String cannot fail
    let _ = write_calendar(&mut html, grid, config);
    html
}

fn write_calendar<W: Write>(w: &mut W, grid: &MonthGrid, config: &Config) -> fmt::Result {
    let view = grid.view();
    write!(
        w,
        r#"<div class="calendar-header"><button id="{}" class="prevMonthButton">&lt;</button>"#,
        Escaped(&config.prev_button_id())
    )?;
    write!(
        w,
        r#"<div class="month-year">{} {}</div>"#,
        Escaped(config.month_names().name(view.month())),
        view.year()
    )?;
    write!(
        w,
        r#"<button id="{}" class="nextMonthButton">&gt;</button></div>"#,
        Escaped(&config.next_button_id())
    )?;
    w.write_str("<table><tr>")?;
    for wd in WEEKDAY_HEADERS {
        write!(w, "<th>{wd}</th>")?;
    }
    w.write_str("</tr>")?;
    for week in grid.weeks() {
        w.write_str("<tr>")?;
        for cell in week.cells() {
            write_cell(w, cell)?;
        }
        w.write_str("</tr>")?;
    }
    w.write_str("</table>")
}

fn write_cell<W: Write>(w: &mut W, cell: &Cell) -> fmt::Result {
    match cell {
        Cell::Filler { day: Some(day) } => write!(w, r#"<td class="disabled">{day}</td>"#),
        Cell::Filler { day: None } => w.write_str(r#"<td class="disabled"></td>"#),
        Cell::Selectable { date } => write!(
            w,
            r#"<td data-date="{}">{}</td>"#,
            DateKey::from(*date),
            date.day()
        ),
        Cell::DisabledWeekend { date } => {
            write!(w, r#"<td class="disabled weekend">{}</td>"#, date.day())
        }
        Cell::Holiday { date, name } => write_holiday(w, "public-holiday", date.day(), name),
        Cell::DisabledHoliday { date, name } => {
            write_holiday(w, "disabled weekend public-holiday", date.day(), name)
        }
    }
}

fn write_holiday<W: Write>(w: &mut W, classes: &str, day: u8, name: &str) -> fmt::Result {
    let name = Escaped(name);
    write!(
        w,
        r#"<td class="{classes}" title="{name}">{day}<span class="holiday-name">{name}</span></td>"#
    )
}

/// Displays a string with HTML-special characters replaced by entities
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::ViewMonth;
    use time::macros::date;
    use time::Month;

    fn render(year: i32, month: Month, config: &Config) -> String {
        let grid = MonthGrid::generate(ViewMonth::new(year, month).unwrap(), config);
        render_calendar(&grid, config)
    }

    #[test]
    fn test_render_february_2015() {
        let html = render(2015, Month::February, &Config::default());
        let mut expected = String::from(concat!(
            r#"<div class="calendar-header">"#,
            r#"<button id="prevMonth_datepickerInput" class="prevMonthButton">&lt;</button>"#,
            r#"<div class="month-year">February 2015</div>"#,
            r#"<button id="nextMonth_datepickerInput" class="nextMonthButton">&gt;</button>"#,
            "</div>",
            "<table><tr><th>Sun</th><th>Mon</th><th>Tue</th><th>Wed</th><th>Thu</th><th>Fri</th><th>Sat</th></tr>",
        ));
        for week in 0..4 {
            expected.push_str("<tr>");
            for wd in 1..=7 {
                let day = week * 7 + wd;
                expected.push_str(&format!(r#"<td data-date="2015-2-{day}">{day}</td>"#));
            }
            expected.push_str("</tr>");
        }
        expected.push_str("</table>");
        assert_eq!(html, expected);
    }

    #[test]
    fn test_render_fillers() {
        let html = render(2024, Month::March, &Config::default());
        assert!(html.contains(concat!(
            "<tr>",
            r#"<td class="disabled">25</td>"#,
            r#"<td class="disabled">26</td>"#,
            r#"<td class="disabled">27</td>"#,
            r#"<td class="disabled">28</td>"#,
            r#"<td class="disabled">29</td>"#,
            r#"<td data-date="2024-3-1">1</td>"#,
            r#"<td data-date="2024-3-2">2</td>"#,
            "</tr>",
        )));
        assert!(html.ends_with(concat!(
            "<tr>",
            r#"<td data-date="2024-3-31">31</td>"#,
            r#"<td class="disabled"></td>"#,
            r#"<td class="disabled"></td>"#,
            r#"<td class="disabled"></td>"#,
            r#"<td class="disabled"></td>"#,
            r#"<td class="disabled"></td>"#,
            r#"<td class="disabled"></td>"#,
            "</tr></table>",
        )));
        assert_eq!(html.matches("<tr>").count(), 7);
    }

    #[test]
    fn test_render_disabled_weekends() {
        let config = Config::new().with_disabled_weekends(true);
        let html = render(2024, Month::March, &config);
        assert!(html.contains(concat!(
            "<tr>",
            r#"<td class="disabled weekend">3</td>"#,
            r#"<td data-date="2024-3-4">4</td>"#,
            r#"<td data-date="2024-3-5">5</td>"#,
            r#"<td data-date="2024-3-6">6</td>"#,
            r#"<td data-date="2024-3-7">7</td>"#,
            r#"<td data-date="2024-3-8">8</td>"#,
            r#"<td class="disabled weekend">9</td>"#,
            "</tr>",
        )));
        assert!(!html.contains(r#"data-date="2024-3-9""#));
    }

    #[test]
    fn test_render_holidays() {
        let config = Config::new()
            .with_disabled_weekends(true)
            .with_holiday(date!(2024 - 12 - 25), "Christmas Day")
            .with_holiday(date!(2024 - 12 - 28), "Boxing <Day> & \"more\"");
        let html = render(2024, Month::December, &config);
        assert!(html.contains(concat!(
            r#"<td class="public-holiday" title="Christmas Day">25"#,
            r#"<span class="holiday-name">Christmas Day</span></td>"#,
        )));
        assert!(html.contains(concat!(
            r#"<td class="disabled weekend public-holiday" title="Boxing &lt;Day&gt; &amp; &quot;more&quot;">28"#,
            r#"<span class="holiday-name">Boxing &lt;Day&gt; &amp; &quot;more&quot;</span></td>"#,
        )));
        assert!(!html.contains(r#"data-date="2024-12-25""#));
    }

    #[test]
    fn test_render_custom_ids_and_names() {
        let config = Config::new()
            .with_input_id("departure")
            .with_month_names([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ])
            .unwrap();
        let html = render(2024, Month::July, &config);
        assert!(html.contains(r#"<button id="prevMonth_departure" class="prevMonthButton">"#));
        assert!(html.contains(r#"<button id="nextMonth_departure" class="nextMonthButton">"#));
        assert!(html.contains(r#"<div class="month-year">Jul 2024</div>"#));
    }

    #[test]
    fn test_escaped() {
        assert_eq!(
            Escaped(r#"<a href="x">Tom & Jerry's</a>"#).to_string(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(Escaped("plain").to_string(), "plain");
    }
}
