use crate::theme::{
    cells::{
        DISABLED_HOLIDAY_STYLE, DISABLED_WEEKEND_STYLE, FILLER_STYLE, HOLIDAY_STYLE,
        SELECTABLE_STYLE,
    },
    BASE_STYLE, BUTTON_STYLE, INPUT_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use datepicker::{Cell, DatePicker, Document, MonthGrid};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Widget},
};

static WEEKDAY_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat ";

const INPUT_LABEL: &str = "Date: ";

const INPUT_LABEL_WIDTH: u16 = 6;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the calendar's grid, not counting its border
const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Width of the whole picker, border included
const TOTAL_WIDTH: u16 = GRID_WIDTH + 2;

/// Width of the clickable input field, brackets included
const FIELD_WIDTH: u16 = TOTAL_WIDTH - INPUT_LABEL_WIDTH;

/// Width of each navigation button
const BUTTON_WIDTH: u16 = 3;

/// Lines inside the calendar's border above the first week: the navigation
/// header and the weekday names
const HEADER_LINES: u16 = 2;

/// Where each part of the picker lands on screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PickerLayout {
    field: Rect,
    calendar: Rect,
    prev: Rect,
    next: Rect,
    title: Rect,
    weekdays: Rect,
    weeks: Rect,
}

impl PickerLayout {
    pub(crate) fn new(area: Rect, week_qty: usize) -> PickerLayout {
        let [column] = Layout::horizontal([TOTAL_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let week_lines = u16::try_from(week_qty).unwrap_or(u16::MAX);
        let field = Rect {
            x: column.x.saturating_add(INPUT_LABEL_WIDTH),
            width: FIELD_WIDTH,
            height: 1,
            ..column
        };
        let calendar = Rect {
            y: column.y.saturating_add(1),
            height: week_lines.saturating_add(HEADER_LINES + 2),
            ..column
        };
        let inner = calendar.inner(Margin::new(1, 1));
        let header = Rect { height: 1, ..inner };
        let prev = Rect {
            width: BUTTON_WIDTH,
            ..header
        };
        let next = Rect {
            x: header.right().saturating_sub(BUTTON_WIDTH),
            width: BUTTON_WIDTH,
            ..header
        };
        let title = Rect {
            x: prev.right(),
            width: header.width.saturating_sub(2 * BUTTON_WIDTH),
            ..header
        };
        let weekdays = Rect {
            y: header.y.saturating_add(1),
            ..header
        };
        let weeks = Rect {
            y: weekdays.y.saturating_add(1),
            height: week_lines,
            ..inner
        };
        PickerLayout {
            field,
            calendar,
            prev,
            next,
            title,
            weekdays,
            weeks,
        }
    }

    /// Region of the calendar cell in week `week` and column `col`
    fn cell(&self, week: u16, col: u16) -> Rect {
        Rect {
            x: self.weeks.x.saturating_add(col * DAY_WIDTH),
            y: self.weeks.y.saturating_add(week),
            width: DAY_WIDTH,
            height: 1,
        }
    }

    /// What lies at column `x` and row `y`, given whether the calendar is
    /// showing
    pub(crate) fn hit(&self, x: u16, y: u16, open: bool) -> Hit {
        let inside = |r: Rect| r.x <= x && x < r.right() && r.y <= y && y < r.bottom();
        if inside(self.field) {
            Hit::Field
        } else if !open || !inside(self.calendar) {
            Hit::Outside
        } else if inside(self.prev) {
            Hit::Prev
        } else if inside(self.next) {
            Hit::Next
        } else if inside(self.weeks) {
            Hit::Cell {
                week: usize::from(y - self.weeks.y),
                col: usize::from((x - self.weeks.x) / DAY_WIDTH),
            }
        } else {
            Hit::Calendar
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Hit {
    Field,
    Prev,
    Next,
    Cell { week: usize, col: usize },
    /// Somewhere else within the calendar's border
    Calendar,
    Outside,
}

/// Draws a picker the way its host document currently shows it
#[derive(Clone, Copy, Debug)]
pub(crate) struct PickerView<'a> {
    picker: &'a DatePicker,
    doc: &'a Document,
}

impl<'a> PickerView<'a> {
    pub(crate) fn new(picker: &'a DatePicker, doc: &'a Document) -> PickerView<'a> {
        PickerView { picker, doc }
    }
}

impl Widget for PickerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let config = self.picker.config();
        let grid = self.picker.grid();
        let layout = PickerLayout::new(area, grid.weeks().len());
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.print(
            layout.field.x.saturating_sub(INPUT_LABEL_WIDTH),
            layout.field.y,
            INPUT_LABEL,
            BASE_STYLE,
        );
        let value = self.doc.value(config.input_id()).unwrap_or_default();
        let inner_width = usize::from(FIELD_WIDTH - 2);
        let shown = value.chars().take(inner_width).collect::<String>();
        canvas.print(
            layout.field.x,
            layout.field.y,
            format!("[{shown:<inner_width$}]"),
            INPUT_STYLE,
        );
        if !self.picker.is_open(self.doc) {
            return;
        }
        canvas.draw_calendar(&layout, &grid, self.picker);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_calendar(&mut self, layout: &PickerLayout, grid: &MonthGrid, picker: &DatePicker) {
        let calendar = layout.calendar.intersection(self.area);
        Block::bordered()
            .border_style(BASE_STYLE)
            .style(BASE_STYLE)
            .render(calendar, self.buf);
        self.print(layout.prev.x, layout.prev.y, " < ", BUTTON_STYLE);
        self.print(layout.next.x, layout.next.y, " > ", BUTTON_STYLE);
        let view = grid.view();
        let title = format!(
            "{} {}",
            picker.config().month_names().name(view.month()),
            view.year()
        );
        let width = usize::from(layout.title.width);
        self.print(
            layout.title.x,
            layout.title.y,
            format!("{title:^width$}"),
            TITLE_STYLE,
        );
        self.print(
            layout.weekdays.x,
            layout.weekdays.y,
            WEEKDAY_HEADER,
            WEEKDAY_STYLE,
        );
        for (i, week) in std::iter::zip(0u16.., grid.weeks()) {
            for (j, cell) in std::iter::zip(0u16.., week.cells()) {
                let r = layout.cell(i, j);
                let (text, style) = show_cell(cell);
                self.print(r.x, r.y, text, style);
            }
        }
        // Holiday names go beneath the calendar in place of tooltips
        let mut y = layout.calendar.bottom();
        for cell in grid.cells() {
            if let (Some(day), Some(name)) = (cell.day(), cell.holiday_name()) {
                let style = match cell {
                    Cell::DisabledHoliday { .. } => DISABLED_HOLIDAY_STYLE,
                    _ => HOLIDAY_STYLE,
                };
                self.print(layout.calendar.x, y, format!("{day:>3} {name}"), style);
                y = y.saturating_add(1);
            }
        }
    }

    // Prints `s` starting at absolute coordinates (`x`, `y`), clipped to the
    // canvas
    fn print<S: AsRef<str>>(&mut self, x: u16, y: u16, s: S, style: Style) {
        if self.area.x <= x && x < self.area.right() && self.area.y <= y && y < self.area.bottom()
        {
            let max_width = usize::from(self.area.right() - x);
            self.buf.set_stringn(x, y, s, max_width, style);
        }
    }
}

fn show_cell(cell: &Cell) -> (String, Style) {
    let text = match cell.day() {
        Some(day) => format!("{day:>3} "),
        None => String::from("    "),
    };
    let style = match cell {
        Cell::Filler { .. } => FILLER_STYLE,
        Cell::Selectable { .. } => SELECTABLE_STYLE,
        Cell::DisabledWeekend { .. } => DISABLED_WEEKEND_STYLE,
        Cell::Holiday { .. } => HOLIDAY_STYLE,
        Cell::DisabledHoliday { .. } => DISABLED_HOLIDAY_STYLE,
    };
    (text, style)
}
