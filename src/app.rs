use crate::help::Help;
use crate::theme::BASE_STYLE;
use crate::view::{Hit, PickerLayout, PickerView};
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use datepicker::{Cell, Click, ClickOutcome, DateKey, DatePicker, Document};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
    DefaultTerminal,
};
use std::io::{self, Write};

/// A terminal page holding a single date picker
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    doc: Document,
    picker: DatePicker,
    state: AppState,
    area: Rect,
}

impl App {
    pub(crate) fn new(doc: Document, picker: DatePicker) -> App {
        App {
            doc,
            picker,
            state: AppState::Picking,
            area: Rect::default(),
        }
    }

    /// Run until the user picks a date or quits, returning the final contents
    /// of the input field, if any
    pub(crate) fn run(mut self, terminal: &mut DefaultTerminal) -> io::Result<Option<String>> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        let value = self
            .doc
            .value(self.picker.config().input_id())
            .filter(|v| !v.is_empty())
            .map(String::from);
        self.picker.dispose(&mut self.doc);
        Ok(value)
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match read()? {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if self.state == AppState::Helping {
                    self.state = AppState::Picking;
                } else {
                    self.click_at(column, row);
                }
            }
            ev => {
                if let Some(KeyEvent {
                    code, modifiers, ..
                }) = ev.as_key_press_event()
                {
                    if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                        self.state = AppState::Quitting;
                    } else if !self.handle_key(code) {
                        self.beep()?;
                    }
                }
                // else: Redraw on resize, and we might as well redraw on other
                // stuff too
            }
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    /// Dispatch a left-click at screen coordinates (`x`, `y`) to the picker
    pub(crate) fn click_at(&mut self, x: u16, y: u16) -> ClickOutcome {
        let click = self.click_for(x, y);
        let outcome = self.picker.handle_click(&click, &mut self.doc);
        log::debug!("click at ({x}, {y}): {outcome:?}");
        if matches!(outcome, ClickOutcome::Selected(_)) {
            self.state = AppState::Quitting;
        }
        outcome
    }

    fn click_for(&self, x: u16, y: u16) -> Click {
        let config = self.picker.config();
        let calendar_id = config.calendar_id();
        let grid = self.picker.grid();
        let layout = PickerLayout::new(self.area, grid.weeks().len());
        match layout.hit(x, y, self.picker.is_open(&self.doc)) {
            Hit::Field => self.doc.click_element(config.input_id()),
            Hit::Prev => self.doc.click_element(&config.prev_button_id()),
            Hit::Next => self.doc.click_element(&config.next_button_id()),
            Hit::Cell { week, col } => grid
                .weeks()
                .get(week)
                .and_then(|w| w.cells().get(col))
                .and_then(Cell::date)
                .and_then(|d| self.doc.click_date(calendar_id, DateKey::from(d)))
                .unwrap_or_else(|| Click::nowhere().within(calendar_id)),
            Hit::Calendar => Click::nowhere().within(calendar_id),
            Hit::Outside => Click::nowhere(),
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = area;
        buf.set_style(area, BASE_STYLE);
        PickerView::new(&self.picker, &self.doc).render(area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}
