use crate::config::{Config, NEXT_BUTTON_PREFIX, PREV_BUTTON_PREFIX};
use crate::date::ViewMonth;
use crate::error::OutOfTimeError;
use crate::grid::{Cell, MonthGrid};
use crate::html::render_calendar;
use crate::surface::{Click, ListenerId, Surface};
use time::Date;

/// Class toggled on the calendar container to show or hide it
pub const VISIBLE_CLASS: &str = "visible";

/// A date picker bound to an input element and a calendar container on some
/// [`Surface`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatePicker {
    config: Config,
    view: ViewMonth,
    listener: Option<ListenerId>,
}

impl DatePicker {
    /// Bind a picker to the elements named in `config`, initially showing the
    /// month containing `today`.
    ///
    /// If either element is missing from `surface`, the failure is logged
    /// and the returned picker is inert: it never renders and ignores all
    /// clicks.
    pub fn attach<S: Surface + ?Sized>(config: Config, today: Date, surface: &mut S) -> DatePicker {
        let mut picker = DatePicker {
            config,
            view: ViewMonth::containing(today),
            listener: None,
        };
        if surface.has_element(picker.config.input_id())
            && surface.has_element(picker.config.calendar_id())
        {
            picker.render(surface);
            picker.listener = Some(surface.listen_for_clicks());
        } else {
            log::error!(
                "datepicker initialization failed: input {:?} or calendar {:?} element not found",
                picker.config.input_id(),
                picker.config.calendar_id()
            );
        }
        picker
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    /// Whether the picker is bound to its elements and reacting to clicks
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// The grid for the currently displayed month
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::generate(self.view, &self.config)
    }

    /// Whether the calendar container is currently shown
    pub fn is_open<S: Surface + ?Sized>(&self, surface: &S) -> bool {
        surface.has_class(self.config.calendar_id(), VISIBLE_CLASS)
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        log::debug!("rendering {} into {:?}", self.view, self.config.calendar_id());
        let markup = render_calendar(&self.grid(), &self.config);
        surface.set_markup(self.config.calendar_id(), markup);
    }

    /// Show the previous month.  Whether the calendar is open is unchanged.
    pub fn previous_month<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<ViewMonth, OutOfTimeError> {
        let view = self.view.previous()?;
        self.show(view, surface);
        Ok(view)
    }

    /// Show the next month.  Whether the calendar is open is unchanged.
    pub fn next_month<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<ViewMonth, OutOfTimeError> {
        let view = self.view.next()?;
        self.show(view, surface);
        Ok(view)
    }

    fn show<S: Surface + ?Sized>(&mut self, view: ViewMonth, surface: &mut S) {
        self.view = view;
        if self.is_active() {
            self.render(surface);
        }
    }

    /// Write the formatted `date` into the input and close the calendar
    pub fn select<S: Surface + ?Sized>(&self, date: Date, surface: &mut S) -> String {
        let text = self
            .config
            .date_format()
            .format(date, self.config.month_names());
        log::debug!("selected {date}; setting {:?} to {text:?}", self.config.input_id());
        surface.set_value(self.config.input_id(), text.clone());
        surface.set_class(self.config.calendar_id(), VISIBLE_CLASS, false);
        text
    }

    /// React to a click anywhere on the surface
    pub fn handle_click<S: Surface + ?Sized>(
        &mut self,
        click: &Click,
        surface: &mut S,
    ) -> ClickOutcome {
        if !self.is_active() {
            return ClickOutcome::Ignored;
        }
        let calendar_id = self.config.calendar_id().to_owned();
        if click.is_inside(self.config.input_id()) {
            let visible = surface.toggle_class(&calendar_id, VISIBLE_CLASS);
            return ClickOutcome::Toggled { visible };
        }
        let target = click.target();
        if target == Some(self.config.prev_button_id().as_str()) {
            let r = self.previous_month(surface);
            return self.navigated(r);
        }
        if target == Some(self.config.next_button_id().as_str()) {
            let r = self.next_month(surface);
            return self.navigated(r);
        }
        if click.is_inside(&calendar_id) {
            let Some(key) = click.date() else {
                return ClickOutcome::Ignored;
            };
            // Only pickable cells of the displayed month carry a date, but
            // the host may hand us anything.
            return match key
                .to_date()
                .filter(|&d| self.grid().cell_for(d).is_some_and(Cell::is_selectable))
            {
                Some(date) => ClickOutcome::Selected(self.select(date, surface)),
                None => ClickOutcome::Ignored,
            };
        }
        if click.target_starts_with(PREV_BUTTON_PREFIX)
            || click.target_starts_with(NEXT_BUTTON_PREFIX)
        {
            return ClickOutcome::Ignored;
        }
        surface.set_class(&calendar_id, VISIBLE_CLASS, false);
        ClickOutcome::Dismissed
    }

    fn navigated(&self, r: Result<ViewMonth, OutOfTimeError>) -> ClickOutcome {
        match r {
            Ok(view) => ClickOutcome::Navigated(view),
            Err(e) => {
                log::warn!("cannot navigate away from {}: {e}", self.view);
                ClickOutcome::OutOfTime
            }
        }
    }

    /// Stop listening for clicks.  The rendered markup is left in place.
    pub fn dispose<S: Surface + ?Sized>(mut self, surface: &mut S) {
        if let Some(listener) = self.listener.take() {
            log::debug!("releasing click listener {listener:?}");
            surface.release_listener(listener);
        }
    }
}

/// What a picker did in response to a click
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClickOutcome {
    /// The click was not for this picker, or the picker is inert
    Ignored,
    /// The input was clicked and the calendar shown or hidden
    Toggled { visible: bool },
    /// A navigation button was clicked and the given month is now shown
    Navigated(ViewMonth),
    /// A navigation button was clicked but the calendar cannot go any further
    OutOfTime,
    /// A date was picked and the given text written into the input
    Selected(String),
    /// The click was outside the picker, so the calendar was hidden
    Dismissed,
}
