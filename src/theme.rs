use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const INPUT_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const BUTTON_STYLE: Style = BASE_STYLE.fg(Color::LightCyan).add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) mod cells {
    use super::*;

    pub(crate) const SELECTABLE_STYLE: Style = BASE_STYLE;

    pub(crate) const FILLER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const DISABLED_WEEKEND_STYLE: Style = BASE_STYLE
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT);

    pub(crate) const HOLIDAY_STYLE: Style = BASE_STYLE
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    pub(crate) const DISABLED_HOLIDAY_STYLE: Style = BASE_STYLE
        .fg(Color::Yellow)
        .add_modifier(Modifier::CROSSED_OUT);
}
