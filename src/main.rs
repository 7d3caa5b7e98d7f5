mod app;
mod help;
mod theme;
mod view;
use crate::app::App;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use datepicker::{render_calendar, Config, DatePicker, Document, MonthGrid, ViewMonth};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        html: bool,
        config: Config,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut html = false;
        let mut config = Config::new();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('w') | Arg::Long("disable-weekends") => {
                    config = config.with_disabled_weekends(true);
                }
                Arg::Short('H') | Arg::Long("holiday") => {
                    let value = parser.value()?.string()?;
                    match parse_holiday(&value) {
                        Ok((d, name)) => config = config.with_holiday(d, name),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Short('f') | Arg::Long("format") => {
                    config = config.with_date_format(parser.value()?.string()?);
                }
                Arg::Short('m') | Arg::Long("months") => {
                    let value = parser.value()?.string()?;
                    config = match config.with_month_names(value.split(',').map(str::trim)) {
                        Ok(c) => c,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    };
                }
                Arg::Long("html") => html = true,
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, html, config })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, html, config } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let start = date.unwrap_or(today);
                if html {
                    let grid = MonthGrid::generate(ViewMonth::containing(start), &config);
                    println!("{}", render_calendar(&grid, &config));
                    return Ok(());
                }
                let value = with_terminal(|terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut doc = Document::new()
                        .with_element(config.input_id())
                        .with_element(config.calendar_id());
                    let picker = DatePicker::attach(config, start, &mut doc);
                    App::new(doc, picker)
                        .run(terminal)
                        .context("failed to run date picker")
                })?;
                if let Some(value) = value {
                    println!("{value}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepicker [options] [YYYY-MM-DD]");
                println!();
                println!("Pick a date with the mouse from a month calendar in the terminal");
                println!();
                println!("Options:");
                println!("  -w, --disable-weekends   Make Saturdays and Sundays unselectable");
                println!("  -H, --holiday DATE=NAME  Mark DATE (YYYY-MM-DD) as a public holiday;");
                println!("                           may be given more than once");
                println!("  -f, --format TEMPLATE    Output template using MM, DD, YYYY, and");
                println!("                           selectedMonth");
                println!("  -m, --months LIST        Twelve comma-separated month names");
                println!("      --html               Print the calendar markup for the month and");
                println!("                           exit");
                println!("  -h, --help               Display this help message and exit");
                println!("  -V, --version            Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[derive(Debug, Error)]
enum HolidayArgError {
    #[error("expected DATE=NAME")]
    MissingName,
    #[error("invalid holiday date")]
    Date(#[from] time::error::Parse),
}

fn parse_holiday(s: &str) -> Result<(Date, String), HolidayArgError> {
    let (date, name) = s.split_once('=').ok_or(HolidayArgError::MissingName)?;
    if name.is_empty() {
        return Err(HolidayArgError::MissingName);
    }
    Ok((Date::parse(date, &YMD_FMT)?, name.to_owned()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut DefaultTerminal) -> anyhow::Result<T>,
{
    let (r, released) = with_logging_paused(|| {
        let mut terminal = ratatui::init();
        let r = execute!(io::stdout(), EnableMouseCapture)
            .context("failed to enable mouse capture")
            .and_then(|()| func(&mut terminal));
        let released = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        (r, released)
    });
    if let Err(e) = released {
        log::warn!("failed to disable mouse capture: {e}");
    }
    r
}

// Log records written to stderr would draw over the alternate screen, so
// nothing is logged while `func` runs.
fn with_logging_paused<F: FnOnce() -> T, T>(func: F) -> T {
    let level = log::max_level();
    log::set_max_level(log::LevelFilter::Off);
    let r = func();
    log::set_max_level(level);
    r
}
