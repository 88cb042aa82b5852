//! Academic calendar commands for CLI.

use std::io::IsTerminal;

use campus_core::{CalendarEvent, Config, DayCell, EventKind, MonthCursor, MonthGrid};
use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::Serialize;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// ANSI styling for rendered grids; `None` prints plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    today: &'static str,
}

impl Palette {
    fn for_config(config: &Config) -> Option<Self> {
        if !config.ui.color || !std::io::stdout().is_terminal() {
            return None;
        }
        let today = if config.ui.dark_mode { REVERSE } else { BOLD };
        Some(Self { today })
    }
}

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Show a month grid followed by its events
    Show {
        /// Month number, 1-12 (default: current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Months to move forward (negative moves back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events of a month
    Events {
        /// Month number, 1-12 (default: current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct MonthView<'a> {
    grid: &'a MonthGrid,
    events: &'a [CalendarEvent],
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let table = config.event_table()?;
    let today = Local::now().date_naive();

    match action {
        CalendarAction::Show {
            month,
            year,
            offset,
            json,
        } => {
            let cursor = resolve_cursor(month, year, today)?.offset(offset);
            let grid = cursor.grid(today, &table)?;
            let events = cursor.events(&table)?;
            if json {
                let view = MonthView {
                    grid: &grid,
                    events: &events,
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                let palette = Palette::for_config(&config);
                print!("{}", render_grid(&grid, palette));
                println!();
                print!("{}", render_events(&events));
            }
        }
        CalendarAction::Events { month, year, json } => {
            let cursor = resolve_cursor(month, year, today)?;
            let events = cursor.events(&table)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                println!("{cursor}");
                print!("{}", render_events(&events));
            }
        }
    }
    Ok(())
}

/// Start from today's month, replacing whichever of month/year was given.
/// `month` is 1-based here and zero-based in the core.
fn resolve_cursor(
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<MonthCursor, Box<dyn std::error::Error>> {
    let current = MonthCursor::containing(today);
    let month = month.map_or(current.month(), |m| m.saturating_sub(1));
    let year = year.unwrap_or(current.year());
    Ok(MonthCursor::new(month, year)?)
}

fn event_marker(kind: Option<EventKind>) -> char {
    match kind {
        Some(EventKind::Holiday) => '*',
        Some(EventKind::Exam) => '!',
        Some(EventKind::Event) => '+',
        None => ' ',
    }
}

fn render_cell(cell: &DayCell, palette: Option<Palette>) -> String {
    let marker = event_marker(cell.event.as_ref().map(|e| e.kind));
    let text = if !cell.in_current_month {
        format!("({:>2}) ", cell.day_number)
    } else if cell.is_today {
        format!("[{:>2}]{marker}", cell.day_number)
    } else {
        format!(" {:>2} {marker}", cell.day_number)
    };

    match palette {
        Some(_) if !cell.in_current_month => format!("{DIM}{text}{RESET}"),
        Some(palette) if cell.is_today => format!("{}{text}{RESET}", palette.today),
        _ => text,
    }
}

fn render_grid(grid: &MonthGrid, palette: Option<Palette>) -> String {
    let width = WEEKDAYS.len() * 6 - 1;
    let mut out = format!("{:^width$}\n", grid.title);
    let header: Vec<_> = WEEKDAYS.iter().map(|d| format!(" {d} ")).collect();
    out.push_str(&header.join(" "));
    out.push('\n');
    for row in grid.rows() {
        let cells: Vec<_> = row.iter().map(|c| render_cell(c, palette)).collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out.push_str("[n] today  * holiday  ! exam  + event\n");
    out
}

fn render_events(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return "No events this month\n".to_string();
    }
    events
        .iter()
        .map(|e| format!("{:<7} {} ({})\n", e.short_date(), e.name, e.kind))
        .collect()
}
