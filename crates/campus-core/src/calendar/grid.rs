//! Fixed 6x7 month grid with spillover days and event overlay.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::{check_month, CalendarEvent, EventTable};
use crate::error::{Result, ValidationError};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// One square of a month grid.
///
/// Filler cells from the neighbouring months never carry `is_today` or an
/// event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day_number: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<CalendarEvent>,
}

impl DayCell {
    fn filler(day_number: u32) -> Self {
        Self {
            day_number,
            in_current_month: false,
            is_today: false,
            event: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Zero-based month.
    pub month: u32,
    pub year: i32,
    /// Header label, e.g. `April 2026`.
    pub title: String,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Week rows, Sunday first.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    pub fn in_month_days(&self) -> usize {
        self.cells.iter().filter(|cell| cell.in_current_month).count()
    }
}

/// Number of days in a zero-based month.
pub fn days_in_month(month: u32, year: i32) -> Result<u32, ValidationError> {
    check_month(month)?;
    Ok(month_length(month, year))
}

fn month_length(month: u32, year: i32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Build the 42-cell grid for a zero-based `month`.
///
/// `today` marks at most one in-month cell. Months outside `0..=11` are
/// rejected rather than wrapped, as are years chrono cannot represent.
pub fn build_month_grid(
    month: u32,
    year: i32,
    today: NaiveDate,
    events: &EventTable,
) -> Result<MonthGrid> {
    let name = check_month(month)?;
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or_else(|| {
        ValidationError::invalid("year", format!("{year} is outside the supported range"))
    })?;

    let first_weekday = first.weekday().num_days_from_sunday();
    let (prev_month, prev_year) = if month == 0 {
        (11, year - 1)
    } else {
        (month - 1, year)
    };
    let days_in_prev_month = month_length(prev_month, prev_year);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for back in (0..first_weekday).rev() {
        cells.push(DayCell::filler(days_in_prev_month - back));
    }

    for day in 1..=month_length(month, year) {
        let date = first.with_day(day).ok_or_else(|| {
            ValidationError::invalid("year", format!("{year} is outside the supported range"))
        })?;
        cells.push(DayCell {
            day_number: day,
            in_current_month: true,
            is_today: date == today,
            event: events.get(date).cloned(),
        });
    }

    let mut next_day = 1;
    while cells.len() < GRID_CELLS {
        cells.push(DayCell::filler(next_day));
        next_day += 1;
    }

    debug!(month, year, first_weekday, "built month grid");

    Ok(MonthGrid {
        month,
        year,
        title: format!("{name} {year}"),
        cells,
    })
}
