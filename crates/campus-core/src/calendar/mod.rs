//! Academic calendar: month grids, event overlay and month navigation.
//!
//! Months are zero-based (0 = January .. 11 = December) throughout this
//! module. Nothing here wraps an out-of-range month; stepping between months
//! is done with [`MonthCursor`].

pub mod event;
pub mod grid;
pub mod navigation;

pub use event::{CalendarEvent, EventKind, EventTable};
pub use grid::{
    build_month_grid, days_in_month, DayCell, MonthGrid, GRID_CELLS, GRID_COLUMNS, GRID_ROWS,
};
pub use navigation::MonthCursor;

use crate::error::ValidationError;

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a zero-based month, or `None` when out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Validate a zero-based month, returning its name.
pub(crate) fn check_month(month: u32) -> Result<&'static str, ValidationError> {
    month_name(month)
        .ok_or_else(|| ValidationError::invalid("month", format!("{month} is outside 0..=11")))
}
