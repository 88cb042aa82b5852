//! Month-by-month navigation state.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{build_month_grid, check_month, month_name, CalendarEvent, EventTable, MonthGrid};
use crate::error::{Result, ValidationError};

/// A (zero-based month, year) position in the calendar.
///
/// `next` and `previous` return a new cursor and own the month wraparound,
/// so the grid builder only ever sees months in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    month: u32,
    year: i32,
}

impl MonthCursor {
    pub fn new(month: u32, year: i32) -> Result<Self, ValidationError> {
        check_month(month)?;
        Ok(Self { month, year })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following month, saturating at December of `i32::MAX`.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 11 && self.year == i32::MAX {
            return self;
        }
        if self.month == 11 {
            Self {
                month: 0,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }

    /// The preceding month, saturating at January of `i32::MIN`.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 0 && self.year == i32::MIN {
            return self;
        }
        if self.month == 0 {
            Self {
                month: 11,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    /// Move by `months`; same result as that many `next`/`previous` calls,
    /// including saturation at December `i32::MAX` and January `i32::MIN`.
    #[must_use]
    pub fn offset(self, months: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(months);
        let min = i64::from(i32::MIN) * 12;
        let max = i64::from(i32::MAX) * 12 + 11;
        let total = total.clamp(min, max);
        Self {
            month: total.rem_euclid(12) as u32,
            year: total.div_euclid(12) as i32,
        }
    }

    pub fn grid(&self, today: NaiveDate, events: &EventTable) -> Result<MonthGrid> {
        build_month_grid(self.month, self.year, today, events)
    }

    pub fn events(&self, events: &EventTable) -> Result<Vec<CalendarEvent>> {
        events.events_for_month(self.month, self.year)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = month_name(self.month).unwrap_or_default();
        write!(f, "{name} {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_december_into_january() {
        let cursor = MonthCursor::new(11, 2026).unwrap().next();
        assert_eq!((cursor.month(), cursor.year()), (0, 2027));
    }

    #[test]
    fn previous_wraps_january_into_december() {
        let cursor = MonthCursor::new(0, 2026).unwrap().previous();
        assert_eq!((cursor.month(), cursor.year()), (11, 2025));
    }

    #[test]
    fn next_then_previous_is_identity() {
        let start = MonthCursor::new(5, 2026).unwrap();
        assert_eq!(start.next().previous(), start);
        assert_eq!(start.previous().next(), start);
    }

    #[test]
    fn offset_matches_repeated_steps() {
        let start = MonthCursor::new(9, 2026).unwrap();
        let mut stepped = start;
        for _ in 0..27 {
            stepped = stepped.next();
        }
        assert_eq!(start.offset(27), stepped);

        let mut back = start;
        for _ in 0..15 {
            back = back.previous();
        }
        assert_eq!(start.offset(-15), back);
        assert_eq!(start.offset(0), start);
    }

    #[test]
    fn saturates_at_the_year_bounds() {
        let last = MonthCursor::new(11, i32::MAX).unwrap();
        assert_eq!(last.next(), last);
        assert_eq!(last.offset(1), last);
        assert_eq!(MonthCursor::new(10, i32::MAX).unwrap().offset(5), last);

        let first = MonthCursor::new(0, i32::MIN).unwrap();
        assert_eq!(first.previous(), first);
        assert_eq!(first.offset(-1), first);
        assert_eq!(first.offset(i32::MIN), first);
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(MonthCursor::new(12, 2026).is_err());
    }

    #[test]
    fn containing_uses_zero_based_month() {
        let cursor = MonthCursor::containing(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!((cursor.month(), cursor.year()), (9, 2026));
        assert_eq!(cursor.to_string(), "October 2026");
    }

    #[test]
    fn grid_and_events_follow_the_cursor() {
        let table = EventTable::default_academic();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let cursor = MonthCursor::containing(today).next();
        let grid = cursor.grid(today, &table).unwrap();
        assert_eq!(grid.title, "November 2026");
        let events = cursor.events(&table).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Thanksgiving");
    }
}
