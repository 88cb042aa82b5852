//! Static, date-keyed academic calendar entries.
//!
//! Tables are read from TOML of the form:
//!
//! ```toml
//! [events]
//! "2026-04-01" = { kind = "holiday", name = "Spring Break" }
//! ```
//!
//! Keys must be canonical ISO dates (`YYYY-MM-DD`). The default table is
//! embedded at compile time.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::check_month;
use crate::error::{Result, ValidationError};

const DEFAULT_ACADEMIC_CALENDAR: &str = include_str!("../../assets/academic_calendar.toml");

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Category of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Holiday,
    Exam,
    Event,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Holiday => "holiday",
            EventKind::Exam => "exam",
            EventKind::Event => "event",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub kind: EventKind,
    pub name: String,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, kind: EventKind, name: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            name: name.into(),
        }
    }

    /// ISO date key, e.g. `2026-04-01`.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_KEY_FORMAT).to_string()
    }

    /// Listing label, e.g. `Apr 1`.
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

#[derive(Debug, Deserialize)]
struct EventFile {
    #[serde(default)]
    events: BTreeMap<String, EventEntry>,
}

#[derive(Debug, Deserialize)]
struct EventEntry {
    kind: EventKind,
    name: String,
}

/// Read-only lookup of calendar entries by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    events: BTreeMap<NaiveDate, CalendarEvent>,
}

impl EventTable {
    /// Build a table from events, rejecting two entries on the same date.
    pub fn from_events<I>(events: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = CalendarEvent>,
    {
        let mut table = BTreeMap::new();
        for event in events {
            let key = event.date_key();
            if table.insert(event.date, event).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "event date".into(),
                    value: key,
                });
            }
        }
        Ok(Self { events: table })
    }

    /// The embedded 2026 academic calendar.
    pub fn default_academic() -> Self {
        Self::from_toml_str(DEFAULT_ACADEMIC_CALENDAR)
            .expect("embedded academic calendar must parse")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: EventFile = toml::from_str(content)?;
        let mut events = Vec::with_capacity(file.events.len());
        for (key, entry) in file.events {
            let date = parse_date_key(&key)?;
            events.push(CalendarEvent::new(date, entry.kind, entry.name));
        }
        let table = Self::from_events(events)?;
        debug!(entries = table.len(), "loaded event table");
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading event table");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&CalendarEvent> {
        self.events.get(&date)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.values()
    }

    /// Entries falling in the given zero-based month, sorted by date.
    pub fn events_for_month(&self, month: u32, year: i32) -> Result<Vec<CalendarEvent>> {
        check_month(month)?;
        // BTreeMap iteration is already ascending by full date.
        Ok(self
            .events
            .values()
            .filter(|event| event.date.year() == year && event.date.month0() == month)
            .cloned()
            .collect())
    }
}

fn parse_date_key(key: &str) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).map_err(|err| {
        ValidationError::invalid("event date", format!("'{key}' is not a date: {err}"))
    })?;
    // "2026-4-1" parses too; only the zero-padded spelling is a valid key.
    if date.format(DATE_KEY_FORMAT).to_string() != key {
        return Err(ValidationError::invalid(
            "event date",
            format!("'{key}' is not in YYYY-MM-DD form"),
        ));
    }
    Ok(date)
}
