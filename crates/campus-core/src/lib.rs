//! # Campus Assistant Core Library
//!
//! This library provides the logic behind the Campus Assistant: the academic
//! calendar and the keyword-matched chat. All operations are plain functions
//! over immutable tables, callable from the CLI or any other front end.
//!
//! ## Architecture
//!
//! - **Calendar**: 42-cell month grids with spillover days, a "today" marker
//!   and an event overlay, plus explicit month navigation
//! - **Chat**: first-match-wins substring matching over an ordered topic table
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`build_month_grid`]: Month grid builder
//! - [`EventTable`]: Date-keyed academic calendar
//! - [`MonthCursor`]: Month navigation state
//! - [`Responder`]: Keyword responder
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod chat;
pub mod error;
pub mod storage;

pub use calendar::{
    build_month_grid, days_in_month, CalendarEvent, DayCell, EventKind, EventTable, MonthCursor,
    MonthGrid,
};
pub use chat::{Reply, Responder, Topic, TopicTable, TypingDelay};
pub use error::{ConfigError, CoreError, ValidationError};
pub use storage::Config;
