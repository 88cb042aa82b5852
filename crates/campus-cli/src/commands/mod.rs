pub mod calendar;
pub mod chat;
pub mod config;
