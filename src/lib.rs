//! Full-screen terminal dashboard showing live weather for one US ZIP code.
//!
//! Polls OpenWeather once a minute, renders color-coded current conditions
//! on a 500ms tick, and optionally appends readings to a log file on a
//! fixed interval.

pub mod app;
pub mod cli;
pub mod config;
pub mod logger;
pub mod ui;
pub mod units;
pub mod weather;
