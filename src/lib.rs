//! Terminal widget for picking a country, currency and language.
//!
//! A trigger button shows the committed selection. Activating it opens a
//! dialog whose edits go to a draft; only Save copies the draft back.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod settings;
pub mod ui;
