//! Customizable greeting printer.
//!
//! Command-line tokens are parsed into a [`models::greeting::GreetingConfig`],
//! formatted by [`formatter::format_message`] and printed by
//! [`ui::output::run`].

pub mod formatter;
pub mod logging;
pub mod models;
pub mod ui;
