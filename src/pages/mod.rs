//! Terminal rendering of the board's pages.
//!
//! Every renderer returns a `String`; the command handlers print it.

pub mod detail;
pub mod home;
pub mod messages;
pub mod stats;
pub mod static_pages;

pub const APP_TITLE: &str = "ExprimeTonCampus";
