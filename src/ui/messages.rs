//! Colored, icon-prefixed console messages.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
    Note,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info | Level::Note => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    match level {
        Level::Error | Level::Note => eprintln!("{color}{BOLD}{icon} {RESET}{msg}"),
        _ => println!("{color}{BOLD}{icon} {RESET}{msg}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Info line on stderr, for reports that must not mix with page output.
pub fn note<T: fmt::Display>(msg: T) {
    emit(Level::Note, msg);
}

/// Page title banner.
pub fn header<T: fmt::Display>(msg: T) -> String {
    format!("\x1b[35m{BOLD}══════ {msg} ══════{RESET}\n")
}
