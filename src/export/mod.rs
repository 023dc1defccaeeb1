// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use fs_utils::ensure_writable;
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::models::{CountEntry, FeedbackRecord};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// What gets written: the message list or one of the two aggregations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Records,
    Places,
    Emotions,
}

/// Write records (one row per message, with the emotion label).
pub fn export_records(records: &[FeedbackRecord], format: ExportFormat, path: &Path) -> AppResult<()> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
    write(&rows, RecordExport::HEADERS, format, path)
}

/// Write a `name,value` count table.
pub fn export_counts(counts: &[CountEntry], format: ExportFormat, path: &Path) -> AppResult<()> {
    write(counts, &["name", "value"], format, path)
}

fn write<T: serde::Serialize>(
    items: &[T],
    headers: &[&str],
    format: ExportFormat,
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => json_csv::export_csv(items, headers, path),
        ExportFormat::Json => json_csv::export_json(items, path),
    }
}
