//! Unified application error type.
//! The aggregation and filter functions are total; everything that touches
//! files, configuration or user lookups returns AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / data formats
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import format not supported: {0}")]
    InvalidImportFormat(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate record id: {0}")]
    DuplicateId(u32),

    // ---------------------------
    // Lookup / query errors
    // ---------------------------
    #[error("No message with id {0}")]
    RecordNotFound(u32),

    #[error("Invalid period: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
