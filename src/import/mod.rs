//! Bulk-load of feedback records from CSV or JSON files.

use crate::errors::{AppError, AppResult};
use crate::models::FeedbackRecord;
use crate::utils::path::extension_of;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_deref() {
            Some("csv") => Ok(ImportFormat::Csv),
            Some("json") => Ok(ImportFormat::Json),
            Some(other) => Err(AppError::InvalidImportFormat(other.to_string())),
            None => Err(AppError::InvalidImportFormat(path.display().to_string())),
        }
    }
}

/// Read every record of `path`. The format is inferred when `format` is `None`.
pub fn read_records(path: &Path, format: Option<ImportFormat>) -> AppResult<Vec<FeedbackRecord>> {
    let format = match format {
        Some(f) => f,
        None => ImportFormat::from_path(path)?,
    };
    let file = BufReader::new(File::open(path)?);

    let records = match format {
        ImportFormat::Csv => parse_csv(file)?,
        ImportFormat::Json => parse_json(file)?,
    };

    validate(&records)?;
    Ok(records)
}

/// CSV with an `id,place,emotion,text,date` header. Extra columns are ignored.
pub fn parse_csv<R: Read>(reader: R) -> AppResult<Vec<FeedbackRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

/// A top-level JSON array of records.
pub fn parse_json<R: Read>(reader: R) -> AppResult<Vec<FeedbackRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

fn validate(records: &[FeedbackRecord]) -> AppResult<()> {
    match records.iter().find(|r| r.place.trim().is_empty()) {
        Some(r) => Err(AppError::InvalidRecord(format!("record {} has an empty place", r.id))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_keep_file_order() {
        let data = "id,place,emotion,text,date\n\
                    7,Hall B,joie,\"Super, vraiment\",2025-04-01\n\
                    8,Parking,colère,Plein à 8h,2025-04-02\n";
        let recs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, 7);
        assert_eq!(recs[0].text, "Super, vraiment");
        assert_eq!(recs[1].emotion.as_str(), "colère");
    }

    #[test]
    fn csv_ignores_extra_columns() {
        let data = "id,date,place,emotion,emotion_label,text\n1,2025-01-01,Hall,joie,Joie,ok\n";
        let recs = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(recs[0].place, "Hall");
    }

    #[test]
    fn json_array() {
        let data = r#"[{"id":3,"place":"Jardin nord","emotion":"calme","text":"","date":"2025-05-01"}]"#;
        let recs = parse_json(data.as_bytes()).unwrap();
        assert_eq!(recs[0].place, "Jardin nord");
    }

    #[test]
    fn bad_id_is_an_error() {
        let data = "id,place,emotion,text,date\nx,Hall,joie,,2025-01-01\n";
        assert!(parse_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn empty_place_is_rejected() {
        let recs = vec![FeedbackRecord::new(1, " ", "joie", "", "2025-01-01")];
        assert!(matches!(validate(&recs), Err(AppError::InvalidRecord(_))));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ImportFormat::from_path(Path::new("a.JSON")).unwrap(), ImportFormat::Json);
        assert!(matches!(
            ImportFormat::from_path(Path::new("a.xlsx")),
            Err(AppError::InvalidImportFormat(_))
        ));
    }
}
