mod common;
use common::{IMPORT_CSV, ids, temp_file, temp_path};
use exprimetoncampus::core::seed::sample_records;
use exprimetoncampus::core::{count_by_emotion, count_by_place};
use exprimetoncampus::errors::AppError;
use exprimetoncampus::export::{ExportFormat, export_counts, export_records};
use exprimetoncampus::import::{ImportFormat, read_records};
use std::fs;
use std::path::Path;

#[test]
fn reads_csv_by_extension() {
    let p = temp_file("read_csv_ext", "csv", IMPORT_CSV);
    let recs = read_records(Path::new(&p), None).expect("import csv");
    assert_eq!(ids(&recs), vec![10, 11]);
    assert_eq!(recs[1].emotion.as_str(), "colère");
    assert_eq!(recs[1].emotion.label(), "colère");
}

#[test]
fn explicit_format_overrides_extension() {
    let json = r#"[{"id":1,"place":"Hall","emotion":"joie","text":"","date":"2025-01-01"}]"#;
    let p = temp_file("read_json_txt", "txt", json);
    assert!(matches!(
        read_records(Path::new(&p), None),
        Err(AppError::InvalidImportFormat(_))
    ));
    let recs = read_records(Path::new(&p), Some(ImportFormat::Json)).expect("import json");
    assert_eq!(recs.len(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let p = temp_path("does_not_exist", "csv");
    assert!(matches!(
        read_records(Path::new(&p), None),
        Err(AppError::Io(_))
    ));
}

#[test]
fn records_survive_csv_export_and_import() {
    let out = temp_path("records_roundtrip", "csv");
    export_records(&sample_records(), ExportFormat::Csv, Path::new(&out)).expect("export");

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("id,date,place,emotion,emotion_label,text"));
    assert!(content.contains("Bibliothèque centrale"));

    let back = read_records(Path::new(&out), None).expect("re-import");
    assert_eq!(back, sample_records());
}

#[test]
fn records_survive_json_export_and_import() {
    let out = temp_path("records_roundtrip", "json");
    export_records(&sample_records(), ExportFormat::Json, Path::new(&out)).expect("export");
    let back = read_records(Path::new(&out), None).expect("re-import");
    assert_eq!(back, sample_records());
}

#[test]
fn counts_export_as_name_value() {
    let out = temp_path("place_counts", "csv");
    export_counts(&count_by_place(&sample_records()), ExportFormat::Csv, Path::new(&out))
        .expect("export");
    let content = fs::read_to_string(&out).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "name,value");
    assert_eq!(lines[1], "Bibliothèque centrale,2");
    assert_eq!(lines.len(), 5);

    let out = temp_path("emotion_counts", "json");
    export_counts(&count_by_emotion(&sample_records()), ExportFormat::Json, Path::new(&out))
        .expect("export");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    assert_eq!(value[2]["name"], "joie");
    assert_eq!(value[2]["value"], 2);
}

#[test]
fn empty_csv_exports_write_headers() {
    let out = temp_path("empty_records", "csv");
    export_records(&[], ExportFormat::Csv, Path::new(&out)).expect("export");
    assert_eq!(
        fs::read_to_string(&out).expect("read export").trim_end(),
        "id,date,place,emotion,emotion_label,text"
    );

    let out = temp_path("empty_counts", "csv");
    export_counts(&[], ExportFormat::Csv, Path::new(&out)).expect("export");
    assert_eq!(fs::read_to_string(&out).expect("read export").trim_end(), "name,value");

    let out = temp_path("empty_counts", "json");
    export_counts(&[], ExportFormat::Json, Path::new(&out)).expect("export");
    assert_eq!(fs::read_to_string(&out).expect("read export"), "[]");
}
