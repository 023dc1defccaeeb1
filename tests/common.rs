#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use exprimetoncampus::models::FeedbackRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn etc() -> Command {
    cargo_bin_cmd!("exprimetoncampus")
}

/// Command preset with a per-test config path, so the user's config is never read.
pub fn etc_with_config(name: &str) -> Command {
    let cfg = temp_path(name, "conf");
    let mut cmd = etc();
    cmd.args(["--config", &cfg]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_exprimetoncampus.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

pub fn ids(records: &[FeedbackRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

pub const IMPORT_CSV: &str = "id,place,emotion,text,date\n\
    10,Piscine universitaire,joie,Bassin enfin rouvert,2025-04-02\n\
    11,Cafétéria,colère,Plus de plateaux à 12h15,2025-04-03\n";
