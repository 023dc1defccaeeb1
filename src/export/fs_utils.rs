// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// - file missing → Ok
/// - file present and `force` → Ok
/// - file present otherwise → ask on stdin, anything but `y`/`yes` cancels
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    confirm_overwrite(path, io::stdin().lock())
}

fn confirm_overwrite<R: BufRead>(path: &Path, mut input: R) -> AppResult<()> {
    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_decides_overwrite() {
        let p = Path::new("whatever.csv");
        assert!(confirm_overwrite(p, "y\n".as_bytes()).is_ok());
        assert!(confirm_overwrite(p, "YES\n".as_bytes()).is_ok());
        assert!(confirm_overwrite(p, "\n".as_bytes()).is_err());
        assert!(confirm_overwrite(p, "non\n".as_bytes()).is_err());
    }
}
