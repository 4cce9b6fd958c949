//! Plain-text place lists, one name per line.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reads place names from `path`, one per line.
///
/// Lines are trimmed and blank lines are skipped.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(parse_lines(&fs::read_to_string(path)?))
}

/// Splits `text` into trimmed, non-blank lines.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Writes `lines` to `path`, one per line.
pub fn save_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let text: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    fs::write(path, text.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        assert_eq!(parse_lines("Kyiv\n  Lviv \n\n\r\nOdesa\r\n"), vec!["Kyiv", "Lviv", "Odesa"]);
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cities.txt");
        save_lines(&path, &["Kharkiv", "Dnipro"]).expect("save");
        assert_eq!(load_lines(&path).expect("load"), vec!["Kharkiv", "Dnipro"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_lines(dir.path().join("missing.txt")).is_err());
    }
}
