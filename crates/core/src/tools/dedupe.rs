//! # Dedupe - Consecutive Duplicate Line Removal
//!
//! Memory lapses sometimes append the same block twice. This collapses runs
//! of identical lines in place, preserving the file's trailing-newline state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Collapse runs of identical lines. Returns the cleaned text and the number
/// of lines removed.
pub fn dedupe_content(content: &str) -> (String, usize) {
    let mut cleaned: Vec<&str> = Vec::new();
    let mut removed = 0;
    let mut prev: Option<&str> = None;
    for line in content.lines() {
        if prev == Some(line) {
            removed += 1;
            continue;
        }
        cleaned.push(line);
        prev = Some(line);
    }
    let tail = if content.ends_with('\n') { "\n" } else { "" };
    (cleaned.join("\n") + tail, removed)
}

/// Dedupe a file in place. Returns the number of lines removed.
pub fn dedupe_file(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (cleaned, removed) = dedupe_content(&content);
    if removed > 0 {
        std::fs::write(path, cleaned)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(removed)
}

/// Walk a directory for text files to process, honoring .gitignore.
pub fn walk_targets(dir: &Path) -> Vec<PathBuf> {
    let mut targets = Vec::new();
    for entry in ignore::WalkBuilder::new(dir).hidden(false).git_ignore(true).build() {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // skip files that are not valid UTF-8 text
        match std::fs::read_to_string(path) {
            Ok(_) => targets.push(path.to_path_buf()),
            Err(err) => debug!(path = %path.display(), error = %err, "skipping non-text file"),
        }
    }
    targets.sort();
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_consecutive_duplicates() {
        let (cleaned, removed) = dedupe_content("a\na\nb\nb\nb\nc\n");
        assert_eq!(cleaned, "a\nb\nc\n");
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_non_consecutive_duplicates_survive() {
        let (cleaned, removed) = dedupe_content("a\nb\na\n");
        assert_eq!(cleaned, "a\nb\na\n");
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_preserves_missing_trailing_newline() {
        let (cleaned, removed) = dedupe_content("x\nx");
        assert_eq!(cleaned, "x");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_empty_input() {
        let (cleaned, removed) = dedupe_content("");
        assert_eq!(cleaned, "");
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_dedupe_file_rewrites_only_when_needed() {
        let dir = std::env::temp_dir().join("cathedral_dedupe_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.txt");
        std::fs::write(&path, "one\none\ntwo\n").unwrap();
        assert_eq!(dedupe_file(&path).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        assert_eq!(dedupe_file(&path).unwrap(), 0);
        std::fs::remove_file(&path).ok();
    }
}
