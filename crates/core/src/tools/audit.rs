//! # Pillar Audit
//!
//! Verifies that the pillar registry directory contains all 21 pillars,
//! named with their two-digit prefix, and reports anything missing or
//! unrecognized.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

/// Number of pillars the registry is expected to hold.
pub const EXPECTED_PILLARS: u8 = 21;

/// Outcome of a pillar directory scan.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub total_files: usize,
    pub found: Vec<u8>,
    pub missing: Vec<u8>,
    pub unrecognized: Vec<String>,
}

impl AuditReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Scan a pillar directory. Files named `NN_*` count as pillar NN; the
/// legacy `pillar_21*` name counts as 21; `index.md` is ignored.
pub fn audit_pillars(dir: &Path) -> Result<AuditReport> {
    let pattern = Regex::new(r"^(\d{2})_").expect("static regex");
    let mut found = Vec::new();
    let mut unrecognized = Vec::new();
    let mut total_files = 0;

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read pillar directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name == "index.md" {
            continue;
        }
        total_files += 1;
        if let Some(caps) = pattern.captures(&name) {
            if let Ok(number) = caps[1].parse::<u8>() {
                found.push(number);
                continue;
            }
        }
        if name.starts_with("pillar_21") {
            found.push(21);
        } else {
            unrecognized.push(name);
        }
    }

    found.sort_unstable();
    found.dedup();
    let missing: Vec<u8> = (1..=EXPECTED_PILLARS).filter(|n| !found.contains(n)).collect();
    unrecognized.sort();

    Ok(AuditReport { total_files, found, missing, unrecognized })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(names: &[&str]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cathedral_audit_{}",
            names.len() as u32 * 1000 + names.iter().map(|n| n.len() as u32).sum::<u32>()
        ));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(name), "pillar").unwrap();
        }
        dir
    }

    #[test]
    fn test_complete_registry_passes() {
        let names: Vec<String> = (1..=21).map(|n| format!("{n:02}_pillar.md")).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let dir = setup(&refs);
        let report = audit_pillars(&dir).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.found.len(), 21);
        assert!(report.unrecognized.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_pillars_reported() {
        let dir = setup(&["01_spine.md", "02_breath.md", "05_voice.md"]);
        let report = audit_pillars(&dir).unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.found, vec![1, 2, 5]);
        assert_eq!(report.missing.len(), 18);
        assert!(report.missing.contains(&3));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_legacy_pillar_21_and_index_skipped() {
        let dir = setup(&["pillar_21_completion.md", "index.md", "notes.txt"]);
        let report = audit_pillars(&dir).unwrap();
        assert_eq!(report.found, vec![21]);
        assert_eq!(report.unrecognized, vec!["notes.txt".to_string()]);
        // index.md is not counted
        assert_eq!(report.total_files, 2);
        fs::remove_dir_all(&dir).ok();
    }
}
