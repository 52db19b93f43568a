//! Building the seeded case under file-based configuration.

use manor::{CaseConfig, CaseFile, ManorError, OverflowPolicy, TextField};
use std::fs;

fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("detective-quest-{}-{}.toml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_and_build() {
    let path = write_config("defaults", "[judgment]\nsupport_threshold = 2\n");
    let config = CaseConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    let case = CaseFile::seeded(&config.limits).unwrap();
    assert_eq!(case.manor.room_count(), 8);
    assert_eq!(case.unmatched_clues().len(), 1);
}

#[test]
fn test_strict_limits_reject_seed() {
    let path = write_config("strict", "[limits]\nclue = 10\noverflow = \"reject\"\n");
    let config = CaseConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.limits.overflow, OverflowPolicy::Reject);
    let result = CaseFile::seeded(&config.limits);
    assert!(matches!(
        result,
        Err(ManorError::TextTooLong {
            field: TextField::Clue,
            ..
        })
    ));
}

#[test]
fn test_truncating_limits_keep_leads_matched() {
    let config = CaseConfig::from_toml_str("[limits]\nclue = 12\n").unwrap();
    let case = CaseFile::seeded(&config.limits).unwrap();

    // Room clues and leads are cut the same way, so lookups still line up.
    assert_eq!(case.unmatched_clues().len(), 1);
    assert!(case.leads.iter().all(|lead| lead.clue.as_str().chars().count() <= 12));
}
