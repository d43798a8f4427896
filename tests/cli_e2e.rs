//! End-to-end CLI tests for chattab.
//!
//! These tests run the actual binary against transcripts written to a
//! temporary directory and check both stdout and the files produced.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
1/2/23, 09:15 - Alice: Hello there
1/2/23, 09:16 - +1 555-000-1111: Hi
this continues
1/2/23, 09:17 - Alice: Bye
1/2/23, 09:18 - Carol left
";

const CONTACTS: &str = "5550001111,Bob\n";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("contacts.csv"), CONTACTS).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("bad.txt"), b"1/2/23, 09:15 - Alice: \xff\xfe").unwrap();
    dir
}

fn chattab_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chattab"));
    Command::from_std(cmd)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Basic Functionality
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_default_output_next_to_input() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chattab_cmd()
            .arg(path_str(&input))
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Records:        3"));

        let output = fixtures.path().join("chat.csv");
        let content = fs::read_to_string(output).unwrap();
        assert!(content.starts_with("Date,Time,Sender,Message,DateTime\n"));
        assert!(content.contains("\"Hi\nthis continues\""));
        assert!(content.contains("2023-01-02 09:15:00"));
    }

    #[test]
    fn test_contacts_resolve_senders() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let contacts = fixtures.path().join("contacts.csv");
        let base = fixtures.path().join("table");

        chattab_cmd()
            .args([
                path_str(&input),
                "-c",
                path_str(&contacts),
                "-o",
                path_str(&base),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Directory hits: 1"));

        let content = fs::read_to_string(fixtures.path().join("table.csv")).unwrap();
        assert!(content.contains("1/2/23,09:16,Bob,"));
        assert!(!content.contains("555-000-1111"));
    }

    #[test]
    fn test_empty_transcript_writes_header_only() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("empty.txt");

        chattab_cmd()
            .args([path_str(&input), "--no-datetime"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 0 records"));

        let content = fs::read_to_string(fixtures.path().join("empty.csv")).unwrap();
        assert_eq!(content, "Date,Time,Sender,Message\n");
    }
}

// ============================================================================
// Output Formats and Flags
// ============================================================================

mod formats_and_flags {
    use super::*;

    #[test]
    fn test_multiple_formats() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chattab_cmd()
            .args([path_str(&input), "-f", "csv,json,jsonl"])
            .assert()
            .success();

        for ext in ["csv", "json", "jsonl"] {
            assert!(fixtures.path().join(format!("chat.{ext}")).exists(), "{ext}");
        }

        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(fixtures.path().join("chat.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[1]["message"], "Hi\nthis continues");
        assert_eq!(json[0]["datetime"], "2023-01-02T09:15:00");
    }

    #[test]
    fn test_delimiter_and_no_datetime() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chattab_cmd()
            .args([path_str(&input), "--delimiter", ";", "--no-datetime"])
            .assert()
            .success();

        let content = fs::read_to_string(fixtures.path().join("chat.csv")).unwrap();
        assert!(content.starts_with("Date;Time;Sender;Message\n"));
        assert!(content.contains("1/2/23;09:15;Alice;Hello there\n"));
    }

    #[test]
    fn test_skip_system_lines() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chattab_cmd()
            .args([path_str(&input), "--skip-system-lines", "-f", "jsonl"])
            .assert()
            .success();

        let content = fs::read_to_string(fixtures.path().join("chat.jsonl")).unwrap();
        assert!(!content.contains("Carol left"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_config_file() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("short.txt");
        fs::write(&input, "1/2/23, 9:15 - Alice: single digit hour\n").unwrap();
        let config = fixtures.path().join("config.json");
        fs::write(&config, r#"{"time_pattern": "\\d{1,2}:\\d{2}"}"#).unwrap();

        chattab_cmd()
            .args([path_str(&input), "--config", path_str(&config)])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 1 records"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chattab_cmd()
            .args([path_str(&input), "-v"])
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("segmented transcript"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input() {
        chattab_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_utf8_input() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("bad.txt");

        chattab_cmd()
            .arg(path_str(&input))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("UTF-8"));

        assert!(!fixtures.path().join("bad.csv").exists());
    }

    #[test]
    fn test_malformed_contacts() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let contacts = fixtures.path().join("broken.csv");
        fs::write(&contacts, "5550001111\n").unwrap();

        chattab_cmd()
            .args([path_str(&input), "-c", path_str(&contacts)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("row 1"));
    }

    #[test]
    fn test_invalid_pattern_in_config() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let config = fixtures.path().join("config.json");
        fs::write(&config, r#"{"date_pattern": "(unclosed"}"#).unwrap();

        chattab_cmd()
            .args([path_str(&input), "--config", path_str(&config)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("(unclosed"));
    }

    #[test]
    fn test_unknown_format_rejected_by_clap() {
        chattab_cmd()
            .args(["chat.txt", "-f", "xlsx"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("xlsx"));
    }

    #[test]
    fn test_help() {
        chattab_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--contacts"))
            .stdout(predicate::str::contains("--skip-system-lines"));
    }
}
