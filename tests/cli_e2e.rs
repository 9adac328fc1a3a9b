//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary against exports written to a temporary
//! directory and check its output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text summary for Android and iOS exports
//! - **Report formats**: `--format json`, `-o`
//! - **Record export**: `--records` as CSV, JSON, JSONL
//! - **Selection and filters**: `--user`, `--after`, `--before`, `--list-users`
//! - **Configuration**: `--date-order`, `--config`, `--stop-words`, `--top`
//! - **Error handling**: proper error messages for bad input
//! - **Help and version**
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with sample exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // Android group, day-first dates
    let android = "\
12/03/24, 09:15 - Messages and calls are end-to-end encrypted.
12/03/24, 09:16 - Alice created group \"Weekend\"
12/03/24, 09:20 - Alice: Pizza on Saturday? 🍕
12/03/24, 09:21 - Bob: Sure!
Bring the games
12/03/24, 09:22 - Bob: <Media omitted>
13/03/24, 21:05 - Carol: https://maps.example.com/pizza-place
13/03/24, 21:06 - Alice: This message was deleted
01/04/24, 23:59 - Bob: pizza pizza 😂😂
01/04/24, 23:59 - Carol: 😂
";
    fs::write(dir.path().join("android.txt"), android).unwrap();

    // iOS, month-first dates
    let ios = "\
[1/15/24, 10:30:45 AM] Alice: Hello
[1/15/24, 10:31:00 AM] Bob: Hi there
[1/15/24, 10:45:00 PM] Alice: Good night 🌙
[2/1/24, 12:05:00 AM] Bob: Morning already?
";
    fs::write(dir.path().join("ios.txt"), ios).unwrap();

    // Unicode senders
    let unicode = "\
01/02/23, 10:00 - Алиса: Привет! 🎉
01/02/23, 10:01 - 田中: こんにちは
01/02/23, 10:02 - محمد: مرحبا
";
    fs::write(dir.path().join("unicode.txt"), unicode).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "milk\neggs\nbread\n").unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = chatlens_cmd()
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_android_text_summary() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "android.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  9"))
            .stdout(predicate::str::contains("Media:     1"))
            .stdout(predicate::str::contains("Links:     1"))
            .stdout(predicate::str::contains("March-2024"))
            .stdout(predicate::str::contains("Most active"));
    }

    #[test]
    fn test_ios_month_first() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "ios.txt"), "--date-order", "mm-dd-yy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  4"))
            .stdout(predicate::str::contains("January-2024"))
            .stdout(predicate::str::contains("February-2024"));
    }

    #[test]
    fn test_ios_day_first_drops_invalid_dates() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "ios.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  1"));
    }

    #[test]
    fn test_unicode_senders() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "unicode.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Алиса"))
            .stdout(predicate::str::contains("🎉"));
    }

    #[test]
    fn test_logs_go_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "-v"])
            .assert()
            .success()
            .stdout(predicate::str::contains("parsed export").not())
            .stderr(predicate::str::contains("parsed export"));
    }
}

// ============================================================================
// Report Format Tests
// ============================================================================

mod report_formats {
    use super::*;

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();
        let report = json_report(&[&fixture(&fixtures, "android.txt")]);

        assert_eq!(report["selection"], "Everyone");
        assert_eq!(report["stats"]["message_count"], 9);
        assert_eq!(report["stats"]["deleted_message_count"], 1);
        assert_eq!(report["emojis"][0]["token"], "😂");
        assert_eq!(report["emojis"][0]["count"], 3);
        assert_eq!(report["heatmap"]["counts"].as_array().unwrap().len(), 7);
        assert_eq!(report["users"].as_array().unwrap().len(), 4);
        assert_eq!(report["top_users"][0]["user"], "Bob");
    }

    #[test]
    fn test_report_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "android.txt"),
                "--format",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["stats"]["link_count"], 1);
    }

    #[test]
    fn test_text_report_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.txt");

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(fs::read_to_string(&output).unwrap().contains("Busiest day"));
    }
}

// ============================================================================
// Record Export Tests
// ============================================================================

mod record_export {
    use super::*;

    #[test]
    fn test_records_csv() {
        let fixtures = setup_fixtures();
        let records = output_path(&fixtures, "messages.csv");

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--records", records.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&records).unwrap();
        assert!(content.starts_with("date;time;sender;body;"));
        assert!(content.contains("hour_range"));
        // Multi-line bodies are quoted
        assert!(content.contains("\"Sure!\nBring the games\""));
    }

    #[test]
    fn test_records_json_for_one_user() {
        let fixtures = setup_fixtures();
        let records = output_path(&fixtures, "alice.json");

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "android.txt"),
                "--user",
                "Alice",
                "--records",
                records.to_str().unwrap(),
            ])
            .assert()
            .success();

        let rows: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&records).unwrap()).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r["sender"] == "Alice"));
    }

    #[test]
    fn test_records_jsonl() {
        let fixtures = setup_fixtures();
        let records = output_path(&fixtures, "messages.jsonl");

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--records", records.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&records).unwrap();
        assert_eq!(content.lines().count(), 9);
        for line in content.lines() {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }
}

// ============================================================================
// Selection and Filter Tests
// ============================================================================

mod selection_and_filters {
    use super::*;

    #[test]
    fn test_list_users() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--list-users"])
            .assert()
            .success()
            .stdout("Everyone\nAlice\nBob\nCarol\ngroup_notification\n");
    }

    #[test]
    fn test_single_user() {
        let fixtures = setup_fixtures();
        let report = json_report(&[&fixture(&fixtures, "android.txt"), "--user", "Bob"]);

        assert_eq!(report["selection"], "Bob");
        assert_eq!(report["stats"]["message_count"], 3);
        assert_eq!(report["stats"]["media_count"], 1);
        assert!(report.get("users").is_none());
        assert!(report.get("top_users").is_none());
        assert_eq!(report["common_words"][0]["token"], "pizza");
    }

    #[test]
    fn test_exact_user_named_everyone() {
        let fixtures = setup_fixtures();
        let input = output_path(&fixtures, "everyone.txt");
        fs::write(
            &input,
            "01/02/23, 10:00 - Everyone: hi all\n01/02/23, 10:01 - Bob: hey\n",
        )
        .unwrap();
        let input = input.to_str().unwrap();

        let all = json_report(&[input, "--user", "Everyone"]);
        assert_eq!(all["stats"]["message_count"], 2);

        let literal = json_report(&[input, "--user", "Everyone", "--exact-user"]);
        assert_eq!(literal["stats"]["message_count"], 1);
        assert!(literal.get("users").is_none());
    }

    #[test]
    fn test_unknown_user_is_empty_report() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--user", "Nobody"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages for this selection"));
    }

    #[test]
    fn test_after_filter() {
        let fixtures = setup_fixtures();
        let report = json_report(&[&fixture(&fixtures, "android.txt"), "--after", "2024-04-01"]);
        assert_eq!(report["stats"]["message_count"], 2);
    }

    #[test]
    fn test_before_filter_is_inclusive() {
        let fixtures = setup_fixtures();
        let report = json_report(&[&fixture(&fixtures, "android.txt"), "--before", "2024-03-13"]);
        assert_eq!(report["stats"]["message_count"], 7);
    }

    #[test]
    fn test_date_range() {
        let fixtures = setup_fixtures();
        let report = json_report(&[
            &fixture(&fixtures, "android.txt"),
            "--after",
            "2024-03-13",
            "--before",
            "2024-03-13",
        ]);
        assert_eq!(report["stats"]["message_count"], 2);
        assert_eq!(report["daily_timeline"].as_array().unwrap().len(), 1);
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_config_file() {
        let fixtures = setup_fixtures();
        let config = output_path(&fixtures, "config.json");
        fs::write(&config, r#"{"day_first": false, "top_users": 1}"#).unwrap();

        let report = json_report(&[
            &fixture(&fixtures, "ios.txt"),
            "--config",
            config.to_str().unwrap(),
        ]);
        assert_eq!(report["stats"]["message_count"], 4);
        assert_eq!(report["users"].as_array().unwrap().len(), 2);
        assert_eq!(report["top_users"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_top_users_limits_text_summary() {
        let fixtures = setup_fixtures();
        let config = output_path(&fixtures, "config.json");
        fs::write(&config, r#"{"top_users": 1}"#).unwrap();
        let output = output_path(&fixtures, "report.txt");

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "android.txt"),
                "--config",
                config.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let text = fs::read_to_string(&output).unwrap();
        let most_active: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.contains("Most active"))
            .skip(1)
            .take_while(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(most_active.len(), 1);
        assert!(most_active[0].contains("Bob"));
        assert!(text.ends_with(")\n"));
    }

    #[test]
    fn test_date_order_overrides_config() {
        let fixtures = setup_fixtures();
        let config = output_path(&fixtures, "config.json");
        fs::write(&config, r#"{"day_first": false}"#).unwrap();

        let report = json_report(&[
            &fixture(&fixtures, "ios.txt"),
            "--config",
            config.to_str().unwrap(),
            "--date-order",
            "dd-mm-yy",
        ]);
        assert_eq!(report["stats"]["message_count"], 1);
    }

    #[test]
    fn test_stop_words_file() {
        let fixtures = setup_fixtures();
        let stop_words = output_path(&fixtures, "stop.txt");
        fs::write(&stop_words, "pizza\n").unwrap();

        let report = json_report(&[
            &fixture(&fixtures, "android.txt"),
            "--stop-words",
            stop_words.to_str().unwrap(),
        ]);
        let words = report["common_words"].as_array().unwrap();
        assert!(words.iter().all(|w| w["token"] != "pizza"));
    }

    #[test]
    fn test_top_limits_word_table() {
        let fixtures = setup_fixtures();
        let report = json_report(&[&fixture(&fixtures, "android.txt"), "--top", "1"]);
        assert_eq!(report["common_words"].as_array().unwrap().len(), 1);
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatlens_cmd()
            .arg("nonexistent_chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_unparseable_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unparseable chat export"))
            .stderr(predicate::str::contains("notes.txt"));
    }

    #[test]
    fn test_invalid_date_format() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--after", "01/04/2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn test_unknown_records_extension() {
        let fixtures = setup_fixtures();
        let records = output_path(&fixtures, "messages.xlsx");

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--records", records.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
        assert!(!records.exists());
    }

    #[test]
    fn test_top_zero_rejected() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--top", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_invalid_date_order() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "android.txt"), "--date-order", "yy-mm-dd"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_input_argument() {
        chatlens_cmd().assert().failure();
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_export() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "empty.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  0"))
            .stdout(predicate::str::contains("No messages for this selection"));
    }

    #[test]
    fn test_crlf_export() {
        let fixtures = setup_fixtures();
        let input = output_path(&fixtures, "crlf.txt");
        fs::write(
            &input,
            "01/02/23, 10:00 - Alice: Hi\r\nsecond line\r\n01/02/23, 10:01 - Bob: Hello\r\n",
        )
        .unwrap();

        let report = json_report(&[input.to_str().unwrap()]);
        assert_eq!(report["stats"]["message_count"], 2);
        assert_eq!(report["stats"]["word_count"], 4);
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlens"))
            .stdout(predicate::str::contains("--date-order"))
            .stdout(predicate::str::contains("--records"));
    }

    #[test]
    fn test_version_flag() {
        chatlens_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlens"))
            .stdout(predicate::str::contains("0."));
    }
}
