//! Binary-level tests for the `incubator` command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// An empty config file, so runs never pick up the user's own config
fn empty_config() -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "incubator-cli-empty-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "").unwrap();
    path
}

fn incubator() -> Command {
    let mut cmd = Command::cargo_bin("incubator").unwrap();
    cmd.env("INCUBATOR_CONFIG", empty_config())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn funding_list_shows_sample_round() {
    incubator()
        .args(["funding", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fund-1"))
        .stdout(predicate::str::contains("Seed Round 2024"))
        .stdout(predicate::str::contains("$500K"));
}

#[test]
fn funding_allocate_drops_non_positive_lines() {
    incubator()
        .args([
            "--output", "json", "funding", "allocate", "fund-1", "s1=25000", "s2=150000", "s3=-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allocated\": 175000"))
        .stdout(predicate::str::contains("\"remaining\": 325000"))
        .stdout(predicate::str::contains("s3").not());
}

#[test]
fn funding_over_allocation_warns_but_succeeds() {
    incubator()
        .args(["funding", "allocate", "fund-1", "s1=600000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over-allocated by 100000"));
}

#[test]
fn funding_remove_absent_recipient_is_noop() {
    incubator()
        .args([
            "--output", "json", "funding", "remove", "fund-1", "s9", "--line", "s1=40000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allocated\": 40000"));
}

#[test]
fn unknown_round_fails() {
    incubator()
        .args(["funding", "allocate", "fund-9", "s1=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Funding round not found: fund-9"));
}

#[test]
fn malformed_line_is_rejected() {
    incubator()
        .args(["funding", "allocate", "fund-1", "s1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RECIPIENT=AMOUNT"));
}

#[test]
fn resource_allocate_past_availability() {
    incubator()
        .args(["--output", "json", "resource", "allocate", "res-1", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"percent\": 125.0"))
        .stdout(predicate::str::contains("\"tier\": \"over\""))
        .stdout(predicate::str::contains("\"remaining\": 0"));
}

#[test]
fn resource_list_includes_all_samples() {
    incubator()
        .args(["resource", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Office Space - Desk"))
        .stdout(predicate::str::contains("Meeting Room"))
        .stdout(predicate::str::contains("AWS Credits"));
}

#[test]
fn mentor_dashboard_defaults_to_first_mentor() {
    incubator()
        .args(["dashboard", "--role", "mentor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sarah Chen"))
        .stdout(predicate::str::contains("My Startups"));
}

#[test]
fn admin_dashboard_as_json() {
    incubator()
        .args(["-o", "json", "dashboard", "--role", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"admin\""))
        .stdout(predicate::str::contains("\"mentor_count\": 2"));
}

#[test]
fn founder_dashboard_without_startups_fails() {
    incubator()
        .args(["dashboard", "--role", "founder"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no startups registered"));
}

#[test]
fn dashboard_requires_role() {
    incubator()
        .args(["dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--role is required"));
}

#[test]
fn performance_report_text() {
    incubator()
        .args(["report", "performance", "--period", "Q3 2024"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Performance Report"))
        .stdout(predicate::str::contains("Period: Q3 2024"))
        .stdout(predicate::str::contains("- Active Mentors: 2"))
        .stdout(predicate::str::contains("## Funding Summary").not());
}

#[test]
fn report_as_csv() {
    incubator()
        .args(["report", "funding", "--csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Funding,$500K"))
        .stdout(predicate::str::contains(
            "Name,Founder,Stage,Progress,Funding Received,Funding Needed",
        ));
}

#[test]
fn unknown_report_kind_is_rejected() {
    incubator().args(["report", "quarterly"]).assert().failure();
}

#[test]
fn empty_startup_list() {
    incubator()
        .args(["startups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn mentors_as_yaml() {
    incubator()
        .args(["--output", "yaml", "mentors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("email: sarah@mentors.com"))
        .stdout(predicate::str::contains("James Wilson"));
}

#[test]
fn pool_summary_by_key() {
    incubator()
        .args(["--output", "json", "pool", "res-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allocated\": 2"))
        .stdout(predicate::str::contains("Meeting Room"));

    incubator()
        .args(["pool", "pool-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Allocation pool not found: pool-9"));
}

#[test]
fn missing_named_config_is_an_error() {
    incubator()
        .env("INCUBATOR_CONFIG", "/nonexistent/incubator/config.toml")
        .args(["funding", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
