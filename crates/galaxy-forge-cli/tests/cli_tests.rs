//! Integration tests for the `galaxy-forge` binary.
//!
//! Every command runs against the checked-in star catalog fixture.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/stars.csv")
        .canonicalize()
        .expect("star catalog fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("galaxy-forge");
    cmd.env("RUST_LOG", "error").env_remove("GALAXY_FORGE_DATA");
    cmd
}

fn fixture_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--no-color").arg("--data").arg(fixture_catalog());
    cmd
}

#[test]
fn stats_reports_load_summary_and_totals() {
    let mut cmd = fixture_command();
    cmd.args(["stats", "--keep-barren"]);

    cmd.assert()
        .success()
        .stdout(contains("Admitted 9 of 12 stars (3 rejected, 1 binary pairs)"))
        .stdout(contains("Total number of stars: 9"))
        .stdout(contains("Number of double stars: 2"))
        .stdout(contains("Stars by type:"));
}

#[test]
fn stats_json_is_machine_readable() {
    let mut cmd = fixture_command();
    cmd.args(["stats", "--json", "--keep-barren"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["total_stars"], 9);
    assert_eq!(value["binary_stars"], 2);
    assert_eq!(value["stars_by_type"]["G"], 3);
}

fn stats_json(extra: &[&str]) -> serde_json::Value {
    let mut cmd = fixture_command();
    cmd.args(["stats", "--json"]).args(extra);
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("valid JSON")
}

#[test]
fn stats_prunes_barren_stars_by_default() {
    let kept = stats_json(&["--keep-barren"]);
    let pruned = stats_json(&[]);

    let kept_total = kept["total_stars"].as_u64().expect("numeric total");
    let pruned_total = pruned["total_stars"].as_u64().expect("numeric total");
    assert!(pruned_total < kept_total, "{pruned_total} vs {kept_total}");

    // WR 104 has at most one planet, scorched inside its goldilocks zone.
    assert_eq!(kept["stars_by_type"]["W"], 1);
    assert!(pruned["stars_by_type"].get("W").is_none());
}

#[test]
fn star_shows_details_and_sister() {
    let mut cmd = fixture_command();
    cmd.args(["star", "ACE A"]);

    cmd.assert()
        .success()
        .stdout(contains("ACE A G2 V"))
        .stdout(contains("Name:           Alpha Centauri A"))
        .stdout(contains("Sister:         ACE B"))
        .stdout(contains("Goldilocks:"));
}

#[test]
fn unknown_star_suggests_close_designations() {
    let mut cmd = fixture_command();
    cmd.args(["star", "SIRUS"]);

    cmd.assert()
        .failure()
        .stderr(contains("unknown star designation: SIRUS"))
        .stderr(contains("Did you mean"))
        .stderr(contains("SIRIUS"));
}

#[test]
fn list_shows_admitted_stars_only() {
    let mut cmd = fixture_command();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(contains("9 star(s)"))
        .stdout(contains("binary with ACE B"))
        .stdout(contains("PROX").not())
        .stdout(contains("EPS ERI").not());
}

#[test]
fn list_filters_by_type() {
    let mut cmd = fixture_command();
    cmd.args(["list", "--type", "g"]);

    cmd.assert()
        .success()
        .stdout(contains("SOL"))
        .stdout(contains("TAU CETI"))
        .stdout(contains("3 star(s)"))
        .stdout(contains("SIRIUS").not());
}

#[test]
fn list_rejects_unknown_type_codes() {
    let mut cmd = fixture_command();
    cmd.args(["list", "--type", "Q"]);

    cmd.assert()
        .failure()
        .stderr(contains("invalid --type value 'Q'"));
}

#[test]
fn no_color_output_has_no_escape_codes() {
    let mut cmd = fixture_command();
    cmd.arg("list");

    cmd.assert().success().stdout(contains("\x1b[").not());
}

#[test]
fn missing_catalog_fails_with_context() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--data")
        .arg(temp_dir.path().join("absent.csv"))
        .arg("list");

    cmd.assert()
        .failure()
        .stderr(contains("failed to locate the star catalog"));
}

#[test]
fn data_directory_from_environment_is_used() {
    let temp_dir = tempdir().expect("create temp dir");
    fs::copy(fixture_catalog(), temp_dir.path().join("stars.csv")).expect("copy fixture");

    let mut cmd = cli();
    cmd.env("GALAXY_FORGE_DATA", temp_dir.path())
        .args(["--no-color", "list"]);

    cmd.assert().success().stdout(contains("9 star(s)"));
}

#[test]
fn malformed_catalog_reports_the_row() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("stars.csv");
    fs::write(
        &path,
        "Designation,Name,StarType,TemperatureSequence,LuminosityClass,absoluteMagnitude,distance,longitude,latitude\n\
         A,,G,2,V,not-a-number,10,0,0\n",
    )
    .expect("write catalog");

    let mut cmd = cli();
    cmd.arg("--data").arg(&path).arg("stats");

    cmd.assert()
        .failure()
        .stderr(contains("failed to load star catalog"))
        .stderr(contains("row 2"));
}
