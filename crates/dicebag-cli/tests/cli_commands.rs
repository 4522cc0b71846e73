//! Integration tests for the `dicebag` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn dicebag() -> Command {
    let mut cmd = Command::cargo_bin("dicebag").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_single_die() {
    dicebag()
        .args(["roll", "1d1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d1 = 1"));
}

#[test]
fn roll_several_dice_with_modifier() {
    dicebag()
        .args(["roll", "3d1+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d1+2 = 1+1+1+2 = 5"));
}

#[test]
fn roll_accepts_uppercase_and_spaces() {
    dicebag()
        .args(["roll", " 2D1 - 1 "])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d1-1 = 1+1-1 = 1"));
}

#[test]
fn roll_lenient_allows_missing_count() {
    dicebag()
        .args(["roll", "d1", "--lenient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d1 = 1"));
}

#[test]
fn roll_strict_rejects_missing_count() {
    dicebag()
        .args(["roll", "d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice notation"));
}

#[test]
fn roll_rejects_zero_count() {
    dicebag()
        .args(["roll", "0d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn roll_rejects_huge_count() {
    dicebag()
        .args(["roll", "4294967295d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 1000 dice"));
}

#[test]
fn roll_rejects_garbage() {
    dicebag()
        .args(["roll", "2x6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn roll_many_times_prints_statistics() {
    dicebag()
        .args(["roll", "1d1", "--times", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics"))
        .stdout(predicate::str::contains("Most common"));
}

#[test]
fn roll_same_seed_same_output() {
    let first = dicebag()
        .args(["roll", "4d20", "--times", "3", "--seed", "7"])
        .output()
        .unwrap();
    let second = dicebag()
        .args(["roll", "4d20", "--times", "3", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_json_output() {
    let output = dicebag()
        .args(["roll", "2d1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rolls"].as_array().unwrap().len(), 1);
    assert_eq!(value["rolls"][0]["results"], serde_json::json!([1, 1]));
    assert_eq!(value["statistics"]["total_rolls"], 1);
}

// ---------------------------------------------------------------------------
// pick
// ---------------------------------------------------------------------------

#[test]
fn pick_single_item() {
    dicebag()
        .args(["pick", "solo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolled 1 -> solo"));
}

#[test]
fn pick_uses_title() {
    dicebag()
        .args(["pick", "tea", "coffee", "--title", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drinks"))
        .stdout(predicate::str::contains("uniform"));
}

#[test]
fn pick_with_weights_is_weighted() {
    dicebag()
        .args(["pick", "a", "b", "--weights", "1,1", "--times", "5", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weighted"));
}

#[test]
fn pick_rejects_weight_count_mismatch() {
    dicebag()
        .args(["pick", "a", "b", "--weights", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2 weights"));
}

#[test]
fn pick_rejects_zero_weight() {
    dicebag()
        .args(["pick", "a", "b", "--weights", "1,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn pick_rejects_seven_items() {
    dicebag()
        .args(["pick", "1", "2", "3", "4", "5", "6", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 6 items"));
}

#[test]
fn pick_requires_items() {
    dicebag().arg("pick").assert().failure();
}

#[test]
fn pick_json_output() {
    let output = dicebag()
        .args(["pick", "only", "--times", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
    assert_eq!(value["statistics"]["total_selections"], 2);
    assert_eq!(value["statistics"]["most_common_item"], "only");
}

// ---------------------------------------------------------------------------
// demo / misc
// ---------------------------------------------------------------------------

#[test]
fn demo_runs() {
    dicebag()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todos"))
        .stdout(predicate::str::contains("Dice"))
        .stdout(predicate::str::contains("Random picks"));
}

#[test]
fn version_flag() {
    dicebag()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dicebag"));
}

#[test]
fn no_subcommand_shows_usage() {
    dicebag()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
