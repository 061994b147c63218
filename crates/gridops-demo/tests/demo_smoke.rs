//! Binary smoke tests using assert_cmd.
//!
//! These run the compiled `gridops` binary and verify that every
//! demonstration section prints and the process exits cleanly.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("gridops").unwrap()
}

#[test]
fn runs_to_completion() {
    cmd().assert().success();
}

#[test]
fn prints_every_section() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Original array A"))
        .stdout(predicate::str::contains("Sliced A"))
        .stdout(predicate::str::contains("Broadcast A"))
        .stdout(predicate::str::contains("Fancy indexed A"))
        .stdout(predicate::str::contains("Convolved result"))
        .stdout(predicate::str::contains("Sliding windows"));
}

#[test]
fn prints_known_values() {
    cmd()
        .assert()
        .success()
        // corner of the convolved grid
        .stdout(predicate::str::contains("-6"))
        // broadcast first cell 0 + 10
        .stdout(predicate::str::contains("10"))
        // last full window of the sliding-window demo
        .stdout(predicate::str::contains("[4, 5, 6]"));
}
