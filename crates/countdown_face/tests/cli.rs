// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "This is a test module")]

//! Runs the countdown-face binary end to end.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn countdown_face() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("countdown-face"));
    cmd.env("TZ", "UTC").env_remove("COUNTDOWN_TARGET").env_remove("RUST_LOG");
    cmd
}

#[test]
fn once_draws_zeros_for_past_target() {
    countdown_face()
        .args(["--once", "--no-color", "--target", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YEARS • 00"))
        .stdout(predicate::str::contains("DAYS • 00"))
        .stdout(predicate::str::contains("HOURS • 00"))
        .stdout(predicate::str::contains("M I N U T E S"))
        .stdout(predicate::str::contains("January 1, 2000"));
}

#[test]
fn once_reads_target_from_environment() {
    countdown_face()
        .args(["--once", "--no-color"])
        .env("COUNTDOWN_TARGET", "1999-12-31")
        .assert()
        .success()
        .stdout(predicate::str::contains("December 31, 1999"));
}

#[test]
fn json_once_emits_clamped_frame() {
    countdown_face()
        .args(["--once", "--json", "--target", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalMs\":0"))
        .stdout(predicate::str::contains("\"minutesInDay\":0"))
        .stdout(predicate::str::contains("\"tick\":0"));
}

#[test]
fn json_once_for_future_target_has_remaining_time() {
    countdown_face()
        .args(["--once", "--json", "--target", "2999-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"years\":").and(predicate::str::contains("\"totalMs\":0").not()))
        .stdout(predicate::str::contains("\"years\":100.0"));
}

#[test]
fn invalid_target_fails_fast() {
    countdown_face()
        .args(["--once", "--target", "2026-02-30"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read the countdown target"))
        .stderr(predicate::str::contains("invalid target date \"2026-02-30\""));
}
