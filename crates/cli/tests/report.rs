// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn report_defaults_to_issues_awaiting_triage() {
    let (temp, path) = with_issues();
    ferry()
        .args(["report", "--committer", "jhoeller"])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("1 out of 1\nkey in (SPR-2) ORDER BY created DESC\n");
}

#[test]
fn report_all_by_votes_with_top() {
    let (temp, path) = with_issues();
    ferry()
        .args([
            "report",
            "--committer",
            "jhoeller",
            "--all",
            "--order",
            "votes",
            "--top",
            "1",
        ])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("1 out of 4\nkey in (SPR-4) ORDER BY votes DESC\n");
}

#[test]
fn report_filters_by_committer_reporter() {
    let (temp, path) = with_issues();
    ferry()
        .args([
            "report",
            "--committer",
            "alice,jhoeller",
            "--committer-reported",
            "--all",
        ])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 out of 4\n"))
        .stdout(predicate::str::contains("key in (SPR-2)"));
}

#[test]
fn report_requires_committers() {
    let (temp, path) = with_issues();
    ferry()
        .arg("report")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--committer"));
}

#[test]
fn report_rejects_contradictory_filters() {
    let (temp, path) = with_issues();
    ferry()
        .args([
            "report",
            "--committer",
            "jhoeller",
            "--commented",
            "--uncommented",
        ])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn report_accepts_out_of_range_quiet_period() {
    let (temp, path) = with_issues();
    ferry()
        .args([
            "report",
            "--committer",
            "jhoeller",
            "--all",
            "--quiet-for-weeks",
            "4000000000",
        ])
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("0 out of 4\nkey in () ORDER BY created DESC\n");
}
