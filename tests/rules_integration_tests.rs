//! Integration tests for the `rules` command.

mod common;

use common::{BASIC_RULES, TestFixture};
use predicates::prelude::*;

#[test]
fn validate_accepts_valid_rule_file() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);

    marker_guard!()
        .current_dir(fixture.path())
        .args(["rules", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule file is valid: .marker-guard.toml"));
}

#[test]
fn validate_rejects_missing_file() {
    let fixture = TestFixture::new();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["rules", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rule file not found"));
}

#[test]
fn validate_rejects_out_of_range_threshold() {
    let fixture = TestFixture::new();
    fixture.create_config(
        "[files]\n\"a.js\" = \"a\"\n\n[quality]\ncomment_threshold = 1.5\ncomment_density = [\"a.js\"]\n",
    );

    marker_guard!()
        .current_dir(fixture.path())
        .args(["rules", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("comment_threshold"));
}

#[test]
fn show_text_lists_phases() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);

    marker_guard!()
        .current_dir(fixture.path())
        .args(["rules", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 rules)"))
        .stdout(predicate::str::contains("Files"))
        .stdout(predicate::str::contains("Features"))
        .stdout(predicate::str::contains("class VirtualList"));
}

#[test]
fn show_json_for_preset() {
    let fixture = TestFixture::new();

    let output = marker_guard!()
        .current_dir(fixture.path())
        .args(["rules", "show", "--preset", "react-hooks-demo", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = rules.as_array().unwrap();
    assert!(rules.iter().any(|r| r["phase"] == "dependencies"));
    assert!(rules.iter().all(|r| r["kind"] != "file_exists" || r["severity"] == "error"));
}
