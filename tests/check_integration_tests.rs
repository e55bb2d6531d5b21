//! Integration tests for the `check` command.

mod common;

use common::{BASIC_RULES, TestFixture};
use predicates::prelude::*;

#[test]
fn all_rules_satisfied_passes() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All checks passed."))
        .stdout(predicate::str::contains("Result: PASSED"));
}

#[test]
fn no_subcommand_checks_current_directory() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Result: PASSED"));
}

#[test]
fn missing_required_file_fails() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);
    fixture.create_file("index.html", "<div class=\"table-wrapper\">");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Errors (1):"))
        .stdout(predicate::str::contains("main.js: application script (missing)"))
        .stdout(predicate::str::contains("Result: FAILED"))
        .stdout(predicate::str::contains("virtual list").not());
}

#[test]
fn missing_marker_is_only_a_warning() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);
    fixture.create_file("index.html", "<table></table>");
    fixture.create_file("main.js", "class VirtualList {}");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Warnings (1):"))
        .stdout(predicate::str::contains("0 errors"))
        .stdout(predicate::str::contains("Result: PASSED"));
}

#[test]
fn low_comment_density_warns() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[files]
"main.js" = "script"

[quality]
comment_density = ["main.js"]
line_count = ["main.js"]
"#,
    );
    fixture.create_file("main.js", "let a = 1;\nlet b = 2;\nlet c = 3;\n// one\n");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("main.js comment density: 20.0% (threshold 10.0%)"))
        .stdout(predicate::str::contains("total: 5 lines"));
}

#[test]
fn undecodable_file_aborts_run() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);
    fixture.create_bytes("index.html", &[0xff, 0xfe, 0x00, 0xc3]);
    fixture.create_file("main.js", "class VirtualList {}");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Fatal"))
        .stderr(predicate::str::contains("index.html"));
}

#[test]
fn explicit_root_argument() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    marker_guard!()
        .args(["check", "--color", "never"])
        .arg(fixture.path())
        .assert()
        .code(0);
}

#[test]
fn missing_root_is_config_error() {
    let fixture = TestFixture::new();

    marker_guard!()
        .args(["check"])
        .arg(fixture.path().join("nope"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project root not found"));
}

#[test]
fn default_preset_used_without_rule_file() {
    let fixture = TestFixture::new();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("preset 'web-worker-table'"))
        .stdout(predicate::str::contains("worker.js"));
}

#[test]
fn no_config_ignores_local_rule_file() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("preset 'web-worker-table'"));
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("rules/custom.toml", "[files]\n\"only.txt\" = \"only file\"\n");
    fixture.create_file("only.txt", "x");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--config", "rules/custom.toml", "--color", "never"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("only file"));
}

#[test]
fn invalid_rule_file_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[files\n");

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn uncovered_content_rule_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config(
        "[[content]]\nfile = \"a.js\"\nmarker = \"x\"\nlabel = \"x\"\n",
    );

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config"));
}

#[test]
fn json_output() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    let output = marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["errors"], 0);
    assert_eq!(json["findings"][0]["rule"]["kind"], "file_exists");
}

#[test]
fn output_file_receives_report() {
    let fixture = TestFixture::new();
    fixture.create_basic_project();

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never", "--output", "report.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(fixture.path().join("report.txt")).unwrap();
    assert!(report.contains("Result: PASSED"));
}

#[test]
fn quiet_suppresses_report_but_keeps_exit_code() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_RULES);

    marker_guard!()
        .current_dir(fixture.path())
        .args(["check", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
