//! CLI end-to-end tests that invoke the compiled `praxis` binary.

use assert_cmd::Command;
use praxis_test_utils::TestWorkspace;
use predicates::prelude::*;

/// A `praxis` command running inside the workspace's project directory.
fn praxis(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("praxis").expect("Failed to find praxis binary");
    cmd.current_dir(ws.project_dir())
        .env("PRAXIS_HOME", ws.home())
        .env("NO_COLOR", "1");
    cmd
}

fn seeded() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.core_opinion("code/README.md", "active");
    ws.core_opinion("code/principles.md", "active");
    ws.extension_with_opinions("mobile-pack", &[("m.md", "code/subtypes/mobile/principles.md")]);
    ws.install(&["mobile-pack"]);
    ws.project_config("domain: code\nstage: formalize\nsubtype: mobile\n");
    ws
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("praxis")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("opinions"))
        .stdout(predicate::str::contains("audit"));
}

#[test]
fn test_opinions_from_project_file() {
    let ws = seeded();
    praxis(&ws)
        .arg("opinions")
        .assert()
        .success()
        .stdout(predicate::str::contains("code/README.md"))
        .stdout(predicate::str::contains("code/subtypes/mobile/principles.md"))
        .stdout(predicate::str::contains("[mobile-pack]"));
}

#[test]
fn test_opinions_json_preserves_chain_order() {
    let ws = seeded();
    let output = praxis(&ws)
        .args(["opinions", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let paths: Vec<&str> = value["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "code/README.md",
            "code/principles.md",
            "code/subtypes/mobile/principles.md"
        ]
    );
    assert_eq!(value["stage"], "formalize");
}

#[test]
fn test_opinions_flags_override_project_file() {
    let ws = seeded();
    ws.core_opinion("write/README.md", "active");
    praxis(&ws)
        .args(["opinions", "--domain", "write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write/README.md"))
        .stdout(predicate::str::contains("code/README.md").not());
}

#[test]
fn test_strict_mode_fails_on_warnings() {
    let ws = seeded();
    ws.core_opinion("code/principles.md", "deprecated");

    praxis(&ws).arg("opinions").assert().success();
    praxis(&ws)
        .args(["opinions", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_opinions_tree_lists_provenance() {
    let ws = seeded();
    praxis(&ws)
        .args(["opinions", "--tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code/principles.md [core]"))
        .stdout(predicate::str::contains(
            "code/subtypes/mobile/principles.md [mobile-pack]",
        ));
}

#[test]
fn test_unknown_domain_is_an_error() {
    let ws = seeded();
    praxis(&ws)
        .args(["opinions", "--domain", "gardening"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown domain 'gardening'"));
}

#[test]
fn test_audit_reports_failures() {
    let ws = TestWorkspace::new();
    praxis(&ws)
        .args(["audit", "--domain", "code"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("praxis_yaml_exists"))
        .stderr(predicate::str::contains("audit check(s) failed"));
}

#[test]
fn test_audit_passes_for_healthy_project() {
    let ws = TestWorkspace::new();
    ws.project_config("domain: write\nstage: capture\n");
    praxis(&ws)
        .args(["audit", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"passed\""));
}

#[test]
fn test_extensions_lists_load_status() {
    let ws = seeded();
    ws.manifest("broken", "name: [unclosed\n");
    ws.install(&["mobile-pack", "broken"]);

    praxis(&ws)
        .arg("extensions")
        .assert()
        .success()
        .stdout(predicate::str::contains("mobile-pack"))
        .stdout(predicate::str::contains("1 opinion(s)"))
        .stdout(predicate::str::contains("failed"));
}

#[test]
fn test_extensions_requires_home() {
    let ws = TestWorkspace::new();
    praxis(&ws)
        .env_remove("PRAXIS_HOME")
        .arg("extensions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRAXIS_HOME"));
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("praxis")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("praxis"));
}
