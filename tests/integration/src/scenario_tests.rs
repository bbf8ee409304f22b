//! End-to-end scenarios across the workspace crates
//!
//! Each test lays out a workspace on disk, loads it the way the CLI does
//! (workspace-config.yaml, praxis.yaml), then resolves opinions and runs
//! the audit from one shared extension load.

use praxis_core::{
    AuditCheckRegistry, CheckOutcome, OpinionsResolver, ProjectConfig, ResolvedOpinions, run_audit,
};
use praxis_extensions::{WorkspaceContext, load_installed};
use praxis_test_utils::TestWorkspace;
use pretty_assertions::assert_eq;

const QUALITY_PACK: &str = r#"
manifest_version: "0.1"
name: quality-pack
description: Shared code quality guidance
contributions:
  opinions:
    - source: opinions/cli.md
      target: code/subtypes/cli/principles.md
    - source: opinions/readme.md
      target: code/README.md
    - source: missing.md
      target: code/execute.md
    - "not a mapping"
  audits:
    - domain: code
      subtypes: [cli]
      checks:
        - name: has_usage_doc
          category: documentation
          check_type: file_contains
          path: README.md
          pattern: "(?mi)^## usage"
          pass_message: README documents usage
          fail_message: README has no usage section
          severity: failed
        - name: broken
          category: documentation
          check_type: file_contains
          path: README.md
          pattern: "*oops"
          pass_message: ok
          fail_message: nope
"#;

fn quality_workspace() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.core_opinion("_shared/first-principles.md", "active");
    ws.core_opinion("code/README.md", "active");
    ws.core_opinion("code/execute.md", "active");
    ws.core_opinion("code/_templates/ignored.md", "active");

    ws.manifest("quality-pack", QUALITY_PACK);
    ws.extension_file(
        "quality-pack",
        "opinions/cli.md",
        &praxis_test_utils::opinion_doc("active", "# CLI principles"),
    );
    ws.extension_file(
        "quality-pack",
        "opinions/readme.md",
        &praxis_test_utils::opinion_doc("active", "# Shadowed by core"),
    );
    ws.manifest("v2-pack", "manifest_version: \"2.0\"\nname: v2-pack\n");
    ws.install(&["quality-pack", "v2-pack", "ghost"]);

    ws.project_config("domain: code\nstage: execute\nsubtype: cli-python\n");
    ws.project_file("README.md", "# Tool\n\n## Usage\n\nRun it.\n");
    ws.project_file(".gitignore", "target/\n");
    ws.project_subdir("tests");
    ws
}

fn resolve(ws: &TestWorkspace) -> ResolvedOpinions {
    let workspace = WorkspaceContext::load(ws.home()).unwrap();
    let ctx = ProjectConfig::load(&ws.project_dir()).unwrap().context();
    OpinionsResolver::new(workspace, ws.project_dir()).resolve(&ctx)
}

#[test]
fn test_full_resolution_from_disk() {
    let ws = quality_workspace();
    let resolved = resolve(&ws);

    let files: Vec<(&str, &str)> = resolved
        .files
        .iter()
        .map(|f| (f.path.as_str(), f.source.as_str()))
        .collect();
    assert_eq!(
        files,
        vec![
            ("_shared/first-principles.md", "core"),
            ("code/README.md", "core"),
            ("code/execute.md", "core"),
            ("code/subtypes/cli/principles.md", "quality-pack"),
        ]
    );

    // Manifest warnings first, in installed order, then merge warnings.
    let w = &resolved.warnings;
    assert_eq!(w.len(), 5, "{w:#?}");
    assert!(w[0].contains("contributions.opinions[3]"));
    assert!(w[1].contains("missing.md"));
    assert!(w[2].contains("'v2-pack'") && w[2].contains("2.0"));
    assert!(w[3].contains("'ghost'"));
    assert!(w[4].contains("code/README.md") && w[4].contains("provided by core"));
}

#[test]
fn test_resolution_is_stable_across_runs() {
    let ws = quality_workspace();
    assert_eq!(resolve(&ws), resolve(&ws));
}

#[test]
fn test_audit_from_shared_extension_load() {
    let ws = quality_workspace();
    let workspace = WorkspaceContext::load(ws.home()).unwrap();
    let ctx = ProjectConfig::load(&ws.project_dir()).unwrap().context();

    let installed = load_installed(&workspace);
    let registry = AuditCheckRegistry::from_installed(&installed);
    let report = run_audit(&registry, &ctx, &ws.project_dir());

    assert_eq!(installed.loaded.len(), 1);
    assert_eq!(installed.failed.len(), 2);

    let usage = report
        .results
        .iter()
        .find(|r| r.name == "quality-pack:has_usage_doc")
        .expect("subtype prefix applies the cli check to cli-python");
    assert_eq!(usage.status, CheckOutcome::Passed);
    assert_eq!(usage.source, "quality-pack");

    assert!(!report.results.iter().any(|r| r.name.ends_with(":broken")));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("'broken'"));

    // capture.md and sod.md are missing; everything else passes.
    assert_eq!(report.count(CheckOutcome::Failed), 0);
    assert_eq!(report.count(CheckOutcome::Warning), 2);
    assert!(!report.has_failures());
}

#[test]
fn test_resolved_opinions_serialize_for_tooling() {
    let ws = quality_workspace();
    let resolved = resolve(&ws);

    let value = serde_json::to_value(&resolved).unwrap();
    assert_eq!(value["domain"], "code");
    assert_eq!(value["stage"], "execute");
    assert_eq!(value["subtype"], "cli-python");
    assert_eq!(value["files"][3]["source"], "quality-pack");
    assert_eq!(value["files"][0]["frontmatter"]["status"], "active");
}

#[test]
fn test_extension_only_workspace_without_core_files() {
    let ws = TestWorkspace::new();
    ws.extension_with_opinions("alpha", &[("a.md", "learn/README.md")]);
    ws.extension_with_opinions("zeta", &[("z.md", "learn/README.md")]);
    ws.install(&["zeta", "alpha"]);
    ws.project_config("domain: learn\n");

    let resolved = resolve(&ws);

    assert_eq!(resolved.paths(), vec!["learn/README.md"]);
    assert_eq!(resolved.files[0].source, "zeta");
    assert_eq!(resolved.warnings.len(), 1);
}

#[test]
fn test_normalized_targets_share_one_address() {
    let ws = TestWorkspace::new();
    ws.manifest(
        "slashy",
        "manifest_version: \"0.1\"\nname: slashy\ncontributions:\n  opinions:\n    - source: s.md\n      target: ./code//principles.md\n",
    );
    ws.extension_file("slashy", "s.md", &praxis_test_utils::opinion_doc("draft", "x"));
    ws.install(&["slashy"]);
    ws.project_config("domain: code\n");

    let resolved = resolve(&ws);

    assert_eq!(resolved.paths(), vec!["code/principles.md"]);
    assert_eq!(
        praxis_fs::NormalizedPath::new("./code//principles.md").as_str(),
        "code/principles.md"
    );
}
