//! [`TestWorkspace`] builder for Praxis test scenarios.
//!
//! Layout inside the temporary directory:
//!
//! ```text
//! <root>/
//!   opinions/                 core opinion tree
//!   home/                     workspace root (PRAXIS_HOME)
//!     workspace-config.yaml
//!     extensions/<name>/praxis-extension.yaml
//!   project/                  project directory, praxis.yaml lives here
//! ```
//!
//! The project directory sits one level below `<root>`, so the upward
//! search for `opinions/` starting at the project finds the core tree.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Render an opinion document with minimal valid frontmatter.
pub fn opinion_doc(status: &str, body: &str) -> String {
    format!("---\nversion: \"1.0\"\nstatus: {status}\n---\n{body}\n")
}

/// A temporary Praxis setup with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use praxis_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.core_opinion("code/README.md", "active");
/// ws.extension_with_opinions("mobile-pack", &[("p.md", "code/subtypes/mobile/principles.md")]);
/// ws.install(&["mobile-pack"]);
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create the directory skeleton with an empty `opinions/` tree.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let ws = Self { temp_dir };
        fs::create_dir_all(ws.opinions_dir()).unwrap();
        fs::create_dir_all(ws.home().join("extensions")).unwrap();
        fs::create_dir_all(ws.project_dir()).unwrap();
        ws
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn opinions_dir(&self) -> PathBuf {
        self.root().join("opinions")
    }

    /// The workspace root handed to `WorkspaceContext`.
    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root().join("project")
    }

    pub fn extension_dir(&self, name: &str) -> PathBuf {
        self.home().join("extensions").join(name)
    }

    /// Write raw text into the core tree.
    pub fn core_file(&self, path: &str, text: &str) {
        write(&self.opinions_dir().join(path), text);
    }

    /// Write a core opinion with valid frontmatter and the given status.
    pub fn core_opinion(&self, path: &str, status: &str) {
        self.core_file(path, &opinion_doc(status, &format!("# {path}")));
    }

    /// Write raw text inside an extension directory.
    pub fn extension_file(&self, name: &str, path: &str, text: &str) {
        write(&self.extension_dir(name).join(path), text);
    }

    /// Write an extension's manifest verbatim.
    pub fn manifest(&self, name: &str, yaml: &str) {
        self.extension_file(name, "praxis-extension.yaml", yaml);
    }

    /// Create a valid extension contributing the given `(source, target)`
    /// opinion pairs. Each source file is written as an active opinion.
    pub fn extension_with_opinions(&self, name: &str, opinions: &[(&str, &str)]) {
        let mut yaml = format!(
            "manifest_version: \"0.1\"\nname: {name}\ndescription: test extension\ncontributions:\n  opinions:\n"
        );
        if opinions.is_empty() {
            yaml = format!("manifest_version: \"0.1\"\nname: {name}\n");
        }
        for (source, target) in opinions {
            yaml.push_str(&format!("    - source: {source}\n      target: {target}\n"));
            self.extension_file(
                name,
                source,
                &opinion_doc("active", &format!("# {target} from {name}")),
            );
        }
        self.manifest(name, &yaml);
    }

    /// Write `workspace-config.yaml` listing `names` as installed.
    pub fn install(&self, names: &[&str]) {
        let mut yaml = String::from("installed_extensions:\n");
        if names.is_empty() {
            yaml = String::from("installed_extensions: []\n");
        }
        for name in names {
            yaml.push_str(&format!("  - {name}\n"));
        }
        write(&self.home().join("workspace-config.yaml"), &yaml);
    }

    /// Write `praxis.yaml` in the project directory.
    pub fn project_config(&self, yaml: &str) {
        self.project_file("praxis.yaml", yaml);
    }

    pub fn project_file(&self, path: &str, text: &str) {
        write(&self.project_dir().join(path), text);
    }

    pub fn project_subdir(&self, path: &str) {
        fs::create_dir_all(self.project_dir().join(path)).unwrap();
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

fn write(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
    }
    fs::write(path, text).unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
}
