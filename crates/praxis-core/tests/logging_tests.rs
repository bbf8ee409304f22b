//! Resolution warnings are logged as well as returned

use std::io;
use std::sync::{Arc, Mutex};

use praxis_core::{Domain, OpinionsResolver, ProjectContext, ResolvedOpinions};
use praxis_extensions::WorkspaceContext;
use praxis_test_utils::TestWorkspace;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Resolve with a capturing subscriber; returns the result and the log text.
fn resolve_logged(ws: &TestWorkspace, domain: Domain) -> (ResolvedOpinions, String) {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    let workspace = WorkspaceContext::new(ws.home(), Vec::new());
    let resolver = OpinionsResolver::new(workspace, ws.project_dir());
    let resolved = tracing::subscriber::with_default(subscriber, || {
        resolver.resolve(&ProjectContext::new(domain))
    });

    let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
    (resolved, text)
}

#[test]
fn test_deprecated_warning_is_logged() {
    let ws = TestWorkspace::new();
    ws.core_opinion("learn/README.md", "deprecated");

    let (resolved, logs) = resolve_logged(&ws, Domain::Learn);

    assert_eq!(resolved.warnings.len(), 1);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("opinion 'learn/README.md' is deprecated"), "{logs}");
}

#[test]
fn test_invalid_frontmatter_warning_is_logged() {
    let ws = TestWorkspace::new();
    ws.core_file("code/README.md", "---\nstatus: bogus\n---\nbody\n");

    let (resolved, logs) = resolve_logged(&ws, Domain::Code);

    assert_eq!(resolved.files.len(), 1);
    assert_eq!(resolved.warnings.len(), 1);
    assert!(
        logs.contains("opinion 'code/README.md' has invalid frontmatter"),
        "{logs}"
    );
}

#[test]
fn test_every_returned_warning_appears_in_logs() {
    let ws = TestWorkspace::new();
    ws.core_opinion("code/README.md", "deprecated");
    ws.core_file("code/principles.md", "---\nstatus: [\n---\nbody\n");

    let (resolved, logs) = resolve_logged(&ws, Domain::Code);

    assert_eq!(resolved.warnings.len(), 2, "{:?}", resolved.warnings);
    for warning in &resolved.warnings {
        assert!(logs.contains(warning.as_str()), "missing {warning:?} in {logs}");
    }
}
