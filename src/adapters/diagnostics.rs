use crate::domain::ports::{DiagnosticSink, LineDiagnostic};

/// Logs each skipped import line as a warning and keeps a count.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    reported: usize,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: LineDiagnostic) {
        self.reported += 1;
        tracing::warn!("⚠️ Skipping '{}': {}", diagnostic.content, diagnostic);
    }
}
