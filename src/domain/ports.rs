use crate::utils::error::Result;
use std::fmt;

/// Lazily produced lines of a resource.
pub type Lines<'a> = Box<dyn Iterator<Item = std::io::Result<String>> + 'a>;

pub trait LineSource {
    /// Returns `HrmError::ResourceNotFound` when the resource does not exist.
    fn read_lines(&self, resource: &str) -> Result<Lines<'_>>;
}

pub trait LineSink {
    /// Creates the resource, or truncates it if it already exists.
    fn write_lines(&self, resource: &str, lines: &[String]) -> Result<()>;
}

/// A skipped import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.reason)
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: LineDiagnostic);
}

impl DiagnosticSink for Vec<LineDiagnostic> {
    fn report(&mut self, diagnostic: LineDiagnostic) {
        self.push(diagnostic);
    }
}
