//! Parsing of employee import lines.
//!
//! A line is `name,salary` for a regular employee or
//! `name,salary,manager,sub1,sub2,...` for a manager. Fields are split on
//! commas without quoting, and trailing empty fields are dropped, so
//! `Evert,3000,` is the same record as `Evert,3000`.

use crate::utils::error::{HrmError, Result};

pub const MANAGER_MARKER: &str = "manager";
pub const COMMENT_PREFIX: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRole {
    Staff,
    Manager { subordinates: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub salary: i32,
    pub role: ParsedRole,
}

/// Result of importing one resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportSummary),
    /// The resource could not be opened; nothing was read.
    ResourceNotFound { resource: String },
}

impl ImportOutcome {
    /// Number of records added, or `None` when the resource was missing.
    pub fn count(&self) -> Option<usize> {
        match self {
            ImportOutcome::Imported(summary) => Some(summary.imported),
            ImportOutcome::ResourceNotFound { .. } => None,
        }
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, ImportOutcome::ResourceNotFound { .. })
    }
}

/// Comment lines and blank lines carry no record.
pub fn is_skippable(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX) || line.trim().is_empty()
}

fn line_error(line: usize, reason: impl Into<String>) -> HrmError {
    HrmError::LineFormat {
        line,
        reason: reason.into(),
    }
}

pub fn split_fields(line_number: usize, line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| line_error(line_number, format!("Unreadable line: {}", e)))?;

    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    Ok(fields)
}

pub fn parse_line(line_number: usize, line: &str) -> Result<ParsedLine> {
    let mut fields = split_fields(line_number, line)?.into_iter();

    let (name, salary) = match (fields.next(), fields.next()) {
        (Some(name), Some(salary)) => (name, salary),
        _ => return Err(line_error(line_number, "Salary is missing")),
    };

    let salary: i32 = salary
        .parse()
        .map_err(|_| line_error(line_number, "Salary must be a number"))?;

    let role = match fields.next() {
        None => ParsedRole::Staff,
        Some(marker) if marker == MANAGER_MARKER => ParsedRole::Manager {
            subordinates: fields.collect(),
        },
        Some(other) => {
            return Err(line_error(line_number, format!("Unknown role '{}'", other)));
        }
    };

    Ok(ParsedLine { name, salary, role })
}
