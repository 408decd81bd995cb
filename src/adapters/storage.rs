use crate::domain::ports::{LineSink, LineSource, Lines};
use crate::utils::error::{HrmError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Filesystem storage; resource names are paths relative to `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn full_path(&self, resource: &str) -> PathBuf {
        self.base_path.join(resource)
    }
}

impl LineSource for LocalStorage {
    fn read_lines(&self, resource: &str) -> Result<Lines<'_>> {
        let full_path = self.full_path(resource);
        let file = File::open(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HrmError::ResourceNotFound {
                resource: full_path.display().to_string(),
            },
            _ => HrmError::IoError(e),
        })?;

        tracing::debug!("Reading lines from {}", full_path.display());
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

impl LineSink for LocalStorage {
    fn write_lines(&self, resource: &str, lines: &[String]) -> Result<()> {
        let full_path = self.full_path(resource);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&full_path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} line(s) to {}", lines.len(), full_path.display());
        Ok(())
    }
}

/// In-memory storage keyed by resource name.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    resources: RefCell<HashMap<String, Vec<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` under `resource`, one entry per line.
    pub fn insert(&self, resource: &str, content: &str) {
        self.resources.borrow_mut().insert(
            resource.to_string(),
            content.lines().map(str::to_string).collect(),
        );
    }

    pub fn get(&self, resource: &str) -> Option<Vec<String>> {
        self.resources.borrow().get(resource).cloned()
    }
}

impl LineSource for MemoryStorage {
    fn read_lines(&self, resource: &str) -> Result<Lines<'_>> {
        let lines = self
            .get(resource)
            .ok_or_else(|| HrmError::ResourceNotFound {
                resource: resource.to_string(),
            })?;
        Ok(Box::new(lines.into_iter().map(std::io::Result::Ok)))
    }
}

impl LineSink for MemoryStorage {
    fn write_lines(&self, resource: &str, lines: &[String]) -> Result<()> {
        self.resources
            .borrow_mut()
            .insert(resource.to_string(), lines.to_vec());
        Ok(())
    }
}
