//! JSONL file store for validation results.
//!
//! Each [`ValidationResult`] is serialized as a single JSON line and
//! appended to the file via a buffered writer. The file grows run by run;
//! lines are self-contained and carry their own run id and timestamp.

use panel_domain::ValidationResult;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL result store.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line and
/// on `Drop`.
pub struct JsonlResultWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlResultWriter {
    /// Open (or create) the store at the given path.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened; persistence is best-effort and never blocks a run.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create results directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open results file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one result as a JSON line.
    pub fn append(&self, result: &ValidationResult) -> std::io::Result<()> {
        let line = serde_json::to_string(result)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| std::io::Error::other("results writer poisoned"))?;
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

impl Drop for JsonlResultWriter {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use panel_domain::aggregate::fallback_result;

    #[test]
    fn test_appends_one_line_per_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        let writer = JsonlResultWriter::new(&path).unwrap();

        let now = DateTime::from_timestamp(1_756_000_000, 0).unwrap();
        writer.append(&fallback_result("First", "r1", 10, now)).unwrap();
        writer.append(&fallback_result("Second", "r2", 20, now)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["proposal_name"], "First");
        assert_eq!(first["run_id"], "VAL_1756000000");
        assert!(first["cluster_scores"].is_object());
        assert!(first["timestamp"].is_string());
    }

    #[test]
    fn test_reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        let now = DateTime::from_timestamp(1_756_000_000, 0).unwrap();

        {
            let writer = JsonlResultWriter::new(&path).unwrap();
            writer.append(&fallback_result("First", "r", 10, now)).unwrap();
        }
        {
            let writer = JsonlResultWriter::new(&path).unwrap();
            writer.append(&fallback_result("Second", "r", 10, now)).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("results.jsonl");
        assert!(JsonlResultWriter::new(&path).is_some());
        assert!(path.parent().unwrap().exists());
    }
}
