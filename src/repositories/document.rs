//! Document repository: file-system access for workspace documents.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use regex::Regex;

use crate::error::AppError;

/// Repository for reading, numbering, and writing workspace files.
#[derive(Clone, Default)]
pub struct DocumentRepository;

crate::from_context!(DocumentRepository);

impl DocumentRepository {
    /// Next free serial number for `<prefix>_<n>_...` files in `dir`.
    ///
    /// Only the top level of `dir` is considered. With an extension, only
    /// names ending in it count; without one, any name does.
    pub fn next_number(
        &self,
        dir: &Path,
        prefix: &str,
        extension: Option<&str>,
    ) -> Result<u64, AppError> {
        if !dir.is_dir() {
            return Ok(1);
        }

        let pattern = match extension {
            Some(ext) => format!(r"^{}_([0-9]+)_.*{}$", regex::escape(prefix), regex::escape(ext)),
            None => format!(r"^{}_([0-9]+)_", regex::escape(prefix)),
        };
        let re = Regex::new(&pattern)
            .map_err(|e| AppError::InvalidPath(format!("bad document prefix '{prefix}': {e}")))?;

        let exhausted = || AppError::NumberingExhausted {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        };

        let mut max = 0u64;
        for entry in fs::read_dir(dir).map_err(|e| AppError::io(dir, e))? {
            let entry = entry.map_err(|e| AppError::io(dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(caps) = re.captures(&name) else {
                continue;
            };
            // ASCII digits only, so a parse failure means the value is too large.
            let n = caps[1].parse::<u64>().map_err(|_| exhausted())?;
            max = max.max(n);
        }

        max.checked_add(1).ok_or_else(exhausted)
    }

    /// Create a new file; fails if it already exists.
    pub fn create(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| AppError::io(path, e))?;
        file.write_all(content.as_bytes()).map_err(|e| AppError::io(path, e))
    }

    /// Create or truncate a file inside the workspace structure.
    pub fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|e| AppError::io(path, e))
    }

    /// Overwrite a generated output artifact.
    pub fn write_output(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|source| AppError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Append ``- `<filename>`: <description>`` to a summary file.
    ///
    /// Returns `false` without writing when the summary does not exist.
    pub fn append_summary_entry(
        &self,
        summary: &Path,
        filename: &str,
        description: &str,
    ) -> Result<bool, AppError> {
        if !summary.is_file() {
            return Ok(false);
        }
        let mut file = OpenOptions::new()
            .append(true)
            .open(summary)
            .map_err(|e| AppError::io(summary, e))?;
        writeln!(file, "- `{}`: {}", filename, description)
            .map_err(|e| AppError::io(summary, e))?;
        Ok(true)
    }

    /// Copy a file, preserving permissions.
    pub fn copy(&self, from: &Path, to: &Path) -> Result<u64, AppError> {
        fs::copy(from, to).map_err(|e| AppError::io(to, e))
    }

    pub fn create_dir_all(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_number_empty_or_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DocumentRepository;
        assert_eq!(repo.next_number(dir.path(), "dl", Some(".md")).unwrap(), 1);
        assert_eq!(
            repo.next_number(&dir.path().join("missing"), "dl", Some(".md"))
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_next_number_uses_max_not_count() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["dl_1_a.md", "dl_7_b.md", "dl_3_c.md", "_summary.md", "op_9_x.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let repo = DocumentRepository;
        assert_eq!(repo.next_number(dir.path(), "dl", Some(".md")).unwrap(), 8);
        assert_eq!(repo.next_number(dir.path(), "op", Some(".md")).unwrap(), 10);
    }

    #[test]
    fn test_next_number_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("art_4_diagram.png"), "").unwrap();
        fs::write(dir.path().join("art_2_notes.md"), "").unwrap();
        let repo = DocumentRepository;
        assert_eq!(repo.next_number(dir.path(), "art", None).unwrap(), 5);
        assert_eq!(repo.next_number(dir.path(), "art", Some(".md")).unwrap(), 3);
    }

    #[test]
    fn test_next_number_past_u32() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("op_4294967295_x.md"), "").unwrap();
        let repo = DocumentRepository;
        assert_eq!(
            repo.next_number(dir.path(), "op", Some(".md")).unwrap(),
            4_294_967_296
        );
    }

    #[test]
    fn test_next_number_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        let repo = DocumentRepository;

        fs::write(dir.path().join(format!("op_{}_x.md", u64::MAX)), "").unwrap();
        assert!(matches!(
            repo.next_number(dir.path(), "op", Some(".md")),
            Err(AppError::NumberingExhausted { .. })
        ));

        fs::write(dir.path().join("art_99999999999999999999999_x.png"), "").unwrap();
        assert!(matches!(
            repo.next_number(dir.path(), "art", None),
            Err(AppError::NumberingExhausted { .. })
        ));
    }

    #[test]
    fn test_create_refuses_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dl_1_a.md");
        let repo = DocumentRepository;
        repo.create(&path, "first").unwrap();
        assert!(matches!(repo.create(&path, "second"), Err(AppError::Io { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_append_summary_entry() {
        let dir = tempfile::tempdir().unwrap();
        let summary = dir.path().join("_summary.md");
        let repo = DocumentRepository;

        assert!(!repo
            .append_summary_entry(&summary, "dl_1_a.md", "desc")
            .unwrap());

        fs::write(&summary, "# Summary\n").unwrap();
        assert!(repo
            .append_summary_entry(&summary, "dl_1_a.md", "Auth design")
            .unwrap());
        assert_eq!(
            fs::read_to_string(&summary).unwrap(),
            "# Summary\n- `dl_1_a.md`: Auth design\n"
        );
    }

    #[test]
    fn test_write_output_failure_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("reference_graph.csv");
        let err = DocumentRepository.write_output(&path, "x").unwrap_err();
        assert!(matches!(err, AppError::OutputWriteFailed { .. }));
    }
}
