//! Load → merge → write pipeline
//!
//! The pipeline is all-or-nothing: both inputs are loaded and the merged
//! document is rendered before the output path is touched.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::{load_document, write_document, SourceDocument};
use crate::error::{DocumentRole, MergeError};
use crate::merge::merge;

/// Provenance of one merged input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub role: DocumentRole,
    pub path: PathBuf,
    pub digest: String,
    pub empty: bool,
}

impl From<&SourceDocument> for SourceSummary {
    fn from(doc: &SourceDocument) -> Self {
        Self {
            role: doc.role,
            path: doc.path.clone(),
            digest: doc.digest.clone(),
            empty: doc.is_empty(),
        }
    }
}

/// Outcome of a successful merge
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Contributing inputs in precedence order
    pub sources: Vec<SourceSummary>,

    /// Where the merged document was written
    pub output: PathBuf,

    /// Size of the merged document in bytes
    pub bytes_written: usize,
}

/// Merge `override_path` onto `origin_path` and write the result to `output_path`.
pub fn merge_files(
    origin_path: &Path,
    override_path: &Path,
    output_path: &Path,
) -> Result<MergeReport, MergeError> {
    let origin = load_document(DocumentRole::Origin, origin_path)?;
    let overlay = load_document(DocumentRole::Override, override_path)?;

    if overlay.is_empty() {
        debug!(path = %overlay.path.display(), "override document is empty");
    }

    let merged = merge(&origin.value, &overlay.value);
    let bytes_written = write_document(output_path, &merged)?;

    info!(
        origin = %origin.path.display(),
        override_path = %overlay.path.display(),
        output = %output_path.display(),
        bytes = bytes_written,
        "merged YAML documents"
    );

    Ok(MergeReport {
        sources: vec![SourceSummary::from(&origin), SourceSummary::from(&overlay)],
        output: output_path.to_path_buf(),
        bytes_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_merge_files_end_to_end() {
        let dir = TempDir::new().unwrap();
        let origin = write(&dir, "origin.yaml", "server:\n  host: localhost\n  port: 8080\n");
        let overlay = write(&dir, "override.yaml", "server:\n  port: 9090\n  debug: true\n");
        let output = dir.path().join("output.yaml");

        let report = merge_files(&origin, &overlay, &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "server:\n  host: localhost\n  port: 9090\n  debug: true\n");
        assert_eq!(report.bytes_written, contents.len());
        assert_eq!(report.output, output);
    }

    #[test]
    fn test_report_sources_in_precedence_order() {
        let dir = TempDir::new().unwrap();
        let origin = write(&dir, "origin.yaml", "a: 1\n");
        let overlay = write(&dir, "override.yaml", "");
        let output = dir.path().join("output.yaml");

        let report = merge_files(&origin, &overlay, &output).unwrap();

        assert_eq!(report.sources.len(), 2);
        assert_eq!(report.sources[0].role, DocumentRole::Origin);
        assert_eq!(report.sources[0].path, origin);
        assert!(!report.sources[0].empty);
        assert_eq!(report.sources[1].role, DocumentRole::Override);
        assert!(report.sources[1].empty);
    }

    #[test]
    fn test_empty_override_keeps_origin() {
        let dir = TempDir::new().unwrap();
        let origin = write(&dir, "origin.yaml", "name: demo\nitems:\n- 1\n- 2\n");
        let overlay = write(&dir, "override.yaml", "");
        let output = dir.path().join("output.yaml");

        merge_files(&origin, &overlay, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "name: demo\nitems:\n- 1\n- 2\n"
        );
    }

    #[test]
    fn test_missing_origin_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let overlay = write(&dir, "override.yaml", "a: 1\n");
        let output = dir.path().join("output.yaml");

        let result = merge_files(&dir.path().join("missing.yaml"), &overlay, &output);

        assert!(matches!(result, Err(MergeError::Read { role: DocumentRole::Origin, .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_override_keeps_existing_output() {
        let dir = TempDir::new().unwrap();
        let origin = write(&dir, "origin.yaml", "a: 1\n");
        let overlay = write(&dir, "override.yaml", "a: [unclosed\n");
        let output = write(&dir, "output.yaml", "previous: run\n");

        let result = merge_files(&origin, &overlay, &output);

        assert!(matches!(result, Err(MergeError::Parse { role: DocumentRole::Override, .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous: run\n");
    }
}
