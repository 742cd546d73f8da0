//! Loading and writing YAML documents
//!
//! Inputs are read in full, fingerprinted with SHA-256 and parsed as a
//! single YAML document. Outputs are rendered before anything touches the
//! filesystem and land via write-then-rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{DocumentRole, MergeError};

/// A parsed input document with provenance
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Origin or override
    pub role: DocumentRole,

    /// Path the document was read from
    pub path: PathBuf,

    /// SHA-256 digest of raw file bytes
    pub digest: String,

    /// Document root; an empty input is an empty mapping
    pub value: Value,
}

impl SourceDocument {
    /// True when the file held no content to merge
    pub fn is_empty(&self) -> bool {
        matches!(&self.value, Value::Mapping(map) if map.is_empty())
    }
}

/// Read and parse a YAML file
pub fn load_document(role: DocumentRole, path: &Path) -> Result<SourceDocument, MergeError> {
    let bytes = fs::read(path).map_err(|source| MergeError::Read {
        role,
        path: path.to_path_buf(),
        source,
    })?;

    let digest = hex::encode(Sha256::digest(&bytes));

    let mut documents = parse_documents(&bytes).map_err(|source| MergeError::Parse {
        role,
        path: path.to_path_buf(),
        source,
    })?;

    let value = match documents.len() {
        0 => Value::Mapping(Mapping::new()),
        1 => null_as_empty(documents.remove(0)),
        count => {
            return Err(MergeError::MultipleDocuments {
                role,
                path: path.to_path_buf(),
                count,
            })
        }
    };

    debug!(
        role = role.as_str(),
        path = %path.display(),
        digest = %digest,
        bytes = bytes.len(),
        "loaded document"
    );

    Ok(SourceDocument {
        role,
        path: path.to_path_buf(),
        digest,
        value,
    })
}

/// Parse every document in a YAML stream.
///
/// `<<` merge keys are resolved so inherited entries take part in the
/// deep merge like any other key.
pub fn parse_documents(bytes: &[u8]) -> Result<Vec<Value>, serde_yaml::Error> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(bytes) {
        let mut value = Value::deserialize(document)?;
        value.apply_merge()?;
        documents.push(value);
    }
    Ok(documents)
}

/// Serialize a merged document to YAML text
pub fn render_document(value: &Value) -> Result<String, MergeError> {
    serde_yaml::to_string(value).map_err(MergeError::Serialize)
}

/// Write a document to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn write_document(path: &Path, value: &Value) -> Result<usize, MergeError> {
    let yaml = render_document(value)?;
    let write_err = |source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Write to temp file first
    let temp_path = temp_path_for(path);
    if let Err(source) = fs::write(&temp_path, &yaml) {
        discard_temp(&temp_path);
        return Err(write_err(source));
    }

    // Atomic rename
    if let Err(source) = fs::rename(&temp_path, path) {
        discard_temp(&temp_path);
        return Err(write_err(source));
    }

    debug!(path = %path.display(), bytes = yaml.len(), "wrote merged document");
    Ok(yaml.len())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard_temp(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
        }
    }
}

fn null_as_empty(value: Value) -> Value {
    match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    }
}
