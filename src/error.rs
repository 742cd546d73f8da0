//! Error taxonomy for loading, merging and writing documents

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the merge a document plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// Base document
    Origin,
    /// Document whose values take precedence
    Override,
}

impl DocumentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRole::Origin => "origin",
            DocumentRole::Override => "override",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the load/merge/write pipeline
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to read {role} document {}: {source}", .path.display())]
    Read {
        role: DocumentRole,
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse {role} document {}: {source}", .path.display())]
    Parse {
        role: DocumentRole,
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("{role} document {} contains {count} YAML documents, expected one", .path.display())]
    MultipleDocuments {
        role: DocumentRole,
        path: PathBuf,
        count: usize,
    },

    #[error("failed to serialize merged document: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write output {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Coarse classification of failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong command-line arguments
    Usage,
    /// Missing, unreadable or unwritable file
    Io,
    /// Malformed or unrepresentable YAML
    Parse,
}

impl ErrorKind {
    /// Process exit status reported for this kind.
    ///
    /// Load and write failures are reported on stdout and still exit 0;
    /// only a usage error changes the exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Usage => 1,
            ErrorKind::Io | ErrorKind::Parse => 0,
        }
    }
}

impl MergeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MergeError::Read { .. } | MergeError::Write { .. } => ErrorKind::Io,
            MergeError::Parse { .. }
            | MergeError::MultipleDocuments { .. }
            | MergeError::Serialize(_) => ErrorKind::Parse,
        }
    }
}
