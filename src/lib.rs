//! YAML Merge - deep-merge an override document onto an origin document
//!
//! Nested mappings merge key by key; sequences, scalars and type changes
//! take the override's value outright.

pub mod document;
pub mod error;
pub mod logging;
pub mod merge;
pub mod pipeline;

pub use document::{load_document, render_document, write_document, SourceDocument};
pub use error::{DocumentRole, ErrorKind, MergeError};
pub use merge::{deep_merge, merge, merge_layers};
pub use pipeline::{merge_files, MergeReport, SourceSummary};
