/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for bibliography conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bibhtml-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a bibliography.
///
/// Only the two load failures are anticipated by the input formats. A
/// missing field is a data error in an otherwise well-formed record and
/// fails the whole conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The BibTeX export could not be read.
    #[error("Cannot load BibTeX file: {}: {source}", .path.display())]
    BibtexLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSL-JSON file could not be read.
    #[error("Cannot load JSON file: {}: {source}", .path.display())]
    JsonRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSL-JSON content is not an array of reference objects.
    #[error("Cannot load JSON file: {0}")]
    JsonLoad(#[from] serde_json::Error),

    /// A field needed to render the reference is absent.
    #[error("Reference '{id}' missing required field '{field}'")]
    MissingRequiredField { id: String, field: String },

    /// Writing the output document failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn missing(id: &str, field: &str) -> Self {
        Error::MissingRequiredField {
            id: id.to_string(),
            field: field.to_string(),
        }
    }

    /// Whether this error came from loading one of the two inputs.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::BibtexLoad { .. } | Error::JsonRead { .. } | Error::JsonLoad(_)
        )
    }
}
