/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion of a CSL-JSON bibliography to year-grouped HTML.
//!
//! Two exports of the same Mendeley library are combined:
//! - the CSL-JSON ("BibJSON") file, which holds the citation data, and
//! - the BibTeX file, which is only mined for `mendeley-tags`.
//!
//! They are joined on PMID and rendered newest year first, with each
//! project tag linked to its page on the MMBioS site.
//!
//! # Pipeline
//!
//! ```text
//!  BibTeX ──► TagIndex ─────────────┐
//!                                   ▼
//!  CSL-JSON ──► Vec<Reference> ──► render_document ──► output.html
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bibhtml_core::{Config, convert};
//!
//! convert("library.json".as_ref(), "library.bib".as_ref(), &Config::default())?;
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod links;
pub mod reference;
pub mod tags;
pub mod writer;

use std::path::{Path, PathBuf};

pub use config::Config;
pub use error::{Error, Result};
pub use links::{Category, LinkTable};
pub use reference::{Name, Reference, load_references, load_references_from_path};
pub use tags::TagIndex;
pub use writer::{render_document, write_document};

/// Run the whole conversion and return the path written.
///
/// Both inputs are loaded and the document is rendered before anything is
/// written, so a failure leaves no output behind.
pub fn convert(bibjson: &Path, bibtex: &Path, config: &Config) -> Result<PathBuf> {
    let tags = TagIndex::from_path(bibtex)?;
    let references = load_references_from_path(bibjson)?;
    tracing::debug!(
        references = references.len(),
        tagged = tags.len(),
        "Rendering bibliography"
    );

    let html = render_document(&references, &tags, config)?;
    write_document(&config.output_file, &html)?;
    Ok(config.output_file.clone())
}
