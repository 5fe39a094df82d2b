/*
 * tags.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Mendeley tag extraction from a BibTeX export.
//!
//! The CSL-JSON export drops Mendeley's tags, so they are recovered from the
//! BibTeX file by line matching. A `mendeley-tags` line sets the pending tag
//! list and the next `pmid` line claims it:
//!
//! ```text
//! mendeley-tags = {id-TRD1,id-DBP2},
//! pmid = {12345},
//! ```
//!
//! This is not a BibTeX parser. It relies on each field sitting on its own
//! line and on Mendeley writing fields in alphabetical order.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

const TAGS_MARKER: &str = "mendeley-tags";
const PMID_MARKER: &str = "pmid";

/// Category codes per PubMed identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<String>>,
}

impl TagIndex {
    /// Build the index from BibTeX text.
    pub fn parse(bibtex: &str) -> Self {
        let mut tags = BTreeMap::new();
        let mut pending: Option<Vec<String>> = None;

        for line in bibtex.lines() {
            if let Some(value) = value_after(line, TAGS_MARKER) {
                let codes = parse_tag_list(value);
                pending = (!codes.is_empty()).then_some(codes);
            } else if let Some(value) = value_after(line, PMID_MARKER) {
                let pmid: String = value.chars().filter(char::is_ascii_digit).collect();
                if let Some(codes) = pending.take()
                    && !pmid.is_empty()
                {
                    tags.insert(pmid, codes);
                }
            }
        }

        tracing::debug!(entries = tags.len(), "Extracted Mendeley tags");
        TagIndex { tags }
    }

    /// Read and parse a BibTeX export.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bibtex = std::fs::read_to_string(path).map_err(|source| Error::BibtexLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&bibtex))
    }

    /// Category codes recorded for a PMID, in export order.
    pub fn get(&self, pmid: &str) -> Option<&[String]> {
        self.tags.get(pmid).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Entries ordered by PMID.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        TagIndex {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Text following `marker` on the line, if the marker occurs.
fn value_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|at| &line[at + marker.len()..])
}

/// Split a tag field value into category codes.
///
/// Accepts `= {id-TRD1,id-DBP2},` as well as `: - id-TRD1`.
fn parse_tag_list(value: &str) -> Vec<String> {
    let value = value
        .trim()
        .trim_start_matches(['=', ':'])
        .trim()
        .trim_end_matches(',')
        .trim_start_matches('{')
        .trim_end_matches('}');

    value
        .split(',')
        .map(|item| item.trim().trim_start_matches('-').trim())
        .filter(|item| !item.is_empty())
        .map(|item| item.split('-').nth(1).unwrap_or(item).to_string())
        .collect()
}
