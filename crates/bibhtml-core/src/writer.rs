/*
 * writer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Year-grouped document assembly.

use crate::config::Config;
use crate::error::Result;
use crate::format::format_reference;
use crate::reference::Reference;
use crate::tags::TagIndex;
use std::path::Path;

const DOCUMENT_HEAD: &str = "<meta charset=\"UTF-8\">\n";
const SECTION_CLOSE: &str = "\t</ul>\n</div>\n";

/// Header and list opening for a year section.
///
/// No padding before `</span>`, unlike the old converter's output.
fn section_open(year: i32) -> String {
    format!(
        "<h1 id=\"{year}\"><span style=\"color: #993300;\">{year}</span>\n</h1>\n\
         <div class=\"biblio\">\n\t<ul>\n"
    )
}

/// Order references newest first. Ties keep their input order.
///
/// Fails if any reference has no issued year.
pub fn sort_by_year_desc(references: &[Reference]) -> Result<Vec<(i32, &Reference)>> {
    let mut dated = references
        .iter()
        .map(|r| r.year().map(|year| (year, r)))
        .collect::<Result<Vec<_>>>()?;
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated)
}

/// Render the whole document in memory.
pub fn render_document(
    references: &[Reference],
    tags: &TagIndex,
    config: &Config,
) -> Result<String> {
    let mut html = String::from(DOCUMENT_HEAD);
    let mut current_year = None;

    for (year, reference) in sort_by_year_desc(references)? {
        if current_year != Some(year) {
            if current_year.is_some() {
                html.push_str(SECTION_CLOSE);
            }
            html.push_str(&section_open(year));
            current_year = Some(year);
        }
        html.push_str(&format_reference(reference, tags, config)?);
    }

    if current_year.is_some() {
        html.push_str(SECTION_CLOSE);
    }
    Ok(html)
}

/// Write the document, replacing any existing file.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Wrote bibliography");
    Ok(())
}
