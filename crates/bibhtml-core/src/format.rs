/*
 * format.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering of a single reference as an HTML list item.
//!
//! The markup matches the MMBioS publications page stylesheet: every field
//! sits in a `span` with a class the site styles. Field values are inserted
//! as-is, since titles in the export already carry HTML entities.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::reference::{Name, Reference, StringOrNumber};
use crate::tags::TagIndex;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").unwrap());

/// Author list: the first `max_authors` labels, then "et al" if any remain.
pub fn format_authors(id: &str, authors: &[Name], max_authors: usize) -> Result<String> {
    let mut parts = authors
        .iter()
        .take(max_authors)
        .map(|author| {
            author
                .citation_label()
                .map(|label| format!("<span class=\"author\">{}</span>", label))
                .ok_or_else(|| Error::missing(id, "author"))
        })
        .collect::<Result<Vec<_>>>()?;

    if authors.len() > max_authors {
        parts.push("et al".to_string());
    }
    Ok(parts.join(", "))
}

/// Strip embedded markup and one trailing period.
///
/// Stripping is pattern based, so a lone `<` followed later by `>` in plain
/// text is removed too.
pub fn clean_title(title: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(title, "");
    match stripped.strip_suffix('.') {
        Some(rest) => rest.to_string(),
        None => stripped.into_owned(),
    }
}

pub fn format_volume_issue(volume: &StringOrNumber, issue: Option<&StringOrNumber>) -> String {
    match issue {
        Some(issue) => format!("<span class=\"volume\">{}({}):</span>", volume, issue),
        None => format!("<span class=\"volume\">{}:</span>", volume),
    }
}

/// Anchors for the project tags of a PMID, each followed by a space.
pub fn format_tag_links(pmid: &str, tags: &TagIndex, config: &Config) -> String {
    let mut links = String::new();
    for code in tags.get(pmid).unwrap_or_default() {
        let Some((category, path)) = config.links.resolve(code) else {
            tracing::warn!(pmid, code = %code, "No project page for tag, leaving it unlinked");
            continue;
        };
        links.push_str(&format!(
            "<a href=\"{}\" class={}>{}</a> ",
            config.site_link(path),
            category.css_class(),
            code
        ));
    }
    links
}

/// Citation sentence for one reference.
pub fn format_citation(reference: &Reference, tags: &TagIndex, config: &Config) -> Result<String> {
    let id = reference.id.as_str();

    let year = format!("<span class=\"pubdate\">({})</span>", reference.year()?);
    let authors = format_authors(id, reference.authors()?, config.max_authors)?;
    let journal = format!(
        "<span class=\"journal\">{}</span>",
        reference.container_title()?
    );
    let url = reference.link()?;
    let title = format!(
        "<span class=\"title\" style=\"color: #2ebbbd;\"><a href = \"{}\">{}</a></span>",
        url,
        clean_title(reference.title()?)
    );
    let vol_issue = format_volume_issue(reference.volume()?, reference.issue.as_ref());
    let pages = format!("<span class=\"mpgn\">{}</span>", reference.page()?);
    let pmid = reference.pmid()?;
    let tag_links = format_tag_links(&pmid, tags, config);
    let doi = reference.doi()?;

    Ok(format!(
        "<p>{}. {} {}. <i>{}</i>. {}{}. doi: {}. <span class=\"pmid\">PMID:{}</span> {}",
        authors, year, title, journal, vol_issue, pages, doi, pmid, tag_links
    ))
}

/// List item wrapping the citation sentence.
pub fn format_reference(reference: &Reference, tags: &TagIndex, config: &Config) -> Result<String> {
    let citation = format_citation(reference, tags, config)?;
    Ok(format!(
        "\t\t<li>\n\t\t\t{}\n\t\t\t</p>\n\t\t</li>\n",
        citation
    ))
}
