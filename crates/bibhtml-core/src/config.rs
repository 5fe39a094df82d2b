/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion settings.

use crate::links::LinkTable;
use std::path::PathBuf;

/// Settings for one conversion run.
///
/// `Config::default()` reproduces the MMBioS publications page; the CLI
/// never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site root that tag paths are appended to, without a trailing slash.
    pub site_url: String,
    /// Where the document is written, relative to the working directory.
    pub output_file: PathBuf,
    /// Authors listed before "et al".
    pub max_authors: usize,
    pub links: LinkTable,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_url: "http://mmbios.org".to_string(),
            output_file: PathBuf::from("output.html"),
            max_authors: 6,
            links: LinkTable::default(),
        }
    }
}

impl Config {
    /// Absolute URL of a site-relative path.
    pub fn site_link(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path)
    }
}
