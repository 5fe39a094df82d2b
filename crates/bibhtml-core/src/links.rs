/*
 * links.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Category codes and the pages they link to.

use std::collections::BTreeMap;

/// Path shared by every collaboration and service project.
pub const COLLABORATION_SERVICE_PATH: &str = "research/collaboration-service";

/// Project family of a category code, decided by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Technology research and development (`TRD1`..).
    Trd,
    /// Driving biomedical project (`DBP1`..).
    Dbp,
    /// Collaboration and service project (`CSP`).
    Csp,
}

impl Category {
    pub fn classify(code: &str) -> Option<Self> {
        if code.starts_with("TRD") {
            Some(Category::Trd)
        } else if code.starts_with("DBP") {
            Some(Category::Dbp)
        } else if code.starts_with("CSP") {
            Some(Category::Csp)
        } else {
            None
        }
    }

    /// CSS class of the anchor.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Trd => "trd_pub",
            Category::Dbp => "dbp_pub",
            Category::Csp => "csp_pub",
        }
    }
}

/// Category code to site-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTable {
    paths: BTreeMap<String, String>,
}

impl LinkTable {
    pub fn new() -> Self {
        LinkTable {
            paths: BTreeMap::new(),
        }
    }

    pub fn with_path(mut self, code: impl Into<String>, path: impl Into<String>) -> Self {
        self.paths.insert(code.into(), path.into());
        self
    }

    pub fn path(&self, code: &str) -> Option<&str> {
        self.paths.get(code).map(String::as_str)
    }

    /// Classify a code and find its page. `None` when the code is not linkable.
    pub fn resolve(&self, code: &str) -> Option<(Category, &str)> {
        let category = Category::classify(code)?;
        let path = match category {
            Category::Csp => COLLABORATION_SERVICE_PATH,
            Category::Trd | Category::Dbp => self.path(code)?,
        };
        Some((category, path))
    }
}

impl Default for LinkTable {
    /// The MMBioS project pages.
    fn default() -> Self {
        LinkTable::new()
            .with_path(
                "DBP1",
                "research/driving-biomedical-projects/glutamate-transport",
            )
            .with_path(
                "DBP2",
                "research/driving-biomedical-projects/synaptic-signaling",
            )
            .with_path("DBP3", "research/driving-biomedical-projects/dat-function")
            .with_path(
                "DBP4",
                "research/driving-biomedical-projects/t-cell-signaling",
            )
            .with_path(
                "DBP5",
                "research/driving-biomedical-projects/neural-circuits",
            )
            .with_path(
                "TRD1",
                "research/technology-research-and-development/molecular-modeling",
            )
            .with_path(
                "TRD2",
                "research/technology-research-and-development/cell-modeling",
            )
            .with_path(
                "TRD3",
                "research/technology-research-and-development/image-processing",
            )
            .with_path("CSP", COLLABORATION_SERVICE_PATH)
    }
}
