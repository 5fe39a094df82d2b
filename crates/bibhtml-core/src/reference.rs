/*
 * reference.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reference types for CSL-JSON bibliographic data.
//!
//! Only the variables that appear in the rendered citation are modelled as
//! fields. Everything else in a record is kept in [`Reference::other`] so
//! that exports with extra Mendeley metadata still load.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// A bibliographic reference in CSL-JSON format.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// Identifier of the record within the export.
    /// CSL-JSON allows both string and integer IDs, so we accept both.
    #[serde(default, deserialize_with = "deserialize_string_or_int")]
    pub id: String,

    pub title: Option<String>,
    #[serde(rename = "container-title")]
    pub container_title: Option<String>,
    pub volume: Option<StringOrNumber>,
    pub issue: Option<StringOrNumber>,
    pub page: Option<StringOrNumber>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "PMID")]
    pub pmid: Option<StringOrNumber>,
    /// Link to the document. Mendeley may store several space-separated URLs.
    #[serde(rename = "URL")]
    pub url: Option<String>,

    pub author: Option<Vec<Name>>,

    pub issued: Option<DateVariable>,

    // Other fields captured in a map for extensibility
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

/// A string or number value (CSL allows both for some fields).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::String(s) => f.write_str(s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Deserialize a value that can be either a string or an integer into a String.
fn deserialize_string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("expected string or number for id")),
    }
}

/// A name in CSL-JSON format.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Name {
    /// Family name (surname).
    pub family: Option<String>,

    /// Given name (first name).
    pub given: Option<String>,

    /// Literal name (for institutional names or when family/given doesn't apply).
    pub literal: Option<String>,
}

impl Name {
    /// Initials of the given name: its ASCII capitals, in order.
    ///
    /// `"John A."` gives `"JA"`, `"Jean-Luc"` gives `"JL"`.
    pub fn initials(&self) -> Option<String> {
        self.given
            .as_ref()
            .map(|given| given.chars().filter(|c| c.is_ascii_uppercase()).collect())
    }

    /// Label used in the author list: "Surname INITIALS" for a person,
    /// the literal for an organisation.
    ///
    /// A name needs both a family and a given part to count as a person.
    pub fn citation_label(&self) -> Option<String> {
        match (&self.family, self.initials()) {
            (Some(family), Some(initials)) => Some(format!("{} {}", family, initials)),
            _ => self.literal.clone(),
        }
    }
}

/// A date variable in CSL-JSON format.
#[derive(Debug, Clone, Deserialize)]
pub struct DateVariable {
    /// Date parts: [[year, month, day], [end_year, end_month, end_day]] for ranges.
    /// Values can be integers or strings (CSL-JSON allows both).
    #[serde(
        rename = "date-parts",
        deserialize_with = "deserialize_date_parts",
        default
    )]
    pub date_parts: Option<Vec<Vec<i32>>>,
}

impl DateVariable {
    /// First component of the first date, if any.
    pub fn year(&self) -> Option<i32> {
        self.date_parts
            .as_ref()
            .and_then(|parts| parts.first())
            .and_then(|p| p.first())
            .copied()
    }
}

/// Custom deserializer for date-parts that accepts both strings and integers.
fn deserialize_date_parts<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Vec<i32>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parts: Option<Vec<Vec<DatePartValue>>> = Option::deserialize(deserializer)?;
    Ok(parts.map(|outer| {
        outer
            .into_iter()
            .map(|inner| inner.into_iter().map(|v| v.0).collect())
            .collect()
    }))
}

/// A date part value that can be either a string or integer.
struct DatePartValue(i32);

impl<'de> Deserialize<'de> for DatePartValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct DatePartValueVisitor;

        impl<'de> Visitor<'de> for DatePartValueVisitor {
            type Value = DatePartValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or string representing a date part")
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i32::try_from(v)
                    .map(DatePartValue)
                    .map_err(|_| de::Error::custom(format!("date part out of range: {}", v)))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i32::try_from(v)
                    .map(DatePartValue)
                    .map_err(|_| de::Error::custom(format!("date part out of range: {}", v)))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.trim()
                    .parse::<i32>()
                    .map(DatePartValue)
                    .map_err(|_| de::Error::custom(format!("invalid date part: {}", v)))
            }
        }

        deserializer.deserialize_any(DatePartValueVisitor)
    }
}

impl Reference {
    fn require<'a, T>(&self, field: &str, value: Option<&'a T>) -> Result<&'a T> {
        value.ok_or_else(|| Error::missing(&self.id, field))
    }

    /// Publication year, from `issued.date-parts[0][0]`.
    pub fn year(&self) -> Result<i32> {
        self.issued
            .as_ref()
            .and_then(DateVariable::year)
            .ok_or_else(|| Error::missing(&self.id, "issued"))
    }

    pub fn authors(&self) -> Result<&[Name]> {
        self.require("author", self.author.as_ref()).map(Vec::as_slice)
    }

    pub fn title(&self) -> Result<&str> {
        self.require("title", self.title.as_ref()).map(String::as_str)
    }

    pub fn container_title(&self) -> Result<&str> {
        self.require("container-title", self.container_title.as_ref())
            .map(String::as_str)
    }

    pub fn volume(&self) -> Result<&StringOrNumber> {
        self.require("volume", self.volume.as_ref())
    }

    pub fn page(&self) -> Result<&StringOrNumber> {
        self.require("page", self.page.as_ref())
    }

    pub fn doi(&self) -> Result<&str> {
        self.require("DOI", self.doi.as_ref()).map(String::as_str)
    }

    /// PubMed identifier as it appears in the export.
    pub fn pmid(&self) -> Result<String> {
        self.require("PMID", self.pmid.as_ref()).map(ToString::to_string)
    }

    /// The document link: the first space-separated token of `URL`.
    pub fn link(&self) -> Result<&str> {
        let url = self.require("URL", self.url.as_ref())?;
        Ok(url.split(' ').next().unwrap_or(url))
    }
}

/// Parse a CSL-JSON array of references.
pub fn load_references(json: &str) -> Result<Vec<Reference>> {
    let references: Vec<Reference> = serde_json::from_str(json)?;
    tracing::debug!(count = references.len(), "Loaded CSL-JSON references");
    Ok(references)
}

/// Read and parse a CSL-JSON file.
pub fn load_references_from_path(path: &Path) -> Result<Vec<Reference>> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::JsonRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_references(&json)
}
