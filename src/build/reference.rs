//! Element reference parsing.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// A parsed path identifier pointing into one of the flat collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// `/sections/{i}`
    Section(usize),
    /// `/paragraphs/{i}`
    Paragraph(usize),
    /// `/tables/{i}`
    Table(usize),
}

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/([A-Za-z]+)/(\d+)$").unwrap())
}

impl ElementRef {
    /// Parse a path identifier.
    ///
    /// Well-formed identifiers for other collections (e.g. `/figures/0`)
    /// and anything that is not a path identifier at all are both reported
    /// as [`Error::UnrecognizedReferenceKind`].
    pub fn parse(reference: &str) -> Result<Self> {
        let unrecognized = || Error::UnrecognizedReferenceKind(reference.to_string());

        let caps = reference_pattern()
            .captures(reference)
            .ok_or_else(unrecognized)?;
        let index: usize = caps[2].parse().map_err(|_| unrecognized())?;

        match &caps[1] {
            "sections" => Ok(ElementRef::Section(index)),
            "paragraphs" => Ok(ElementRef::Paragraph(index)),
            "tables" => Ok(ElementRef::Table(index)),
            _ => Err(unrecognized()),
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Section(i) => write!(f, "/sections/{}", i),
            ElementRef::Paragraph(i) => write!(f, "/paragraphs/{}", i),
            ElementRef::Table(i) => write!(f, "/tables/{}", i),
        }
    }
}

impl std::str::FromStr for ElementRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
