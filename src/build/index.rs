//! Lookup from path identifier to raw analysis records.

use crate::analysis::{AnalyzeResult, RawParagraph, RawSection, RawTable};
use crate::error::{Error, Result};

use super::ElementRef;

/// Read-only index over the flat collections of one analysis result.
///
/// Collections are addressed by position, so the index borrows the
/// result's vectors directly; a path identifier `/paragraphs/{i}` resolves
/// to `paragraphs[i]`.
#[derive(Debug, Clone, Copy)]
pub struct ElementIndex<'a> {
    paragraphs: &'a [RawParagraph],
    sections: &'a [RawSection],
    tables: &'a [RawTable],
}

impl<'a> ElementIndex<'a> {
    /// Build the index for an analysis result.
    pub fn new(result: &'a AnalyzeResult) -> Self {
        Self {
            paragraphs: &result.paragraphs,
            sections: &result.sections,
            tables: &result.tables,
        }
    }

    /// Resolve a paragraph reference.
    pub fn paragraph(&self, index: usize) -> Result<&'a RawParagraph> {
        self.paragraphs
            .get(index)
            .ok_or_else(|| missing(ElementRef::Paragraph(index)))
    }

    /// Resolve a section reference.
    pub fn section(&self, index: usize) -> Result<&'a RawSection> {
        self.sections
            .get(index)
            .ok_or_else(|| missing(ElementRef::Section(index)))
    }

    /// Resolve a table reference.
    pub fn table(&self, index: usize) -> Result<&'a RawTable> {
        self.tables
            .get(index)
            .ok_or_else(|| missing(ElementRef::Table(index)))
    }

    /// Sections with their path identifiers, in collection order.
    pub fn sections(&self) -> impl Iterator<Item = (ElementRef, &'a RawSection)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (ElementRef::Section(i), s))
    }
}

fn missing(reference: ElementRef) -> Error {
    Error::MissingReference(reference.to_string())
}
