//! Paragraph and section records.

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a paragraph by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphRole {
    /// Ordinary body text
    Body,
    /// Document title
    Title,
    /// Heading that opens a section
    SectionHeading,
    /// Footnote text
    Footnote,
    /// Running header at the top of a page
    PageHeader,
    /// Running footer at the bottom of a page
    PageFooter,
    /// Printed page number
    PageNumber,
    /// Any role this crate does not know about
    #[serde(other)]
    Other,
}

impl ParagraphRole {
    /// The role name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphRole::Body => "body",
            ParagraphRole::Title => "title",
            ParagraphRole::SectionHeading => "sectionHeading",
            ParagraphRole::Footnote => "footnote",
            ParagraphRole::PageHeader => "pageHeader",
            ParagraphRole::PageFooter => "pageFooter",
            ParagraphRole::PageNumber => "pageNumber",
            ParagraphRole::Other => "other",
        }
    }
}

impl std::fmt::Display for ParagraphRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where on which page an element was found.
///
/// Only the page number is used; the polygon is kept so results survive a
/// decode/encode cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundingRegion {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Region outline in page units
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<f64>,
}

impl BoundingRegion {
    /// Create a region on the given page without geometry.
    pub fn on_page(page_number: u32) -> Self {
        Self {
            page_number,
            polygon: Vec::new(),
        }
    }
}

/// A paragraph from the flat paragraph collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParagraph {
    /// Semantic role; absent for ordinary text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ParagraphRole>,

    /// Text content
    pub content: String,

    /// Regions covered by the paragraph
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bounding_regions: Vec<BoundingRegion>,
}

impl RawParagraph {
    /// Create a paragraph with an explicit role.
    pub fn new(role: Option<ParagraphRole>, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            bounding_regions: Vec::new(),
        }
    }

    /// Create an ordinary paragraph without a role.
    pub fn body(content: impl Into<String>) -> Self {
        Self::new(None, content)
    }

    /// Create a paragraph with the given role.
    pub fn with_role(role: ParagraphRole, content: impl Into<String>) -> Self {
        Self::new(Some(role), content)
    }

    /// Attach a bounding region on the given page.
    pub fn on_page(mut self, page_number: u32) -> Self {
        self.bounding_regions.push(BoundingRegion::on_page(page_number));
        self
    }

    /// Page number of the first bounding region, if any.
    pub fn page_number(&self) -> Option<u32> {
        self.bounding_regions.first().map(|r| r.page_number)
    }
}

/// A section from the flat section collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSection {
    /// Ordered element references (`/sections/i`, `/paragraphs/i`, `/tables/i`)
    pub elements: Vec<String>,
}

impl RawSection {
    /// Create a section from element references.
    pub fn new<S: Into<String>>(elements: impl IntoIterator<Item = S>) -> Self {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }
}
