//! Input types for layout analysis results.
//!
//! These mirror the JSON emitted by a layout analysis service: three flat
//! collections (paragraphs, sections, tables) addressed by position, plus
//! the operation envelope that wraps a finished result. Fields are decoded
//! from camelCase and every collection defaults to empty, so truncated
//! payloads still decode and are rejected later by the builder if they
//! reference elements that are not there.

mod operation;
mod paragraph;
mod table;

pub use operation::{AnalyzeOperation, OperationError, OperationStatus};
pub use paragraph::{BoundingRegion, ParagraphRole, RawParagraph, RawSection};
pub use table::{CellKind, RawCell, RawTable};

use serde::{Deserialize, Serialize};

/// A complete layout analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeResult {
    /// Service API version that produced the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Analysis model identifier (e.g., "prebuilt-layout")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Full document text as extracted by the service
    pub content: String,

    /// Per-page records; only their number is used
    pub pages: Vec<serde_json::Value>,

    /// Flat paragraph collection, addressed as `/paragraphs/{i}`
    pub paragraphs: Vec<RawParagraph>,

    /// Flat section collection, addressed as `/sections/{i}`
    pub sections: Vec<RawSection>,

    /// Flat table collection, addressed as `/tables/{i}`
    pub tables: Vec<RawTable>,
}

impl AnalyzeResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph and return its path identifier.
    pub fn add_paragraph(&mut self, paragraph: RawParagraph) -> String {
        self.paragraphs.push(paragraph);
        format!("/paragraphs/{}", self.paragraphs.len() - 1)
    }

    /// Add a section and return its path identifier.
    pub fn add_section(&mut self, section: RawSection) -> String {
        self.sections.push(section);
        format!("/sections/{}", self.sections.len() - 1)
    }

    /// Add a table and return its path identifier.
    pub fn add_table(&mut self, table: RawTable) -> String {
        self.tables.push(table);
        format!("/tables/{}", self.tables.len() - 1)
    }

    /// Number of analysed pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if there is nothing to rebuild (no paragraphs and no tables).
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_result() {
        let json = r#"{
            "apiVersion": "2024-07-31-preview",
            "modelId": "prebuilt-layout",
            "paragraphs": [
                {"role": "sectionHeading", "content": "Intro",
                 "boundingRegions": [{"pageNumber": 2, "polygon": [0, 0, 1, 1]}]},
                {"content": "Body text"}
            ],
            "sections": [{"elements": ["/paragraphs/0", "/paragraphs/1"]}]
        }"#;

        let result: AnalyzeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.model_id.as_deref(), Some("prebuilt-layout"));
        assert_eq!(result.paragraphs.len(), 2);
        assert_eq!(result.paragraphs[0].role, Some(ParagraphRole::SectionHeading));
        assert_eq!(result.paragraphs[0].page_number(), Some(2));
        assert_eq!(result.paragraphs[1].role, None);
        assert!(result.tables.is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_builder_helpers_return_paths() {
        let mut result = AnalyzeResult::new();
        assert!(result.is_empty());
        assert_eq!(result.add_paragraph(RawParagraph::body("a")), "/paragraphs/0");
        assert_eq!(result.add_paragraph(RawParagraph::body("b")), "/paragraphs/1");
        assert_eq!(result.add_table(RawTable::new(1, 1)), "/tables/0");
        assert_eq!(result.add_section(RawSection::default()), "/sections/0");
    }
}
