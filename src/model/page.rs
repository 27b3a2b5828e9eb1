//! Document-level types.

use super::{Bucket, DocumentSection};
use serde::{Deserialize, Serialize};

/// The rebuilt document: an ordered list of top-level sections.
///
/// Auxiliary buckets (footnotes, page headers, page footers) appear among the
/// top-level sections at the position where they were first needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Top-level sections in reading order
    #[serde(default)]
    pub sections: Vec<DocumentSection>,
}

impl DocumentPage {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Add a top-level section.
    pub fn add_section(&mut self, section: DocumentSection) {
        self.sections.push(section);
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find a section anywhere in the tree by path.
    pub fn find(&self, path: &str) -> Option<&DocumentSection> {
        self.sections.iter().find_map(|s| s.find(path))
    }

    /// Get a bucket section if it was created.
    pub fn bucket(&self, bucket: Bucket) -> Option<&DocumentSection> {
        self.sections.iter().find(|s| s.bucket() == Some(bucket))
    }

    /// Top-level sections that are not buckets.
    pub fn main_sections(&self) -> impl Iterator<Item = &DocumentSection> {
        self.sections.iter().filter(|s| s.bucket().is_none())
    }

    /// Visit every section depth-first with its depth (0 = top level).
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a DocumentSection, usize)) {
        for section in &self.sections {
            section.walk(0, &mut f);
        }
    }

    /// Total number of sections, including nested ones and buckets.
    pub fn section_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Get plain text content of the main sections.
    pub fn plain_text(&self) -> String {
        self.main_sections()
            .map(|s| s.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocumentPage {
        let mut page = DocumentPage::new();
        let mut intro = DocumentSection::new("/sections/0").with_heading("Intro");
        intro.add_paragraph("Hello.");
        intro.add_subsection(DocumentSection::new("/sections/1"));
        page.add_section(intro);

        let mut notes = DocumentSection::bucket_section(Bucket::Footnote);
        notes.add_paragraph("1 A note.");
        page.add_section(notes);
        page
    }

    #[test]
    fn test_document_new() {
        let page = DocumentPage::new();
        assert!(page.is_empty());
        assert_eq!(page.section_count(), 0);
    }

    #[test]
    fn test_bucket_lookup() {
        let page = sample();
        assert!(page.bucket(Bucket::Footnote).is_some());
        assert!(page.bucket(Bucket::PageHeader).is_none());
        assert_eq!(page.main_sections().count(), 1);
        assert_eq!(page.section_count(), 3);
        assert!(page.find("/sections/1").is_some());
    }

    #[test]
    fn test_plain_text_skips_buckets() {
        let text = sample().plain_text();
        assert_eq!(text, "Intro\n\nHello.");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sections"][1]["path"], "footnote");
        assert_eq!(json["sections"][0]["heading"], "Intro");
        assert_eq!(json["sections"][0]["subSections"][0]["path"], "/sections/1");
    }
}
