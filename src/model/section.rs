//! Section-level types.

use super::ReconstructedTable;
use serde::{Deserialize, Serialize};

/// Auxiliary top-level sections collecting paragraphs that sit outside the
/// heading/body hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Footnotes
    Footnote,
    /// Running page headers
    PageHeader,
    /// Running page footers
    PageFooter,
}

impl Bucket {
    /// All buckets, in slot order.
    pub const ALL: [Bucket; 3] = [Bucket::Footnote, Bucket::PageHeader, Bucket::PageFooter];

    /// Path identifier of the bucket section.
    pub fn path(&self) -> &'static str {
        match self {
            Bucket::Footnote => "footnote",
            Bucket::PageHeader => "pageHeader",
            Bucket::PageFooter => "pageFooter",
        }
    }

    /// Slot index in a fixed three-entry table.
    pub fn slot(&self) -> usize {
        match self {
            Bucket::Footnote => 0,
            Bucket::PageHeader => 1,
            Bucket::PageFooter => 2,
        }
    }

    /// Look up the bucket whose section has the given path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.path() == path)
    }
}

/// A section of the rebuilt document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    /// Path identifier (`/sections/3`, or a bucket name)
    pub path: String,

    /// Heading text, if a heading paragraph was routed here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Body paragraphs in reading order
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Child sections in reading order
    #[serde(default)]
    pub sub_sections: Vec<DocumentSection>,

    /// Tables in reading order
    #[serde(default)]
    pub tables: Vec<ReconstructedTable>,

    /// Page the section's content was found on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

impl DocumentSection {
    /// Create an empty section.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create an empty bucket section.
    pub fn bucket_section(bucket: Bucket) -> Self {
        Self::new(bucket.path())
    }

    /// Set the heading and return self.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Append a body paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// Append a subsection.
    pub fn add_subsection(&mut self, section: DocumentSection) {
        self.sub_sections.push(section);
    }

    /// Append a table.
    pub fn add_table(&mut self, table: ReconstructedTable) {
        self.tables.push(table);
    }

    /// The bucket this section represents, if any.
    pub fn bucket(&self) -> Option<Bucket> {
        Bucket::from_path(&self.path)
    }

    /// Check if the section holds no content at all.
    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.paragraphs.is_empty()
            && self.tables.is_empty()
            && self.sub_sections.iter().all(DocumentSection::is_empty)
    }

    /// Find a section by path in this subtree.
    pub fn find(&self, path: &str) -> Option<&DocumentSection> {
        if self.path == path {
            return Some(self);
        }
        self.sub_sections.iter().find_map(|s| s.find(path))
    }

    /// Visit this section and all descendants depth-first with their depth.
    pub fn walk<'a>(&'a self, depth: usize, f: &mut impl FnMut(&'a DocumentSection, usize)) {
        f(self, depth);
        for sub in &self.sub_sections {
            sub.walk(depth + 1, f);
        }
    }

    /// Get plain text of the section and its subsections.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref heading) = self.heading {
            parts.push(heading.clone());
        }
        parts.extend(self.paragraphs.iter().cloned());
        parts.extend(self.tables.iter().map(|t| t.plain_text()));
        parts.extend(
            self.sub_sections
                .iter()
                .map(|s| s.plain_text())
                .filter(|t| !t.is_empty()),
        );
        parts.join("\n\n")
    }
}
