//! Rendering result with statistics.

use crate::model::{Bucket, DocumentPage};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: ExtractionStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about a rebuilt document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of sections, nested ones included, buckets excluded
    pub section_count: u32,

    /// Number of sections with a heading
    pub heading_count: u32,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table rows
    pub table_row_count: u32,

    /// Number of footnotes
    pub footnote_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count structure of a document without rendering it.
    pub fn from_page(page: &DocumentPage) -> Self {
        let mut stats = Self::new();
        for section in page.main_sections() {
            section.walk(0, &mut |s, _| {
                stats.add_section();
                if s.heading.is_some() {
                    stats.add_heading();
                }
                stats.paragraph_count += s.paragraphs.len() as u32;
                for table in &s.tables {
                    stats.add_table(table.row_count());
                }
            });
        }
        if let Some(notes) = page.bucket(Bucket::Footnote) {
            stats.footnote_count = notes.paragraphs.len() as u32;
        }
        stats
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment table count and add its rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment footnote count.
    pub fn add_footnote(&mut self) {
        self.footnote_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.section_count += other.section_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.footnote_count += other.footnote_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
