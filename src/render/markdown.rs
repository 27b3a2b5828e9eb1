//! Markdown rendering for rebuilt documents.

use crate::error::Result;
use crate::model::{Bucket, DocumentPage, DocumentSection, ReconstructedTable};

use super::{ExtractionStats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(page: &DocumentPage, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(page)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(page: &DocumentPage, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(page)
}

/// Markdown renderer.
///
/// Sections become headings by depth (top level is `#`), followed by their
/// body paragraphs, their tables, then their subsections. Footnotes are
/// appended after a rule; page headers and footers are kept as HTML comments
/// when requested.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, page: &DocumentPage) -> Result<String> {
        self.render_internal(page)
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, page: &DocumentPage) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(page)?;

        // Count words and characters in final content
        self.stats.count_text(&content);

        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, page: &DocumentPage) -> Result<String> {
        let mut output = String::new();

        if self.options.include_page_furniture {
            self.render_furniture(&mut output, page, Bucket::PageHeader);
        }

        for section in page.main_sections() {
            self.render_section(&mut output, section, 0);
        }

        if self.options.include_footnotes {
            if let Some(notes) = page.bucket(Bucket::Footnote) {
                self.render_footnotes(&mut output, notes);
            }
        }

        if self.options.include_page_furniture {
            self.render_furniture(&mut output, page, Bucket::PageFooter);
        }

        Ok(output.trim().to_string())
    }

    fn render_section(&mut self, output: &mut String, section: &DocumentSection, depth: usize) {
        if self.options.collect_stats {
            self.stats.add_section();
        }

        if let Some(ref heading) = section.heading {
            if self.options.collect_stats {
                self.stats.add_heading();
            }
            let level = (depth + 1).min(self.options.max_heading_level as usize);
            output.push_str(&"#".repeat(level));
            output.push(' ');
            output.push_str(&self.escape(heading.trim()));
            output.push_str("\n\n");
        }

        for paragraph in &section.paragraphs {
            if self.options.collect_stats {
                self.stats.add_paragraph();
            }
            output.push_str(&self.escape(paragraph.trim()));
            output.push_str("\n\n");
        }

        for table in &section.tables {
            if self.options.collect_stats {
                self.stats.add_table(table.row_count());
            }
            self.render_table(output, table);
        }

        for sub in &section.sub_sections {
            self.render_section(output, sub, depth + 1);
        }
    }

    fn render_table(&self, output: &mut String, table: &ReconstructedTable) {
        let columns = table.columns();
        if columns.is_empty() {
            return;
        }

        output.push('|');
        for column in &columns {
            output.push_str(&format!(" {} |", table_cell(column)));
        }
        output.push('\n');

        output.push('|');
        for _ in &columns {
            output.push_str(" --- |");
        }
        output.push('\n');

        for row in &table.rows {
            output.push('|');
            for column in &columns {
                let value = row.get(column).unwrap_or_default();
                output.push_str(&format!(" {} |", table_cell(value)));
            }
            output.push('\n');
        }

        output.push('\n');
    }

    fn render_footnotes(&mut self, output: &mut String, notes: &DocumentSection) {
        if notes.paragraphs.is_empty() {
            return;
        }
        output.push_str("---\n\n");
        for note in &notes.paragraphs {
            if self.options.collect_stats {
                self.stats.add_footnote();
            }
            output.push_str(&self.escape(note.trim()));
            output.push_str("\n\n");
        }
    }

    fn render_furniture(&self, output: &mut String, page: &DocumentPage, bucket: Bucket) {
        let Some(section) = page.bucket(bucket) else {
            return;
        };
        for line in &section.paragraphs {
            let text = line.replace("--", "- -").replace('\n', " ");
            output.push_str(&format!("<!-- {}: {} -->\n", bucket.path(), text.trim()));
        }
        output.push('\n');
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape special Markdown characters.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Table cells must stay on one line and cannot contain a bare pipe.
fn table_cell(text: &str) -> String {
    text.replace('\n', " ").trim().replace('|', "\\|")
}
