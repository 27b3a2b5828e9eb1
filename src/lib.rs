//! # unlayout
//!
//! Rebuild hierarchical documents from flat layout-analysis results.
//!
//! A layout analysis service reports paragraphs, sections and tables as
//! three flat collections that point at each other through path
//! identifiers such as `/sections/1` or `/paragraphs/7`. This library
//! resolves those references into a tree of sections with headings, body
//! paragraphs, subsections and tables, and collects footnotes, page headers
//! and page footers into their own top-level sections.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlayout::{build_file, render};
//!
//! fn main() -> unlayout::Result<()> {
//!     // Rebuild a saved analysis result
//!     if let Some(page) = build_file("analysis.json")? {
//!         let options = render::RenderOptions::default();
//!         let markdown = render::to_markdown(&page, &options)?;
//!         println!("{}", markdown);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reference resolution**: flat section graphs become an owned tree
//! - **Role routing**: headings, body text, footnotes, page headers/footers
//! - **Table reconstruction**: flat cell lists become rows keyed by header
//! - **Multiple output formats**: JSON, Markdown, plain text
//! - **Parallel processing**: Uses Rayon to rebuild many documents at once

pub mod analysis;
pub mod build;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    AnalyzeOperation, AnalyzeResult, CellKind, OperationStatus, ParagraphRole, RawCell,
    RawParagraph, RawSection, RawTable,
};
pub use build::{
    build_page, build_pages, BuildOptions, ElementRef, ErrorMode, HeaderPolicy, TreeBuilder,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, Payload, PayloadKind};
pub use error::{Error, Result};
pub use model::{Bucket, DocumentPage, DocumentSection, ReconstructedTable, TableRow};
pub use render::{ExtractionStats, JsonFormat, RenderOptions};

use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::Path;

/// Load an analysis result from a JSON file.
///
/// The file may hold a bare result or an operation envelope; envelopes must
/// be in the `succeeded` state.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AnalyzeResult> {
    Ok(detect::decode_path(path)?.result)
}

/// Load an analysis result from JSON bytes.
pub fn load_bytes(data: &[u8]) -> Result<AnalyzeResult> {
    Ok(detect::decode_bytes(data)?.result)
}

/// Load an analysis result from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<AnalyzeResult> {
    Ok(detect::decode_reader(reader)?.result)
}

/// Rebuild the document held in a JSON file.
///
/// # Returns
///
/// `Ok(None)` when the result has no paragraphs and no tables.
///
/// # Example
///
/// ```no_run
/// use unlayout::build_file;
///
/// let page = build_file("analysis.json").unwrap();
/// if let Some(page) = page {
///     println!("Sections: {}", page.section_count());
/// }
/// ```
pub fn build_file<P: AsRef<Path>>(path: P) -> Result<Option<DocumentPage>> {
    build_file_with_options(path, &BuildOptions::default())
}

/// Rebuild the document held in a JSON file with custom options.
///
/// # Example
///
/// ```no_run
/// use unlayout::{build_file_with_options, BuildOptions};
///
/// let options = BuildOptions::new().lenient().strict_headers();
/// let page = build_file_with_options("analysis.json", &options).unwrap();
/// ```
pub fn build_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &BuildOptions,
) -> Result<Option<DocumentPage>> {
    let result = load_file(path)?;
    build_page(&result, options)
}

/// Rebuild the document held in JSON bytes.
pub fn build_bytes(data: &[u8]) -> Result<Option<DocumentPage>> {
    build_bytes_with_options(data, &BuildOptions::default())
}

/// Rebuild the document held in JSON bytes with custom options.
pub fn build_bytes_with_options(
    data: &[u8],
    options: &BuildOptions,
) -> Result<Option<DocumentPage>> {
    let result = load_bytes(data)?;
    build_page(&result, options)
}

/// Rebuild the document read from a reader.
pub fn build_reader<R: Read>(reader: R) -> Result<Option<DocumentPage>> {
    let result = load_reader(reader)?;
    build_page(&result, &BuildOptions::default())
}

/// Extract plain text from a saved analysis result.
///
/// # Example
///
/// ```no_run
/// use unlayout::extract_text;
///
/// let text = extract_text("analysis.json").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let page = build_file(path)?.unwrap_or_default();
    render::to_text(&page, &RenderOptions::default())
}

/// Convert a saved analysis result to Markdown.
///
/// # Example
///
/// ```no_run
/// use unlayout::to_markdown;
///
/// let markdown = to_markdown("analysis.json").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &RenderOptions::default())
}

/// Convert a saved analysis result to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let page = build_file(path)?.unwrap_or_default();
    render::to_markdown(&page, options)
}

/// Convert a saved analysis result to the rebuilt document's JSON.
///
/// # Example
///
/// ```no_run
/// use unlayout::{to_json, JsonFormat};
///
/// let json = to_json("analysis.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("layout.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let page = build_file(path)?.unwrap_or_default();
    render::to_json(&page, format)
}

/// Builder for rebuilding and rendering documents.
///
/// # Example
///
/// ```no_run
/// use unlayout::Unlayout;
///
/// let markdown = Unlayout::new()
///     .lenient()
///     .with_page_furniture()
///     .with_max_heading(3)
///     .parse("analysis.json")?
///     .to_markdown()?;
/// # Ok::<(), unlayout::Error>(())
/// ```
pub struct Unlayout {
    build_options: BuildOptions,
    render_options: RenderOptions,
}

impl Unlayout {
    /// Create a new Unlayout builder.
    pub fn new() -> Self {
        Self {
            build_options: BuildOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Repair malformed tables instead of failing.
    pub fn lenient(mut self) -> Self {
        self.build_options = self.build_options.lenient();
        self
    }

    /// Reject tables without column headers.
    pub fn strict_headers(mut self) -> Self {
        self.build_options = self.build_options.strict_headers();
        self
    }

    /// Normalize paragraph and cell text (NFC, trimmed).
    pub fn normalize(mut self) -> Self {
        self.build_options = self.build_options.with_normalized_text(true);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.build_options = self.build_options.sequential();
        self
    }

    /// Set the maximum Markdown heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Render page headers and footers.
    pub fn with_page_furniture(mut self) -> Self {
        self.render_options = self.render_options.with_page_furniture(true);
        self
    }

    /// Leave footnotes out of rendered output.
    pub fn without_footnotes(mut self) -> Self {
        self.render_options = self.render_options.with_footnotes(false);
        self
    }

    /// Rebuild the document held in a JSON file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnlayoutResult> {
        let payload = detect::decode_path(path)?;
        self.finish(payload)
    }

    /// Rebuild the document held in JSON bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnlayoutResult> {
        let payload = detect::decode_bytes(data)?;
        self.finish(payload)
    }

    /// Rebuild from an already decoded analysis result.
    pub fn build(self, result: &AnalyzeResult) -> Result<UnlayoutResult> {
        let page = build_page(result, &self.build_options)?;
        Ok(UnlayoutResult {
            page,
            kind: PayloadKind::Result,
            status: None,
            created: None,
            last_updated: None,
            render_options: self.render_options,
        })
    }

    fn finish(self, payload: Payload) -> Result<UnlayoutResult> {
        let page = build_page(&payload.result, &self.build_options)?;
        Ok(UnlayoutResult {
            page,
            kind: payload.kind,
            status: payload.status,
            created: payload.created,
            last_updated: payload.last_updated,
            render_options: self.render_options,
        })
    }
}

impl Default for Unlayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of rebuilding a document.
pub struct UnlayoutResult {
    /// The rebuilt document; `None` for an empty analysis result
    pub page: Option<DocumentPage>,
    /// Shape of the source payload
    pub kind: PayloadKind,
    /// Operation status, for envelopes
    pub status: Option<OperationStatus>,
    /// Operation submission time, for envelopes
    pub created: Option<DateTime<Utc>>,
    /// Operation completion time, for envelopes
    pub last_updated: Option<DateTime<Utc>>,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnlayoutResult {
    /// Check if the analysis result had nothing to rebuild.
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    /// Get the document, or an empty one for empty results.
    pub fn page(&self) -> DocumentPage {
        self.page.clone().unwrap_or_default()
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        match self.page {
            Some(ref page) => render::to_markdown(page, &self.render_options),
            None => Ok(String::new()),
        }
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        match self.page {
            Some(ref page) => render::to_text(page, &self.render_options),
            None => Ok(String::new()),
        }
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.page(), format)
    }

    /// Structure statistics of the rebuilt document.
    pub fn stats(&self) -> ExtractionStats {
        self.page
            .as_ref()
            .map(ExtractionStats::from_page)
            .unwrap_or_default()
    }
}
