//! Role-based paragraph routing.

use crate::analysis::{ParagraphRole, RawParagraph};
use crate::model::{Bucket, DocumentSection};

/// Where a paragraph's content ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Becomes the active section's heading
    Heading,
    /// Appended to the active section's body
    Body,
    /// Redirected to an auxiliary bucket
    Bucket(Bucket),
    /// Dropped
    Discard,
}

impl Route {
    /// Classify a paragraph role. Absent roles are ordinary body text.
    pub fn for_role(role: Option<ParagraphRole>) -> Self {
        match role {
            Some(ParagraphRole::SectionHeading) => Route::Heading,
            Some(ParagraphRole::Footnote) => Route::Bucket(Bucket::Footnote),
            Some(ParagraphRole::PageFooter) => Route::Bucket(Bucket::PageFooter),
            Some(ParagraphRole::PageHeader) => Route::Bucket(Bucket::PageHeader),
            Some(ParagraphRole::PageNumber) => Route::Discard,
            Some(ParagraphRole::Body | ParagraphRole::Title | ParagraphRole::Other) | None => {
                Route::Body
            }
        }
    }
}

/// Apply a paragraph to the active section.
///
/// Headings and body text are written to `section`, along with the
/// paragraph's page number. For bucket routes the section is left untouched
/// and the bucket is returned so the caller can append `content` there.
pub fn route_paragraph(
    paragraph: &RawParagraph,
    content: &str,
    section: &mut DocumentSection,
) -> Option<Bucket> {
    match Route::for_role(paragraph.role) {
        Route::Heading => {
            section.heading = Some(content.to_string());
            record_page(paragraph, section);
            None
        }
        Route::Body => {
            section.paragraphs.push(content.to_string());
            record_page(paragraph, section);
            None
        }
        Route::Bucket(bucket) => Some(bucket),
        Route::Discard => None,
    }
}

fn record_page(paragraph: &RawParagraph, section: &mut DocumentSection) {
    if let Some(page) = paragraph.page_number() {
        section.page_number = Some(page);
    }
}
