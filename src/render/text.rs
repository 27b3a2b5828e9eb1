//! Plain text rendering for rebuilt documents.

use crate::error::Result;
use crate::model::{Bucket, DocumentPage};

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(page: &DocumentPage, options: &RenderOptions) -> Result<String> {
    let mut output = page.plain_text();

    if options.include_footnotes {
        if let Some(notes) = page.bucket(Bucket::Footnote) {
            if !notes.paragraphs.is_empty() {
                output.push_str("\n\n");
                output.push_str(&notes.paragraphs.join("\n"));
            }
        }
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentSection, ReconstructedTable, TableRow};

    #[test]
    fn test_to_text() {
        let mut page = DocumentPage::new();
        let mut section = DocumentSection::new("/sections/0").with_heading("Hello");
        section.add_paragraph("Hello, world!");
        section.add_paragraph("Second paragraph.");
        let mut table = ReconstructedTable::new();
        table.add_row(TableRow::from_pairs([("A", "1"), ("B", "2")]));
        section.add_table(table);
        page.add_section(section);

        let mut notes = DocumentSection::bucket_section(Bucket::Footnote);
        notes.add_paragraph("* a note");
        page.add_section(notes);

        let result = to_text(&page, &RenderOptions::default()).unwrap();
        assert_eq!(
            result,
            "Hello\n\nHello, world!\n\nSecond paragraph.\n\nA\tB\n1\t2\n\n* a note"
        );

        let options = RenderOptions::new().with_footnotes(false);
        let result = to_text(&page, &options).unwrap();
        assert!(!result.contains("a note"));
    }
}
