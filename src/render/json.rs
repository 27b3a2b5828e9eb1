//! JSON rendering for rebuilt documents.

use crate::error::{Error, Result};
use crate::model::DocumentPage;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(page: &DocumentPage, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(page),
        JsonFormat::Compact => serde_json::to_string(page),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentSection;

    #[test]
    fn test_to_json_pretty() {
        let mut page = DocumentPage::new();
        page.add_section(DocumentSection::new("/sections/0").with_heading("Test"));

        let json = to_json(&page, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"heading\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut page = DocumentPage::new();
        page.add_section(DocumentSection::new("/sections/0"));

        let json = to_json(&page, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"sections":[{"path":"/sections/0","paragraphs":[],"subSections":[],"tables":[]}]}"#
        );
    }
}
