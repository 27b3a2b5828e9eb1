//! Document reconstruction from flat analysis results.

mod index;
mod options;
mod reference;
mod router;
mod table;
mod tree;

pub use index::ElementIndex;
pub use options::{BuildOptions, ErrorMode, HeaderPolicy};
pub use reference::ElementRef;
pub use router::{route_paragraph, Route};
pub use table::TableReconstructor;
pub use tree::TreeBuilder;

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::analysis::AnalyzeResult;
use crate::error::Result;
use crate::model::DocumentPage;

/// Rebuild one document.
///
/// Returns `Ok(None)` when the result holds no paragraphs and no tables.
pub fn build_page(result: &AnalyzeResult, options: &BuildOptions) -> Result<Option<DocumentPage>> {
    TreeBuilder::new(result, options).build()
}

/// Rebuild several independent documents, in parallel unless
/// `options.parallel` is off. Results keep the input order.
pub fn build_pages(
    results: &[AnalyzeResult],
    options: &BuildOptions,
) -> Vec<Result<Option<DocumentPage>>> {
    if options.parallel {
        results
            .par_iter()
            .map(|result| build_page(result, options))
            .collect()
    } else {
        results
            .iter()
            .map(|result| build_page(result, options))
            .collect()
    }
}

/// NFC-normalize and trim text.
pub(crate) fn normalize_text(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_string()
}
