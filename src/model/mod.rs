//! Document model produced by the tree builder.
//!
//! This is the hierarchical counterpart of the flat analysis result:
//! a [`DocumentPage`] owns top-level [`DocumentSection`]s, which own their
//! subsections, body paragraphs and [`ReconstructedTable`]s. The model is
//! serializable as nested records and can be read back from JSON.

mod page;
mod section;
mod table;

pub use page::DocumentPage;
pub use section::{Bucket, DocumentSection};
pub use table::{ReconstructedTable, TableRow};
