//! Flat reference graph to section tree.

use std::collections::HashMap;

use crate::analysis::{AnalyzeResult, RawSection};
use crate::error::Result;
use crate::model::{Bucket, DocumentPage, DocumentSection};

use super::{
    normalize_text, route_paragraph, BuildOptions, ElementIndex, ElementRef, TableReconstructor,
};

/// A section under construction. Children are arena ids.
#[derive(Debug)]
struct Node {
    section: DocumentSection,
    children: Vec<usize>,
}

/// Rebuilds a [`DocumentPage`] from one analysis result.
///
/// Sections are materialized in an arena keyed by path identifier. A
/// section is owned by whoever references it first: the section that lists
/// it as a child, or the top level when its own turn in the section
/// collection comes before any such reference. Later references to an
/// existing path reuse the node and never re-parent it, which also stops
/// cyclic references.
pub struct TreeBuilder<'a> {
    result: &'a AnalyzeResult,
    index: ElementIndex<'a>,
    options: &'a BuildOptions,
    nodes: Vec<Node>,
    lookup: HashMap<String, usize>,
    top_level: Vec<usize>,
    buckets: [Option<usize>; 3],
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder for one analysis result.
    pub fn new(result: &'a AnalyzeResult, options: &'a BuildOptions) -> Self {
        Self {
            result,
            index: ElementIndex::new(result),
            options,
            nodes: Vec::new(),
            lookup: HashMap::new(),
            top_level: Vec::new(),
            buckets: [None; 3],
        }
    }

    /// Run the build.
    ///
    /// Returns `Ok(None)` when the result has neither paragraphs nor tables.
    /// Any integrity error aborts the build; no partial page is returned.
    pub fn build(mut self) -> Result<Option<DocumentPage>> {
        if self.result.is_empty() {
            log::warn!("Analysis result has no paragraphs and no tables; nothing to rebuild");
            return Ok(None);
        }

        log::debug!(
            "Building from {} sections, {} paragraphs, {} tables",
            self.result.sections.len(),
            self.result.paragraphs.len(),
            self.result.tables.len()
        );

        let index = self.index;
        for (reference, raw) in index.sections() {
            self.visit_section(reference, raw)?;
        }

        Ok(Some(self.assemble()))
    }

    fn visit_section(&mut self, reference: ElementRef, raw: &RawSection) -> Result<()> {
        let path = reference.to_string();
        let current = match self.lookup.get(&path) {
            Some(&id) => id,
            None => {
                let id = self.register(path);
                self.top_level.push(id);
                id
            }
        };

        for element in &raw.elements {
            log::trace!("{} -> {}", reference, element);
            match ElementRef::parse(element)? {
                child @ ElementRef::Section(i) => {
                    self.index.section(i)?;
                    self.attach_subsection(current, child);
                }
                ElementRef::Paragraph(i) => {
                    let paragraph = self.index.paragraph(i)?;
                    let content = self.text(&paragraph.content);
                    let section = &mut self.nodes[current].section;
                    if let Some(bucket) = route_paragraph(paragraph, &content, section) {
                        let id = self.bucket(bucket);
                        self.nodes[id].section.add_paragraph(content);
                    }
                }
                ElementRef::Table(i) => {
                    let raw_table = self.index.table(i)?;
                    let table =
                        TableReconstructor::new(self.options).reconstruct(element, raw_table)?;
                    self.nodes[current].section.add_table(table);
                }
            }
        }
        Ok(())
    }

    fn attach_subsection(&mut self, parent: usize, child: ElementRef) {
        let path = child.to_string();
        if let Some(&existing) = self.lookup.get(&path) {
            if existing != parent && !self.nodes[parent].children.contains(&existing) {
                log::warn!(
                    "{} is already placed; ignoring reference from {}",
                    path,
                    self.nodes[parent].section.path
                );
            }
            return;
        }
        let id = self.register(path);
        self.nodes[parent].children.push(id);
    }

    /// Allocate a section node and index it by path.
    fn register(&mut self, path: String) -> usize {
        let id = self.allocate(DocumentSection::new(path.clone()));
        self.lookup.insert(path, id);
        id
    }

    fn allocate(&mut self, section: DocumentSection) -> usize {
        self.nodes.push(Node {
            section,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// The node of an auxiliary bucket, created and placed on first use.
    fn bucket(&mut self, bucket: Bucket) -> usize {
        if let Some(id) = self.buckets[bucket.slot()] {
            return id;
        }
        let id = self.allocate(DocumentSection::bucket_section(bucket));
        self.buckets[bucket.slot()] = Some(id);
        self.top_level.push(id);
        id
    }

    fn text(&self, content: &str) -> String {
        if self.options.normalize_text {
            normalize_text(content)
        } else {
            content.to_string()
        }
    }

    /// Move sections out of the arena into an owned tree.
    fn assemble(self) -> DocumentPage {
        let mut slots: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        let mut page = DocumentPage::new();
        for id in self.top_level {
            if let Some(section) = take_subtree(&mut slots, id) {
                page.add_section(section);
            }
        }
        page
    }
}

/// Every node has exactly one owner, so each id is taken at most once.
fn take_subtree(slots: &mut [Option<Node>], id: usize) -> Option<DocumentSection> {
    let node = slots.get_mut(id)?.take()?;
    let mut section = node.section;
    for child in node.children {
        if let Some(sub) = take_subtree(slots, child) {
            section.add_subsection(sub);
        }
    }
    Some(section)
}
