//! Parsed-HTML selections
//!
//! A selection is an ordered set of elements from a parsed document, queried
//! the way server-side markup wrappers are: attribute reads look at the first
//! selected element only.

use std::rc::Rc;

use stylesnap_dom::{Document, ElementRef, NodeId};

use crate::{HtmlError, HtmlParser};

/// Sentinel carried by every selection
pub const PARSED_HTML_MARKER: &str = "[parsed html selection]";

/// Elements selected from a parsed document
#[derive(Debug, Clone)]
pub struct HtmlSelection {
    document: Rc<Document>,
    nodes: Vec<NodeId>,
}

impl HtmlSelection {
    /// Parse markup and select the elements directly under `<body>`
    pub fn load(html: &str) -> Result<Self, HtmlError> {
        let document = HtmlParser::new().parse(html)?;
        let nodes = match document.element(document.body()) {
            Some(body) => body.child_elements().map(|e| e.id()).collect(),
            None => Vec::new(),
        };
        Ok(Self { document: Rc::new(document), nodes })
    }

    /// Select from an already parsed document
    pub fn from_document(document: Rc<Document>, nodes: Vec<NodeId>) -> Self {
        Self { document, nodes }
    }

    /// Sentinel identifying parsed-HTML selections
    pub fn marker(&self) -> &'static str {
        PARSED_HTML_MARKER
    }

    /// Number of selected elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Selection holding only the first element
    pub fn first(&self) -> Self {
        Self {
            document: Rc::clone(&self.document),
            nodes: self.nodes.first().copied().into_iter().collect(),
        }
    }

    /// Descendants of the selection with the given tag name, in document order
    pub fn find(&self, tag: &str) -> Self {
        let tree = self.document.tree();
        let mut nodes = Vec::new();
        for &start in &self.nodes {
            for (id, node) in tree.descendants(start) {
                let matches = node.as_element().is_some_and(|e| e.local_name == tag);
                if matches && !nodes.contains(&id) {
                    nodes.push(id);
                }
            }
        }
        Self { document: Rc::clone(&self.document), nodes }
    }

    /// Attribute of the first selected element
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.elements().next()?.get_attribute(name)
    }

    /// Combined text of every selected element
    pub fn text(&self) -> String {
        self.elements().map(|e| e.text_content()).collect()
    }

    /// Selected elements
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.nodes.iter().filter_map(|&id| self.document.element(id))
    }

    /// The parsed document behind this selection
    pub fn document(&self) -> &Document {
        &self.document
    }
}
