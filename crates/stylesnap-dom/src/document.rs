//! Document - High-level document API

use crate::{DomTree, ElementRef, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate <html>, <head> and <body> after the tree has been built
    pub fn finalize(&mut self) {
        self.html_element = self.tree.children(self.tree.root())
            .find(|(_, node)| node.as_element().is_some_and(|e| e.local_name == "html"))
            .map_or(NodeId::NONE, |(id, _)| id);

        let child_named = |name: &str| {
            self.tree.children(self.html_element)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.local_name == name))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        let head = child_named("head");
        let body = child_named("body");
        self.head_element = head;
        self.body_element = body;

        if !self.body_element.is_valid() {
            tracing::trace!("Document {} has no <body>", self.url);
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        self.elements_by_tag_name("title")
            .first()
            .map(|&id| self.tree.text_content(id))
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Element handle for a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        ElementRef::new(&self.tree, id)
    }

    /// All elements with the given tag name, in document order
    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.tree.descendants(self.tree.root())
            .filter(|(_, node)| node.as_element().is_some_and(|e| e.local_name == tag))
            .map(|(id, _)| id)
            .collect()
    }

    /// All `tag[attribute]` elements, in document order
    pub fn elements_with_attribute(&self, tag: &str, attribute: &str) -> Vec<ElementRef<'_>> {
        self.tree.descendants(self.tree.root())
            .filter(|(_, node)| {
                node.as_element()
                    .is_some_and(|e| e.local_name == tag && e.has_attr(attribute))
            })
            .filter_map(|(id, _)| self.element(id))
            .collect()
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.tree.descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(|e| e.get_attr("id")) == Some(id))
            .and_then(|(node_id, _)| self.element(node_id))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
