//! DOM Tree (arena-based allocation)

use crate::{Node, NodeData, NodeId, ElementData, Namespace};

/// Arena-based DOM tree. Index 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::with_data(NodeData::Document)] }
    }

    /// Root (document) node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached HTML element
    pub fn create_element(&mut self, local_name: &str) -> NodeId {
        self.create_element_ns(local_name, Namespace::Html)
    }

    /// Create a detached element in a namespace
    pub fn create_element_ns(&mut self, local_name: &str, namespace: Namespace) -> NodeId {
        self.push(Node::with_data(NodeData::Element(ElementData::new(local_name, namespace))))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::with_data(NodeData::Text(content.to_string())))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::with_data(NodeData::Comment(content.to_string())))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.push(Node::with_data(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !parent.is_valid() || !child.is_valid() || parent == child {
            return;
        }
        let prev_last = match self.get(parent) {
            Some(p) => p.last_child,
            None => return,
        };

        if let Some(c) = self.get_mut(child) {
            c.parent = parent;
            c.prev_sibling = prev_last;
            c.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            if let Some(prev) = self.get_mut(prev_last) {
                prev.next_sibling = child;
            }
        }
        if let Some(p) = self.get_mut(parent) {
            if !p.first_child.is_valid() {
                p.first_child = child;
            }
            p.last_child = child;
        }
    }

    /// Set an attribute on an element; no-op for other node kinds
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            elem.set_attr(name, value);
        }
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Pre-order walk of every descendant of `start` (excluding `start`)
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = self.children(start).map(|(id, _)| id).collect::<Vec<_>>();
        Descendants { tree: self, stack: stack.into_iter().rev().collect() }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|(_, node)| node.as_text())
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over sibling-linked children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Depth-first pre-order iterator
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        let first = self.stack.len();
        self.stack.extend(self.tree.children(id).map(|(child, _)| child));
        self.stack[first..].reverse();
        Some((id, node))
    }
}
