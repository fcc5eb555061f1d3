//! Capability probing
//!
//! Rendered values advertise what they can do through `RenderedNode`; every
//! probe defaults to "not supported". `classify` turns the probes into a single
//! `NodeKind`, first match wins.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use stylesnap_html::PARSED_HTML_MARKER;

use crate::snapshot::{is_snapshot_node, SnapshotNode};

/// `nodeType` of element nodes
pub const ELEMENT_NODE: u16 = 1;

static DOM_ELEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((HTML|SVG)\w*)?Element$")
        .unwrap_or_else(|e| panic!("BUG: Invalid DOM element pattern: {}", e))
});

/// A value produced by some test renderer
pub trait RenderedNode: fmt::Debug {
    /// Serialized test-renderer node
    fn as_snapshot(&self) -> Option<&SnapshotNode> {
        None
    }

    /// Traversal capability
    fn as_wrapper(&self) -> Option<&dyn TreeWrapper> {
        None
    }

    /// Parsed-HTML attribute lookup
    fn as_parsed_html(&self) -> Option<&dyn ParsedHtml> {
        None
    }

    /// Live DOM accessors
    fn as_dom(&self) -> Option<&dyn DomElement> {
        None
    }
}

/// Rendered type of a wrapper node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType<'a> {
    /// Plain string tag (`div`, `span`, ...)
    Host(&'a str),
    /// Custom component
    Component(&'a str),
}

impl ElementType<'_> {
    #[inline]
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}

/// Wrapper over a rendered tree that can search its descendants
pub trait TreeWrapper {
    /// Rendered type of this node
    fn element_type(&self) -> ElementType<'_>;

    /// String prop value
    fn prop(&self, name: &str) -> Option<&str>;

    /// This node and its descendants matching `predicate`, pre-order
    fn find_where<'a>(&'a self, predicate: &dyn Fn(&dyn TreeWrapper) -> bool) -> Vec<&'a dyn TreeWrapper>;

    /// Render one level deeper. `None` when the wrapper cannot materialize.
    fn dive(&self) -> Option<Box<dyn TreeWrapper + '_>> {
        None
    }
}

impl<T: TreeWrapper + ?Sized> TreeWrapper for &T {
    fn element_type(&self) -> ElementType<'_> {
        (**self).element_type()
    }

    fn prop(&self, name: &str) -> Option<&str> {
        (**self).prop(name)
    }

    fn find_where<'a>(&'a self, predicate: &dyn Fn(&dyn TreeWrapper) -> bool) -> Vec<&'a dyn TreeWrapper> {
        (**self).find_where(predicate)
    }

    fn dive(&self) -> Option<Box<dyn TreeWrapper + '_>> {
        (**self).dive()
    }
}

/// Lightweight parsed-HTML wrapper
pub trait ParsedHtml {
    /// Sentinel identifying the wrapper kind
    fn marker(&self) -> &str;

    /// Attribute of the first wrapped element
    fn attr(&self, name: &str) -> Option<&str>;
}

/// Live DOM element accessors
pub trait DomElement {
    fn node_type(&self) -> u16;

    fn constructor_name(&self) -> Option<&str>;

    fn get_attribute(&self, name: &str) -> Option<&str>;
}

/// Shape of a rendered node
#[derive(Clone, Copy)]
pub enum NodeKind<'a> {
    Snapshot(&'a SnapshotNode),
    Wrapper(&'a dyn TreeWrapper),
    ParsedHtml(&'a dyn ParsedHtml),
    /// Fallback; `None` when the value has no DOM accessors either
    Dom(Option<&'a dyn DomElement>),
}

impl fmt::Debug for NodeKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Snapshot(_) => "Snapshot",
            Self::Wrapper(_) => "Wrapper",
            Self::ParsedHtml(_) => "ParsedHtml",
            Self::Dom(Some(_)) => "Dom",
            Self::Dom(None) => "Dom(unsupported)",
        };
        f.write_str(name)
    }
}

/// Classify a node: snapshot, then wrapper, then parsed HTML, then DOM
pub fn classify(node: &dyn RenderedNode) -> NodeKind<'_> {
    if let Some(snapshot) = node.as_snapshot().filter(|s| is_snapshot_node(s)) {
        return NodeKind::Snapshot(snapshot);
    }
    if let Some(wrapper) = node.as_wrapper() {
        return NodeKind::Wrapper(wrapper);
    }
    if let Some(html) = node.as_parsed_html().filter(|h| h.marker() == PARSED_HTML_MARKER) {
        return NodeKind::ParsedHtml(html);
    }
    NodeKind::Dom(node.as_dom())
}

/// Element node whose constructor follows DOM interface naming
pub fn is_dom_element(node: &dyn DomElement) -> bool {
    node.node_type() == ELEMENT_NODE
        && node.constructor_name()
            .is_some_and(|name| !name.is_empty() && DOM_ELEMENT_PATTERN.is_match(name))
}
