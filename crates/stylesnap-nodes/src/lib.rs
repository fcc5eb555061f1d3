//! stylesnap nodes
//!
//! Class-name extraction from rendered test output. Four producer shapes are
//! recognised, probed in a fixed order:
//!
//! 1. serialized test-renderer nodes ([`SnapshotNode`])
//! 2. traversable wrappers ([`TreeWrapper`], e.g. [`TestElement`])
//! 3. parsed-HTML selections ([`ParsedHtml`])
//! 4. live DOM elements ([`DomElement`]), the fallback
//!
//! # Example
//! ```rust,ignore
//! use stylesnap_nodes::{extract_class_names, RenderedNode, SnapshotNode};
//!
//! let node = SnapshotNode::new("div").with_prop("className", "css-1 css-2");
//! let names = extract_class_names(&[&node as &dyn RenderedNode])?;
//! assert_eq!(names, ["css-1", "css-2"]);
//! ```

mod probe;
mod snapshot;
mod wrapper;
mod adapters;
mod extract;

pub use probe::{
    classify, is_dom_element, DomElement, ELEMENT_NODE, ElementType, NodeKind, ParsedHtml, RenderedNode,
    TreeWrapper,
};
pub use snapshot::{is_snapshot_node, SnapshotChild, SnapshotNode, SNAPSHOT_MARKER};
pub use wrapper::TestElement;
pub use extract::{class_names_of, extract_class_names};

/// Class-name extraction error
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The value fell through to the DOM branch without a `getAttribute` accessor
    #[error("Unsupported rendered node: {0}")]
    UnsupportedNode(String),
}
