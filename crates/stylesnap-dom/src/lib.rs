//! stylesnap DOM
//!
//! Arena-allocated DOM tree. Holds the documents that style registries are
//! queried from and hands out element references for class-name extraction.

mod node;
mod tree;
mod document;
mod element;
mod classlist;

pub use node::{Node, NodeData, NodeType, ElementData, Attribute, Namespace};
pub use tree::DomTree;
pub use document::Document;
pub use element::ElementRef;
pub use classlist::ClassList;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
