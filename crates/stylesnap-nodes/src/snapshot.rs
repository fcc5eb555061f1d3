//! Serialized test-renderer nodes
//!
//! The JSON tree a test renderer emits for snapshots: `type`, `props` and
//! `children`, tagged with a `$$typeof` marker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RenderedNode;

/// Marker value carried by serialized test-renderer nodes
pub const SNAPSHOT_MARKER: &str = "react.test.json";

/// One node of a serialized render tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    #[serde(rename = "$$typeof", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SnapshotChild>>,
}

/// Child of a serialized node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotChild {
    Node(SnapshotNode),
    Text(String),
}

impl SnapshotNode {
    /// Marked node with no props or children
    pub fn new(element_type: &str) -> Self {
        Self {
            marker: Some(SNAPSHOT_MARKER.to_string()),
            element_type: element_type.to_string(),
            props: Map::new(),
            children: None,
        }
    }

    /// Deserialize a node from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.props.insert(name.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, child: SnapshotChild) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// `props.className`, falling back to `props.class`; empty strings count
    /// as absent
    pub fn class_attribute(&self) -> Option<&str> {
        let string_prop = |name: &str| {
            self.props.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        string_prop("className").or_else(|| string_prop("class"))
    }
}

/// Node carries the serialized test-renderer marker
pub fn is_snapshot_node(node: &SnapshotNode) -> bool {
    node.marker.as_deref() == Some(SNAPSHOT_MARKER)
}

impl RenderedNode for SnapshotNode {
    fn as_snapshot(&self) -> Option<&SnapshotNode> {
        Some(self)
    }
}
