//! Comprehensive tests for stylesnap-nodes
//!
//! Classification priority and extraction across every producer shape.

use stylesnap_html::HtmlSelection;
use stylesnap_nodes::{
    classify, extract_class_names, DomElement, ElementType, ExtractError, NodeKind, ParsedHtml,
    RenderedNode, SnapshotNode, TestElement, TreeWrapper,
};

// ============================================================================
// EXTRACTION BY SHAPE
// ============================================================================

#[test]
fn test_snapshot_from_json() {
    let node = SnapshotNode::from_json(
        r#"{"$$typeof":"react.test.json","type":"div","props":{"className":"css-1 css-2"},"children":null}"#,
    ).unwrap();
    assert_eq!(extract_class_names(&[&node]).unwrap(), vec!["css-1", "css-2"]);
}

#[test]
fn test_snapshot_children_are_not_walked() {
    let node = SnapshotNode::new("div").with_child(stylesnap_nodes::SnapshotChild::Node(
        SnapshotNode::new("span").with_prop("className", "inner"),
    ));
    assert!(extract_class_names(&[&node]).unwrap().is_empty());
}

#[test]
fn test_mounted_component_tree() {
    // Mount-style tree: the component's output is already a child
    let node = TestElement::component("Card")
        .with_prop("className", "passed-down")
        .with_child(
            TestElement::host("article")
                .with_prop("className", "css-card")
                .with_child(TestElement::host("h1").with_prop("className", "css-title")),
        );
    assert_eq!(extract_class_names(&[&node]).unwrap(), vec!["css-card"]);
}

#[test]
fn test_shallow_component_dives_once() {
    let inner = TestElement::component("Inner")
        .renders(TestElement::host("span").with_prop("className", "too-deep"));
    let node = TestElement::component("Outer").renders(inner);
    assert!(extract_class_names(&[&node]).unwrap().is_empty());
}

#[test]
fn test_host_wrapper_does_not_dive() {
    let node = TestElement::host("div").with_prop("className", "css-host");
    assert_eq!(extract_class_names(&[&node]).unwrap(), vec!["css-host"]);
}

#[test]
fn test_parsed_html_and_dom_mixed() {
    let sel = HtmlSelection::load(r#"<div class="css-a"></div>"#).unwrap();
    let doc = stylesnap_html::parse(r#"<p id="p" class="css-b css-c"></p>"#).unwrap();
    let elem = doc.get_element_by_id("p").unwrap();
    let snap = SnapshotNode::new("i").with_prop("class", "css-d");

    let names = extract_class_names(&[&sel, &elem, &snap]).unwrap();
    assert_eq!(names, vec!["css-a", "css-b", "css-c", "css-d"]);
}

#[test]
fn test_dom_without_class_attribute() {
    let doc = stylesnap_html::parse(r#"<p id="p"></p>"#).unwrap();
    let elem = doc.get_element_by_id("p").unwrap();
    assert!(extract_class_names(&[&elem]).unwrap().is_empty());
}

// ============================================================================
// CLASSIFICATION PRIORITY
// ============================================================================

/// Answers every probe at once
#[derive(Debug)]
struct Everything {
    snapshot: SnapshotNode,
    wrapper: TestElement,
}

impl ParsedHtml for Everything {
    fn marker(&self) -> &str {
        stylesnap_html::PARSED_HTML_MARKER
    }

    fn attr(&self, _name: &str) -> Option<&str> {
        Some("from-html")
    }
}

impl DomElement for Everything {
    fn node_type(&self) -> u16 {
        1
    }

    fn constructor_name(&self) -> Option<&str> {
        Some("HTMLDivElement")
    }

    fn get_attribute(&self, _name: &str) -> Option<&str> {
        Some("from-dom")
    }
}

impl RenderedNode for Everything {
    fn as_snapshot(&self) -> Option<&SnapshotNode> {
        Some(&self.snapshot)
    }

    fn as_wrapper(&self) -> Option<&dyn TreeWrapper> {
        Some(&self.wrapper)
    }

    fn as_parsed_html(&self) -> Option<&dyn ParsedHtml> {
        Some(self)
    }

    fn as_dom(&self) -> Option<&dyn DomElement> {
        Some(self)
    }
}

fn everything(marker: Option<&str>) -> Everything {
    let mut snapshot = SnapshotNode::new("div").with_prop("className", "from-snapshot");
    snapshot.marker = marker.map(str::to_string);
    Everything {
        snapshot,
        wrapper: TestElement::host("div").with_prop("className", "from-wrapper"),
    }
}

#[test]
fn test_snapshot_wins() {
    let node = everything(Some(stylesnap_nodes::SNAPSHOT_MARKER));
    assert!(matches!(classify(&node), NodeKind::Snapshot(_)));
    assert_eq!(extract_class_names(&[&node]).unwrap(), vec!["from-snapshot"]);
}

#[test]
fn test_unmarked_snapshot_falls_to_wrapper() {
    let node = everything(None);
    assert!(matches!(classify(&node), NodeKind::Wrapper(_)));
    assert_eq!(extract_class_names(&[&node]).unwrap(), vec!["from-wrapper"]);
}

/// Parsed-HTML capability with a foreign marker
#[derive(Debug)]
struct ForeignHtml;

impl ParsedHtml for ForeignHtml {
    fn marker(&self) -> &str {
        "[something else]"
    }

    fn attr(&self, _name: &str) -> Option<&str> {
        Some("from-html")
    }
}

impl DomElement for ForeignHtml {
    fn node_type(&self) -> u16 {
        1
    }

    fn constructor_name(&self) -> Option<&str> {
        Some("Element")
    }

    fn get_attribute(&self, _name: &str) -> Option<&str> {
        Some("from-dom")
    }
}

impl RenderedNode for ForeignHtml {
    fn as_parsed_html(&self) -> Option<&dyn ParsedHtml> {
        Some(self)
    }

    fn as_dom(&self) -> Option<&dyn DomElement> {
        Some(self)
    }
}

#[test]
fn test_parsed_html_needs_marker() {
    assert!(matches!(classify(&ForeignHtml), NodeKind::Dom(Some(_))));
    assert_eq!(extract_class_names(&[&ForeignHtml]).unwrap(), vec!["from-dom"]);
}

#[derive(Debug)]
struct Plain;

impl RenderedNode for Plain {}

#[test]
fn test_unsupported_node_message() {
    let err = extract_class_names(&[&Plain]).unwrap_err();
    let ExtractError::UnsupportedNode(description) = &err;
    assert_eq!(description, "Plain");
    assert!(err.to_string().contains("Plain"));
}

#[test]
fn test_element_type_of_wrappers() {
    assert_eq!(TestElement::host("a").element_type(), ElementType::Host("a"));
    assert!(!TestElement::component("A").element_type().is_host());
}
