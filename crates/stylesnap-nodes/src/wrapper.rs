//! In-memory traversable render tree
//!
//! `TestElement` models a wrapper-style render: host elements with string
//! tags, and components that may carry their not-yet-traversed render output.
//! A component's render output is only reachable through `dive`, the way a
//! shallow render leaves nested components unexpanded.

use std::collections::BTreeMap;

use crate::{ElementType, RenderedNode, TreeWrapper};

#[derive(Debug, Clone, PartialEq)]
enum ElementKind {
    Host(String),
    Component {
        name: String,
        rendered: Option<Box<TestElement>>,
    },
}

/// Node of a traversable render tree
#[derive(Debug, Clone, PartialEq)]
pub struct TestElement {
    kind: ElementKind,
    props: BTreeMap<String, String>,
    children: Vec<TestElement>,
}

impl TestElement {
    /// Host element with a string tag
    pub fn host(tag: &str) -> Self {
        Self::with_kind(ElementKind::Host(tag.to_string()))
    }

    /// Custom component with no render output
    pub fn component(name: &str) -> Self {
        Self::with_kind(ElementKind::Component { name: name.to_string(), rendered: None })
    }

    fn with_kind(kind: ElementKind) -> Self {
        Self { kind, props: BTreeMap::new(), children: Vec::new() }
    }

    pub fn with_prop(mut self, name: &str, value: &str) -> Self {
        self.props.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: TestElement) -> Self {
        self.children.push(child);
        self
    }

    /// Set what a component renders. Ignored for host elements.
    pub fn renders(mut self, output: TestElement) -> Self {
        if let ElementKind::Component { rendered, .. } = &mut self.kind {
            *rendered = Some(Box::new(output));
        }
        self
    }

    pub fn children(&self) -> &[TestElement] {
        &self.children
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&dyn TreeWrapper) -> bool,
        out: &mut Vec<&'a dyn TreeWrapper>,
    ) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_matching(predicate, out);
        }
    }
}

impl TreeWrapper for TestElement {
    fn element_type(&self) -> ElementType<'_> {
        match &self.kind {
            ElementKind::Host(tag) => ElementType::Host(tag),
            ElementKind::Component { name, .. } => ElementType::Component(name),
        }
    }

    fn prop(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    fn find_where<'a>(&'a self, predicate: &dyn Fn(&dyn TreeWrapper) -> bool) -> Vec<&'a dyn TreeWrapper> {
        let mut out = Vec::new();
        self.collect_matching(predicate, &mut out);
        out
    }

    fn dive(&self) -> Option<Box<dyn TreeWrapper + '_>> {
        match &self.kind {
            ElementKind::Component { rendered: Some(output), .. } => {
                Some(Box::new(&**output))
            }
            _ => None,
        }
    }
}

impl RenderedNode for TestElement {
    fn as_wrapper(&self) -> Option<&dyn TreeWrapper> {
        Some(self)
    }
}
