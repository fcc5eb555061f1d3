//! Class-name extraction

use stylesnap_dom::ClassList;

use crate::{classify, is_dom_element, ExtractError, NodeKind, RenderedNode, TreeWrapper};

/// Class names of every node, in node order. Duplicates are kept.
pub fn extract_class_names(nodes: &[&dyn RenderedNode]) -> Result<Vec<String>, ExtractError> {
    let mut selectors = Vec::new();
    for &node in nodes {
        selectors.extend(class_names_of(node)?);
    }
    tracing::debug!("Extracted {} class names from {} nodes", selectors.len(), nodes.len());
    Ok(selectors)
}

/// Class names of a single node
pub fn class_names_of(node: &dyn RenderedNode) -> Result<ClassList, ExtractError> {
    let kind = classify(node);
    tracing::trace!("Classified {:?} as {:?}", node, kind);

    let classes = match kind {
        NodeKind::Snapshot(snapshot) => snapshot.class_attribute().map(str::to_string),
        NodeKind::Wrapper(wrapper) => wrapper_class_name(wrapper),
        NodeKind::ParsedHtml(html) => html.attr("class").map(str::to_string),
        NodeKind::Dom(Some(element)) => {
            if !is_dom_element(element) {
                tracing::trace!("Reading class attribute from non-element DOM value {:?}", node);
            }
            element.get_attribute("class").map(str::to_string)
        }
        NodeKind::Dom(None) => return Err(ExtractError::UnsupportedNode(format!("{:?}", node))),
    };

    Ok(classes.as_deref().map(ClassList::from_string).unwrap_or_default())
}

fn should_dive(node: &dyn TreeWrapper) -> bool {
    !node.element_type().is_host()
}

fn is_tag_with_class_name(node: &dyn TreeWrapper) -> bool {
    node.prop("className").is_some_and(|c| !c.is_empty()) && node.element_type().is_host()
}

/// `className` of the first host element at or below `node`, diving into an
/// unrendered component first
fn wrapper_class_name(node: &dyn TreeWrapper) -> Option<String> {
    let dived;
    let actual: &dyn TreeWrapper = match should_dive(node).then(|| node.dive()).flatten() {
        Some(output) => {
            dived = output;
            &*dived
        }
        None => node,
    };

    let found = actual.find_where(&is_tag_with_class_name);
    found.first()
        .and_then(|found| found.prop("className"))
        .map(str::to_string)
}
