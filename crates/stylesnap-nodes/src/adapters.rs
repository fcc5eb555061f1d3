//! Node capabilities for the workspace's own DOM and HTML types

use stylesnap_dom::ElementRef;
use stylesnap_html::HtmlSelection;

use crate::{DomElement, ParsedHtml, RenderedNode};

impl ParsedHtml for HtmlSelection {
    fn marker(&self) -> &str {
        HtmlSelection::marker(self)
    }

    fn attr(&self, name: &str) -> Option<&str> {
        HtmlSelection::attr(self, name)
    }
}

impl RenderedNode for HtmlSelection {
    fn as_parsed_html(&self) -> Option<&dyn ParsedHtml> {
        Some(self)
    }
}

impl DomElement for ElementRef<'_> {
    fn node_type(&self) -> u16 {
        ElementRef::node_type(self).code()
    }

    fn constructor_name(&self) -> Option<&str> {
        Some(ElementRef::constructor_name(self))
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        ElementRef::get_attribute(self, name)
    }
}

impl RenderedNode for ElementRef<'_> {
    fn as_dom(&self) -> Option<&dyn DomElement> {
        Some(self)
    }
}
