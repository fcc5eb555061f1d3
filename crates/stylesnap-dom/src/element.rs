//! Element handles
//!
//! `ElementRef` is a borrowed view of one element in a `DomTree`, exposing the
//! accessors a live DOM element would (`nodeType`, constructor name,
//! `getAttribute`).

use crate::{ClassList, DomTree, ElementData, Namespace, NodeId, NodeType};

/// Borrowed element in a tree
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a DomTree,
    id: NodeId,
    data: &'a ElementData,
}

impl<'a> ElementRef<'a> {
    /// Wrap `id` if it names an element
    pub fn new(tree: &'a DomTree, id: NodeId) -> Option<Self> {
        let data = tree.get(id)?.as_element()?;
        Some(Self { tree, id, data })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a DomTree {
        self.tree
    }

    /// Always `NodeType::Element`
    pub fn node_type(&self) -> NodeType {
        NodeType::Element
    }

    pub fn local_name(&self) -> &'a str {
        &self.data.local_name
    }

    pub fn namespace(&self) -> Namespace {
        self.data.namespace
    }

    /// `tagName`: uppercased for HTML elements
    pub fn tag_name(&self) -> String {
        match self.data.namespace {
            Namespace::Html => self.data.local_name.to_ascii_uppercase(),
            _ => self.data.local_name.clone(),
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        self.data.get_attr(name)
    }

    /// Tokens of the `class` attribute
    pub fn class_list(&self) -> ClassList {
        self.get_attribute("class")
            .map(ClassList::from_string)
            .unwrap_or_default()
    }

    /// Concatenated descendant text
    pub fn text_content(&self) -> String {
        self.tree.text_content(self.id)
    }

    /// Child elements, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let tree = self.tree;
        tree.children(self.id).filter_map(move |(id, _)| ElementRef::new(tree, id))
    }

    /// Name of the DOM interface backing this element (`HTMLDivElement`,
    /// `SVGPathElement`, ...)
    pub fn constructor_name(&self) -> &'static str {
        match self.data.namespace {
            Namespace::Html => html_interface(&self.data.local_name),
            Namespace::Svg => svg_interface(&self.data.local_name),
            Namespace::MathMl => "MathMLElement",
            Namespace::Other => "Element",
        }
    }
}

fn html_interface(local_name: &str) -> &'static str {
    match local_name {
        "a" => "HTMLAnchorElement",
        "body" => "HTMLBodyElement",
        "br" => "HTMLBRElement",
        "button" => "HTMLButtonElement",
        "canvas" => "HTMLCanvasElement",
        "div" => "HTMLDivElement",
        "form" => "HTMLFormElement",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "HTMLHeadingElement",
        "head" => "HTMLHeadElement",
        "html" => "HTMLHtmlElement",
        "img" => "HTMLImageElement",
        "input" => "HTMLInputElement",
        "label" => "HTMLLabelElement",
        "li" => "HTMLLIElement",
        "link" => "HTMLLinkElement",
        "meta" => "HTMLMetaElement",
        "ol" => "HTMLOListElement",
        "p" => "HTMLParagraphElement",
        "pre" => "HTMLPreElement",
        "script" => "HTMLScriptElement",
        "select" => "HTMLSelectElement",
        "span" => "HTMLSpanElement",
        "style" => "HTMLStyleElement",
        "table" => "HTMLTableElement",
        "textarea" => "HTMLTextAreaElement",
        "title" => "HTMLTitleElement",
        "ul" => "HTMLUListElement",
        // Autonomous custom elements
        name if name.contains('-') => "HTMLElement",
        "abbr" | "article" | "aside" | "b" | "code" | "em" | "footer" | "header" | "i"
        | "main" | "nav" | "section" | "small" | "strong" => "HTMLElement",
        _ => "HTMLUnknownElement",
    }
}

fn svg_interface(local_name: &str) -> &'static str {
    match local_name {
        "svg" => "SVGSVGElement",
        "g" => "SVGGElement",
        "path" => "SVGPathElement",
        "circle" => "SVGCircleElement",
        "rect" => "SVGRectElement",
        "line" => "SVGLineElement",
        "text" => "SVGTextElement",
        "use" => "SVGUseElement",
        _ => "SVGElement",
    }
}
