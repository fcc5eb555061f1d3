//! Inspector - nodes in, CSS out

use stylesnap_css::{DocumentRegistry, StyleRegistry, StyleResolver};
use stylesnap_dom::Document;
use stylesnap_nodes::{extract_class_names, RenderedNode};

use crate::{Config, Error};

/// Resolves the styles behind rendered nodes
#[derive(Debug, Clone)]
pub struct Inspector {
    resolver: StyleResolver,
}

impl Inspector {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self { resolver: StyleResolver::new(config.into())? })
    }

    /// Class names of the nodes, in node order
    pub fn class_names(&self, nodes: &[&dyn RenderedNode]) -> Result<Vec<String>, Error> {
        Ok(extract_class_names(nodes)?)
    }

    /// CSS injected for the nodes' class names
    pub fn styles_for<R>(&self, nodes: &[&dyn RenderedNode], registry: &R) -> Result<String, Error>
    where
        R: StyleRegistry + ?Sized,
    {
        let class_names = self.class_names(nodes)?;
        Ok(self.resolver.resolve_registry(&class_names, registry)?)
    }

    /// CSS for the nodes, read from the document's keyed `<style>` elements
    pub fn styles_in_document(&self, nodes: &[&dyn RenderedNode], document: &Document) -> Result<String, Error> {
        let registry = DocumentRegistry::with_config(document, self.resolver.config());
        self.styles_for(nodes, &registry)
    }

    /// Check the nodes' CSS against `expected`, ignoring whitespace layout
    pub fn assert_styles<R>(&self, nodes: &[&dyn RenderedNode], registry: &R, expected: &str) -> Result<(), Error>
    where
        R: StyleRegistry + ?Sized,
    {
        let actual = self.styles_for(nodes, registry)?;
        if normalize_css(&actual) == normalize_css(expected) {
            return Ok(());
        }
        tracing::debug!("Style assertion failed for {} nodes", nodes.len());
        Err(Error::StyleMismatch { expected: expected.to_string(), actual })
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self { resolver: StyleResolver::default() }
    }
}

/// Collapse whitespace runs to single spaces and drop whitespace next to
/// `{`, `}`, `;`, `:` and `,`
pub fn normalize_css(css: &str) -> String {
    let collapsed = css.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let next_is_punct = chars.peek().is_some_and(|&n| is_css_punct(n));
            let prev_is_punct = out.ends_with(is_css_punct);
            if next_is_punct || prev_is_punct {
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn is_css_punct(c: char) -> bool {
    matches!(c, '{' | '}' | ';' | ':' | ',')
}
