//! Style registry
//!
//! A registry is whatever holds the injected style blocks. Resolution only
//! ever sees a snapshot of its entries.

use indexmap::IndexSet;
use stylesnap_dom::Document;

use crate::ResolverConfig;

/// One injected style block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    /// Registry key (class-name prefix of the injecting instance)
    pub key: String,
    /// Raw CSS text
    pub css: String,
}

impl StyleEntry {
    pub fn new(key: &str, css: &str) -> Self {
        Self { key: key.to_string(), css: css.to_string() }
    }
}

/// Source of style registry entries
pub trait StyleRegistry {
    /// Current entries, in injection order
    fn style_entries(&self) -> Vec<StyleEntry>;
}

impl StyleRegistry for [StyleEntry] {
    fn style_entries(&self) -> Vec<StyleEntry> {
        self.to_vec()
    }
}

impl StyleRegistry for Vec<StyleEntry> {
    fn style_entries(&self) -> Vec<StyleEntry> {
        self.clone()
    }
}

/// Registry backed by the keyed `<style>` elements of a document
#[derive(Debug, Clone, Copy)]
pub struct DocumentRegistry<'a> {
    document: &'a Document,
    attribute: &'a str,
}

impl<'a> DocumentRegistry<'a> {
    /// Query `style[<attribute>]` elements
    pub fn new(document: &'a Document, attribute: &'a str) -> Self {
        Self { document, attribute }
    }

    /// Use the configured registry attribute
    pub fn with_config(document: &'a Document, config: &'a ResolverConfig) -> Self {
        Self::new(document, &config.registry_attribute)
    }
}

impl StyleRegistry for DocumentRegistry<'_> {
    fn style_entries(&self) -> Vec<StyleEntry> {
        let entries: Vec<_> = self.document
            .elements_with_attribute("style", self.attribute)
            .into_iter()
            .map(|element| StyleEntry {
                key: element.get_attribute(self.attribute).unwrap_or_default().to_string(),
                css: element.text_content(),
            })
            .collect();
        tracing::trace!("Found {} style[{}] elements", entries.len(), self.attribute);
        entries
    }
}

/// Distinct non-empty registry keys, in order of first appearance
pub fn registry_keys(entries: &[StyleEntry]) -> Vec<&str> {
    entries.iter()
        .map(|entry| entry.key.as_str())
        .filter(|key| !key.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
