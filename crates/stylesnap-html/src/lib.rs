//! stylesnap HTML
//!
//! HTML5 parser built on html5ever, producing `stylesnap_dom` documents, and a
//! lightweight selection type over parsed markup.

mod parser;
mod selection;

pub use parser::HtmlParser;
pub use selection::{HtmlSelection, PARSED_HTML_MARKER};

use stylesnap_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Parse markup and select its top-level body elements
pub fn load(html: &str) -> Result<HtmlSelection, HtmlError> {
    HtmlSelection::load(html)
}

/// HTML parsing error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}
