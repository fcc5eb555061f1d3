//! stylesnap
//!
//! Test-assertion helper: collects the class names of rendered nodes and
//! resolves them into the CSS a style registry injected for them.
//!
//! # Example
//! ```rust,ignore
//! use stylesnap::{Config, Inspector, RenderedNode, StyleEntry, TestElement};
//!
//! let inspector = Inspector::new(Config::default())?;
//! let button = TestElement::component("Button")
//!     .renders(TestElement::host("button").with_prop("className", "css-1"));
//! let registry = vec![StyleEntry::new("css", ".css-1{color:red}")];
//!
//! inspector.assert_styles(&[&button as &dyn RenderedNode], &registry, ".css-1{color:red}")?;
//! ```

mod config;
mod inspector;

pub use config::Config;
pub use inspector::{normalize_css, Inspector};

pub use stylesnap_css::{StyleEntry, StyleRegistry, DocumentRegistry};
pub use stylesnap_nodes::{RenderedNode, SnapshotNode, TestElement};

// Re-export sub-crates for advanced usage
pub use stylesnap_dom as dom;
pub use stylesnap_html as html;
pub use stylesnap_nodes as nodes;
pub use stylesnap_css as css;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// stylesnap error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] stylesnap_nodes::ExtractError),

    #[error(transparent)]
    Style(#[from] stylesnap_css::StyleError),

    #[error(transparent)]
    Html(#[from] stylesnap_html::HtmlError),

    #[error("Rendered styles differ\nexpected:\n{expected}\nactual:\n{actual}")]
    StyleMismatch { expected: String, actual: String },
}
