//! stylesnap CSS
//!
//! Resolves class names into the CSS text a style registry injected for them.
//! CSS is handled as opaque text: entries are selected and rewritten by
//! pattern, never parsed.

mod config;
mod registry;
mod patterns;
mod keyframes;
mod resolver;

pub use config::ResolverConfig;
pub use registry::{registry_keys, DocumentRegistry, StyleEntry, StyleRegistry};
pub use keyframes::KeyframesMap;
pub use patterns::strip_comments;
pub use resolver::StyleResolver;

/// Resolve class names against registry entries with the default configuration
pub fn resolve_styles<S: AsRef<str>>(class_names: &[S], entries: &[StyleEntry]) -> Result<String, StyleError> {
    StyleResolver::new(ResolverConfig::default())?.resolve(class_names, entries)
}

/// Style resolution error
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A generated pattern failed to compile (e.g. exceeded the size limit)
    #[error("Failed to build style pattern: {0}")]
    Pattern(#[from] regex::Error),
}
