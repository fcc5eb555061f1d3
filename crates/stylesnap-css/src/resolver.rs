//! Class names → CSS text
//!
//! Entries are never split: an entry whose text mentions `.<class>` for a
//! relevant class contributes its whole text, unrelated rules included.

use indexmap::IndexSet;
use regex::Regex;

use crate::keyframes::KeyframesMap;
use crate::patterns::{self, strip_comments};
use crate::registry::{registry_keys, StyleEntry, StyleRegistry};
use crate::{ResolverConfig, StyleError};

/// Resolves class names against style registry entries
#[derive(Debug, Clone)]
pub struct StyleResolver {
    config: ResolverConfig,
    keyframes_pattern: Regex,
}

impl StyleResolver {
    pub fn new(config: ResolverConfig) -> Result<Self, StyleError> {
        let keyframes_pattern = patterns::keyframes_pattern(&config.keyframes_prefix)?;
        Ok(Self { config, keyframes_pattern })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve against a registry snapshot
    pub fn resolve_registry<S, R>(&self, class_names: &[S], registry: &R) -> Result<String, StyleError>
    where
        S: AsRef<str>,
        R: StyleRegistry + ?Sized,
    {
        self.resolve(class_names, &registry.style_entries())
    }

    /// Keyframes text followed by every entry that styles one of the class
    /// names, with animation names normalised and comments removed.
    ///
    /// Only class names carrying a registry key prefix (`<key>-`) are looked
    /// up. Returns an empty string when nothing is relevant.
    pub fn resolve<S: AsRef<str>>(&self, class_names: &[S], entries: &[StyleEntry]) -> Result<String, StyleError> {
        if class_names.is_empty() {
            tracing::debug!("No class names to resolve");
            return Ok(String::new());
        }

        let keys = registry_keys(entries);
        if keys.is_empty() {
            tracing::debug!("Style registry has no keyed entries");
            return Ok(String::new());
        }

        let key_pattern = patterns::key_pattern(&keys)?;
        let relevant: Vec<&str> = class_names.iter()
            .map(|name| AsRef::<str>::as_ref(name))
            .filter(|name| key_pattern.is_match(name))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        if relevant.is_empty() {
            tracing::debug!("None of {} class names match registry keys {:?}", class_names.len(), keys);
            return Ok(String::new());
        }

        let selector_pattern = patterns::selector_pattern(&relevant)?;
        let mut styles = String::new();
        let mut keyframes = KeyframesMap::new();

        for entry in entries {
            let css = entry.css.as_str();
            if selector_pattern.is_match(css) {
                styles.push_str(css);
            }
            if let Some(caps) = self.keyframes_pattern.captures(css) {
                tracing::trace!("Found keyframes {} in registry {:?}", &caps[1], entry.key);
                keyframes.record(&caps[1], css);
            }
        }

        let (keyframes_styles, styles) = keyframes.rename(&styles, &self.config.keyframes_prefix)?;

        tracing::debug!(
            "Resolved {} class names into {} bytes of CSS ({} keyframes seen)",
            relevant.len(),
            keyframes_styles.len() + styles.len(),
            keyframes.len(),
        );
        Ok(strip_comments(&(keyframes_styles + &styles)))
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        let config = ResolverConfig::default();
        let keyframes_pattern = patterns::keyframes_pattern(&config.keyframes_prefix)
            .unwrap_or_else(|e| panic!("BUG: Invalid default keyframes pattern: {}", e));
        Self { config, keyframes_pattern }
    }
}
