//! Keyframes collection and renaming
//!
//! Animation names are generated per injection, so the same animation can show
//! up under different names between runs. Names are rewritten to a sequential
//! `<prefix>-N` scheme, numbered in the order rules reference them.

use std::collections::HashMap;

use indexmap::IndexMap;
use regex::Captures;

use crate::patterns::alternation;
use crate::StyleError;

/// Animation name → every entry text that declared it
#[derive(Debug, Default, Clone)]
pub struct KeyframesMap {
    bodies: IndexMap<String, String>,
}

impl KeyframesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `css` to the text collected for `name`
    pub fn record(&mut self, name: &str, css: &str) {
        self.bodies.entry(name.to_string()).or_default().push_str(css);
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Collected text for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bodies.get(name).map(String::as_str)
    }

    /// Names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    /// Rename every known animation name referenced in `styles`.
    ///
    /// Returns `(keyframes, styles)`: the keyframes text of each referenced
    /// animation, in first-reference order, and `styles` with names replaced.
    /// Both use the same renaming. Animations never referenced from `styles`
    /// are left out.
    pub fn rename(&self, styles: &str, prefix: &str) -> Result<(String, String), StyleError> {
        if self.is_empty() {
            return Ok((String::new(), styles.to_string()));
        }
        let pattern = regex::Regex::new(&alternation(self.names()))?;

        let mut renamed: HashMap<String, String> = HashMap::new();
        let mut keyframes = String::new();

        let styles = pattern.replace_all(styles, |caps: &Captures| {
            let name = &caps[0];
            if let Some(existing) = renamed.get(name) {
                return existing.clone();
            }
            let next = format!("{}-{}", prefix, renamed.len());
            renamed.insert(name.to_string(), next.clone());
            if let Some(body) = self.get(name) {
                keyframes.push_str(body);
            }
            next
        }).into_owned();

        let keyframes = pattern.replace_all(&keyframes, |caps: &Captures| {
            renamed.get(&caps[0]).cloned().unwrap_or_else(|| caps[0].to_string())
        }).into_owned();

        tracing::debug!("Renamed {} of {} keyframes", renamed.len(), self.len());
        Ok((keyframes, styles))
    }
}
