//! Resolver configuration

/// Style resolution settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Attribute naming the registry key on injected `<style>` elements
    pub registry_attribute: String,
    /// Prefix of generated animation names; renamed keyframes become
    /// `<prefix>-0`, `<prefix>-1`, ...
    pub keyframes_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_attribute: "data-emotion".into(),
            keyframes_prefix: "animation".into(),
        }
    }
}
