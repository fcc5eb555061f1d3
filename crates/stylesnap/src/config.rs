//! Inspector configuration

use stylesnap_css::ResolverConfig;

/// Inspector settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Attribute naming the registry key on injected `<style>` elements
    pub registry_attribute: String,
    /// Prefix used when renaming keyframes
    pub keyframes_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        let resolver = ResolverConfig::default();
        Self {
            registry_attribute: resolver.registry_attribute,
            keyframes_prefix: resolver.keyframes_prefix,
        }
    }
}

impl From<Config> for ResolverConfig {
    fn from(config: Config) -> Self {
        Self {
            registry_attribute: config.registry_attribute,
            keyframes_prefix: config.keyframes_prefix,
        }
    }
}
