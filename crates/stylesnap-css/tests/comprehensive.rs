//! Comprehensive tests for stylesnap-css
//!
//! Resolution fast paths, entry selection, keyframes renaming and document
//! registries.

use regex::Regex;
use stylesnap_css::{
    registry_keys, resolve_styles, DocumentRegistry, ResolverConfig, StyleEntry, StyleRegistry,
    StyleResolver,
};

fn entries(items: &[(&str, &str)]) -> Vec<StyleEntry> {
    items.iter().map(|(key, css)| StyleEntry::new(key, css)).collect()
}

// ============================================================================
// FAST PATHS
// ============================================================================

#[test]
fn test_no_class_names() {
    let names: Vec<String> = Vec::new();
    assert_eq!(resolve_styles(&names, &entries(&[("css", ".css-a{}")])).unwrap(), "");
}

#[test]
fn test_no_entries() {
    assert_eq!(resolve_styles(&["css-abc"], &[]).unwrap(), "");
}

#[test]
fn test_unprefixed_class_names_ignored() {
    // `css-abc` is only relevant when a `css` key exists
    let registry = entries(&[("other", ".css-abc{color:red}")]);
    assert_eq!(resolve_styles(&["css-abc"], &registry).unwrap(), "");
}

// ============================================================================
// ENTRY SELECTION
// ============================================================================

#[test]
fn test_exact_single_rule() {
    let registry = entries(&[("css", ".css-abc{color:red}")]);
    assert_eq!(resolve_styles(&["css-abc"], &registry).unwrap(), ".css-abc{color:red}");
}

#[test]
fn test_entries_keep_registry_order() {
    let registry = entries(&[
        ("css", ".css-b{color:blue}"),
        ("css", ".css-a{color:red}"),
    ]);
    let css = resolve_styles(&["css-a", "css-b"], &registry).unwrap();
    assert_eq!(css, ".css-b{color:blue}.css-a{color:red}");
}

#[test]
fn test_media_query_entry() {
    let registry = entries(&[("css", "@media (min-width:600px){.css-a{color:red}}")]);
    let css = resolve_styles(&["css-a"], &registry).unwrap();
    assert_eq!(css, "@media (min-width:600px){.css-a{color:red}}");
}

#[test]
fn test_duplicate_class_names() {
    let registry = entries(&[("css", ".css-a{color:red}")]);
    let css = resolve_styles(&["css-a", "css-a", "css-a"], &registry).unwrap();
    assert_eq!(css, ".css-a{color:red}");
}

#[test]
fn test_class_name_with_regex_metacharacters() {
    let registry = entries(&[
        ("css", ".css-a\\.b{color:red}"),
        ("css", ".css-aXb{color:blue}"),
    ]);
    let css = resolve_styles(&["css-a.b"], &registry).unwrap();
    assert!(!css.contains("blue"));
}

#[test]
fn test_selectors_come_from_input() {
    let registry = entries(&[
        ("css", ".css-1{color:red}"),
        ("css", ".css-2{color:blue}"),
        ("css", ".css-3{color:green}"),
    ]);
    let input = ["css-1", "css-3"];
    let css = resolve_styles(&input, &registry).unwrap();

    let selector = Regex::new(r"\.(css-[\w-]+)").unwrap();
    for caps in selector.captures_iter(&css) {
        assert!(input.contains(&&caps[1]), "unexpected selector {}", &caps[1]);
    }
}

// ============================================================================
// KEYFRAMES
// ============================================================================

#[test]
fn test_keyframes_precede_rules() {
    let registry = entries(&[
        ("css", "@keyframes animation-foo{0%{opacity:0}}"),
        ("css", ".css-xyz{animation:animation-foo 1s}"),
    ]);
    let css = resolve_styles(&["css-xyz"], &registry).unwrap();
    assert_eq!(css, "@keyframes animation-0{0%{opacity:0}}.css-xyz{animation:animation-0 1s}");
    assert!(!css.contains("animation-foo"));
}

#[test]
fn test_keyframes_numbered_by_reference_order() {
    let registry = entries(&[
        ("css", "@keyframes animation-fade{from{opacity:0}}"),
        ("css", "@keyframes animation-spin{to{transform:rotate(1turn)}}"),
        ("css", ".css-a{animation:animation-spin 1s,animation-fade 2s}"),
    ]);
    let css = resolve_styles(&["css-a"], &registry).unwrap();
    assert_eq!(
        css,
        "@keyframes animation-0{to{transform:rotate(1turn)}}\
         @keyframes animation-1{from{opacity:0}}\
         .css-a{animation:animation-0 1s,animation-1 2s}"
    );
}

#[test]
fn test_duplicate_keyframes_entries_accumulate() {
    let registry = entries(&[
        ("css", "@keyframes animation-x{from{opacity:0}}"),
        ("css", "@keyframes animation-x{from{opacity:0}}"),
        ("css", ".css-a{animation:animation-x 1s}"),
    ]);
    let css = resolve_styles(&["css-a"], &registry).unwrap();
    assert_eq!(
        css,
        "@keyframes animation-0{from{opacity:0}}@keyframes animation-0{from{opacity:0}}\
         .css-a{animation:animation-0 1s}"
    );
}

#[test]
fn test_second_keyframes_in_entry_not_captured() {
    let registry = entries(&[
        ("css", "@keyframes animation-a{from{opacity:0}}@keyframes animation-b{to{opacity:1}}"),
        ("css", ".css-a{animation:animation-a 1s,animation-b 1s}"),
    ]);
    let css = resolve_styles(&["css-a"], &registry).unwrap();
    // Only `animation-a` is known; its entry carries both declarations
    assert_eq!(
        css,
        "@keyframes animation-0{from{opacity:0}}@keyframes animation-b{to{opacity:1}}\
         .css-a{animation:animation-0 1s,animation-b 1s}"
    );
}

#[test]
fn test_keyframes_not_at_entry_start_ignored() {
    let registry = entries(&[
        ("css", "/*x*/@keyframes animation-a{from{opacity:0}}"),
        ("css", ".css-a{animation:animation-a 1s}"),
    ]);
    let css = resolve_styles(&["css-a"], &registry).unwrap();
    assert_eq!(css, ".css-a{animation:animation-a 1s}");
}

#[test]
fn test_unreferenced_keyframes_dropped() {
    let registry = entries(&[
        ("css", "@keyframes animation-unused{from{opacity:0}}"),
        ("css", ".css-a{color:red}"),
    ]);
    assert_eq!(resolve_styles(&["css-a"], &registry).unwrap(), ".css-a{color:red}");
}

#[test]
fn test_idempotent() {
    let registry = entries(&[
        ("css", "@keyframes animation-a{from{opacity:0}}"),
        ("css", "/* a */.css-a{animation:animation-a 1s}"),
    ]);
    let resolver = StyleResolver::default();
    let first = resolver.resolve(&["css-a"], &registry).unwrap();
    let second = resolver.resolve(&["css-a"], &registry).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// REGISTRIES
// ============================================================================

#[test]
fn test_document_registry_from_html() {
    let html = r#"<html><head>
        <style data-emotion="css">.css-1{color:red}</style>
        <style>.css-1{color:blue}</style>
        <style data-emotion="css">.css-2{color:green}</style>
    </head><body></body></html>"#;
    let doc = stylesnap_html::parse(html).unwrap();
    let registry = DocumentRegistry::new(&doc, "data-emotion");
    let snapshot = registry.style_entries();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(registry_keys(&snapshot), vec!["css"]);

    let css = StyleResolver::default().resolve_registry(&["css-1"], &registry).unwrap();
    assert_eq!(css, ".css-1{color:red}");
}

#[test]
fn test_custom_registry_attribute() {
    let html = r#"<style data-styles="app">.app-x{margin:0}</style>"#;
    let doc = stylesnap_html::parse(html).unwrap();
    let config = ResolverConfig { registry_attribute: "data-styles".into(), ..ResolverConfig::default() };
    let registry = DocumentRegistry::with_config(&doc, &config);
    let resolver = StyleResolver::new(config.clone()).unwrap();

    assert_eq!(resolver.resolve_registry(&["app-x"], &registry).unwrap(), ".app-x{margin:0}");
}
