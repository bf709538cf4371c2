//! Integration tests for selection-path lookups.
//!
//! Tests cover:
//! - Every indexed path resolving to content with steps
//! - Exact-match lookups without cross-table fallback
//! - `NotFound` for absent categories, sub-categories and keys
//! - Hidden step filtering and code block order on real content

use registry::views::LookupError;
use registry::ViewKind;

use super::common::{content_at, load_registry, visible_titles};

#[test]
fn test_every_path_resolves_with_steps() {
    let registry = load_registry();

    for kind in [ViewKind::Legacy, ViewKind::Reorganized] {
        let view = registry.view(kind);
        let mut count = 0;
        for (path, _) in view.paths() {
            let content = content_at(view, &path.category, &path.sub_category, &path.key);
            assert!(!content.entries.is_empty(), "{kind}: {path} has no steps");
            assert!(!content.title.is_empty(), "{kind}: {path} has no title");
            count += 1;
        }
        assert_eq!(count, view.integration_count());
        assert!(count > 0);
    }
}

#[test]
fn test_legacy_categories_in_order() {
    let registry = load_registry();
    assert_eq!(
        registry.legacy().list_categories(),
        vec![
            "client",
            "backend",
            "backend-logging",
            "traces",
            "metrics",
            "other",
            "server",
        ]
    );
}

#[test]
fn test_reorganized_categories_in_order() {
    let registry = load_registry();
    let view = registry.reorganized();
    assert_eq!(
        view.list_categories(),
        vec![
            "client", "dotnet", "elixir", "go", "infra", "java", "js", "php", "python", "ruby",
            "rust"
        ]
    );
    for category in view.list_categories() {
        assert_eq!(view.list_sub_categories(category).unwrap(), vec!["sdks"]);
    }
}

#[test]
fn test_backend_go_integrations_in_authoring_order() {
    let registry = load_registry();
    let keys: Vec<&str> = registry
        .legacy()
        .list_integrations("backend", "go")
        .unwrap()
        .iter()
        .map(|integration| integration.key)
        .collect();
    assert_eq!(keys, vec!["gqlgen", "fiber", "echo", "chi", "mux", "gin"]);
}

#[test]
fn test_other_keys_stay_in_their_sub_table() {
    let registry = load_registry();
    let view = registry.legacy();

    let ruby = content_at(view, "backend", "ruby", "other");
    let rust = content_at(view, "backend", "rust", "other");

    assert_ne!(ruby.title, rust.title);
    assert_eq!(ruby.title, "Ruby");
    assert_eq!(rust.title, "Rust");
}

#[test]
fn test_missing_sub_category_is_not_found() {
    let registry = load_registry();
    let err = registry
        .legacy()
        .list_integrations("backend", "cobol")
        .unwrap_err();

    assert_eq!(
        err,
        LookupError::NotFound {
            view: ViewKind::Legacy,
            path: "backend/cobol".to_string(),
        }
    );
}

#[test]
fn test_missing_key_is_not_found() {
    let registry = load_registry();
    let view = registry.legacy();

    // gorm lives under traces/go, never backend/go.
    assert!(view.get_content("backend", "go", "gorm").is_err());
    assert!(view.get_content("traces", "go", "gorm").is_ok());
    assert!(view.get_content("nowhere", "go", "chi").is_err());
}

#[test]
fn test_flat_other_category_exposed_as_sub_category() {
    let registry = load_registry();
    let view = registry.legacy();

    assert_eq!(view.list_sub_categories("other").unwrap(), vec!["other"]);
    let keys: Vec<&str> = view
        .list_integrations("other", "other")
        .unwrap()
        .iter()
        .map(|integration| integration.key)
        .collect();
    assert_eq!(keys, vec!["self-host", "dev-deploy"]);
}

#[test]
fn test_hidden_steps_filtered_from_real_content() {
    let registry = load_registry();
    let react = content_at(registry.legacy(), "client", "js", "react");

    assert!(react.entries.iter().any(|step| step.hidden));
    let titles = visible_titles(&react);
    assert!(!titles.contains(&"Upload sourcemaps."));
    assert_eq!(titles.len(), react.entries.iter().filter(|s| !s.hidden).count());
}

#[test]
fn test_code_blocks_keep_authored_order() {
    let registry = load_registry();
    let react = content_at(registry.legacy(), "client", "js", "react");

    let install = &react.entries[0];
    assert_eq!(install.code_keys(), vec!["npm", "yarn", "pnpm"]);
    assert!(install.code_variant("yarn").unwrap().text.starts_with("yarn add"));
}
