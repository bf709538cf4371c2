//! Integration tests for content shared between tables and views.

use std::sync::Arc;

use super::common::{content_at, load_registry};

#[test]
fn test_go_chi_shared_between_views() {
    let registry = load_registry();

    let legacy = content_at(registry.legacy(), "server", "go", "chi");
    let reorganized = content_at(registry.reorganized(), "go", "sdks", "chi");

    assert!(Arc::ptr_eq(&legacy, &reorganized));
    assert!(Arc::ptr_eq(&legacy, registry.store().get("server/go/chi").unwrap()));
}

#[test]
fn test_every_reorganized_entry_shared_with_legacy_view() {
    let registry = load_registry();
    let legacy: Vec<_> = registry.legacy().paths().collect();

    for (path, integration) in registry.reorganized().paths() {
        assert!(
            legacy
                .iter()
                .any(|(_, other)| Arc::ptr_eq(&other.content, &integration.content)),
            "{path} is not listed in the legacy view"
        );
    }
}

#[test]
fn test_logrus_and_other_share_one_object() {
    let registry = load_registry();
    let view = registry.legacy();

    let logrus = content_at(view, "backend-logging", "go", "logrus");
    let other = content_at(view, "backend-logging", "go", "other");
    let fiber = content_at(view, "backend-logging", "go", "fiber");

    assert!(Arc::ptr_eq(&logrus, &other));
    assert!(!Arc::ptr_eq(&logrus, &fiber));
}

#[test]
fn test_rust_traces_share_one_object() {
    let registry = load_registry();
    let view = registry.legacy();

    assert!(Arc::ptr_eq(
        &content_at(view, "traces", "rust", "other"),
        &content_at(view, "traces", "rust", "actix"),
    ));
}

#[test]
fn test_backend_and_server_are_distinct_objects() {
    let registry = load_registry();

    let backend = content_at(registry.legacy(), "backend", "go", "chi");
    let server = content_at(registry.legacy(), "server", "go", "chi");

    assert!(!Arc::ptr_eq(&backend, &server));
}
