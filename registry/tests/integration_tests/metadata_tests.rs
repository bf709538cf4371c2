//! Integration tests for group metadata and product filtering.

use registry::models::Product;

use super::common::{load_registry, TEST_SITE_URL};

#[test]
fn test_server_sub_categories_carry_metadata() {
    let registry = load_registry();
    let view = registry.legacy();

    for sub in view.list_sub_categories("server").unwrap() {
        let metadata = view.sub_category_metadata("server", sub).unwrap();
        assert!(metadata.is_some(), "server/{sub} has no metadata");
    }
}

#[test]
fn test_logo_urls_resolved_against_site() {
    let registry = load_registry();
    let metadata = registry
        .legacy()
        .sub_category_metadata("server", "go")
        .unwrap()
        .unwrap();

    assert_eq!(metadata.title, "Go");
    assert_eq!(
        metadata.logo_url.as_deref(),
        Some(format!("{TEST_SITE_URL}/images/quickstart/go.svg").as_str())
    );
}

#[test]
fn test_otlp_metadata_has_no_logo() {
    let registry = load_registry();
    let metadata = registry
        .legacy()
        .sub_category_metadata("server", "otlp")
        .unwrap()
        .unwrap();

    assert_eq!(metadata.title, "OpenTelemetry");
    assert!(metadata.logo_url.is_none());
}

#[test]
fn test_reorganized_categories_carry_titles() {
    let registry = load_registry();
    let view = registry.reorganized();

    assert_eq!(view.category_metadata("go").unwrap().unwrap().title, "Golang");
    for category in view.list_categories() {
        assert!(view.category_metadata(category).unwrap().is_some());
        assert!(view.sub_category_metadata(category, "sdks").unwrap().is_none());
    }
}

#[test]
fn test_metadata_lookup_on_missing_group() {
    let registry = load_registry();
    assert!(registry.legacy().category_metadata("nowhere").is_err());
    assert!(registry
        .legacy()
        .sub_category_metadata("server", "nowhere")
        .is_err());
}

#[test]
fn test_integrations_for_logs() {
    let registry = load_registry();
    let view = registry.legacy();
    let paths = view.integrations_for_product(Product::Logs);

    assert!(paths
        .iter()
        .any(|p| p.to_string() == "backend-logging/hosting/vercel"));
    for path in &paths {
        let content = view
            .get_content(&path.category, &path.sub_category, &path.key)
            .unwrap();
        assert!(content.configures(Product::Logs));
    }
    assert!(!paths.iter().any(|p| p.category == "other"));
}

#[test]
fn test_integrations_for_metrics() {
    let registry = load_registry();
    let view = registry.legacy();
    let paths: Vec<String> = view
        .integrations_for_product(Product::Metrics)
        .iter()
        .map(ToString::to_string)
        .collect();

    for sub in view.list_sub_categories("metrics").unwrap() {
        for integration in view.list_integrations("metrics", sub).unwrap() {
            let path = format!("metrics/{sub}/{}", integration.key);
            assert!(paths.contains(&path), "{path} is not tagged with Metrics");
        }
    }
    assert!(paths.contains(&"metrics/otlp/otlp".to_string()));
}
