//! Common test utilities and helpers for integration tests.

use registry::models::QuickStartContent;
use registry::{Registry, RegistryConfig, RegistryView};
use std::sync::Arc;

/// Site base URL used by registries built for tests.
pub const TEST_SITE_URL: &str = "https://docs.test";

/// Loads the registry from the embedded content.
pub fn load_registry() -> Registry {
    Registry::load(&RegistryConfig::new(TEST_SITE_URL))
        .expect("embedded content should load")
}

/// Looks up content at a path that is expected to exist.
pub fn content_at(
    view: &RegistryView,
    category: &str,
    sub_category: &str,
    key: &str,
) -> Arc<QuickStartContent> {
    view.get_content(category, sub_category, key)
        .unwrap_or_else(|e| panic!("{category}/{sub_category}/{key}: {e}"))
}

/// Returns the titles of the steps shown by default.
pub fn visible_titles(content: &QuickStartContent) -> Vec<&str> {
    content
        .renderable_steps()
        .iter()
        .map(|step| step.title.as_str())
        .collect()
}
