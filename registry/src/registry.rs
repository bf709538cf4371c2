//! The assembled quickstart registry.

use crate::config::RegistryConfig;
use crate::store::{ContentStore, StoreError};
use crate::views::{RegistryView, ViewError, ViewKind, LEGACY, REORGANIZED};
use thiserror::Error;

/// Errors that can occur while loading the registry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The content store could not be built.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A view could not be built over the store.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Content store plus both presentation views.
///
/// Built once at startup and read-only afterwards; share it behind an `Arc`
/// to read it from several threads.
///
/// # Example
///
/// ```
/// use registry::{Registry, RegistryConfig};
///
/// let registry = Registry::load(&RegistryConfig::default()).unwrap();
/// let content = registry
///     .legacy()
///     .get_content("backend", "go", "chi")
///     .unwrap();
/// assert!(!content.renderable_steps().is_empty());
/// ```
#[derive(Debug)]
pub struct Registry {
    store: ContentStore,
    legacy: RegistryView,
    reorganized: RegistryView,
}

impl Registry {
    /// Loads the embedded content and builds both views over it.
    ///
    /// # Errors
    ///
    /// Returns an error if any content document is malformed or a view
    /// references content that does not exist.
    pub fn load(config: &RegistryConfig) -> Result<Self, LoadError> {
        let store = ContentStore::embedded()?;
        Self::with_store(store, config)
    }

    /// Builds both views over an existing store.
    ///
    /// # Errors
    ///
    /// Returns an error if a view references content the store does not hold.
    pub fn with_store(store: ContentStore, config: &RegistryConfig) -> Result<Self, LoadError> {
        let legacy = RegistryView::build(ViewKind::Legacy, LEGACY, &store, config)?;
        let reorganized = RegistryView::build(ViewKind::Reorganized, REORGANIZED, &store, config)?;

        Ok(Self {
            store,
            legacy,
            reorganized,
        })
    }

    /// Returns the view of the given kind.
    #[must_use]
    pub fn view(&self, kind: ViewKind) -> &RegistryView {
        match kind {
            ViewKind::Legacy => &self.legacy,
            ViewKind::Reorganized => &self.reorganized,
        }
    }

    /// Returns the view grouped by product surface.
    #[must_use]
    pub fn legacy(&self) -> &RegistryView {
        &self.legacy
    }

    /// Returns the view grouped by source ecosystem.
    #[must_use]
    pub fn reorganized(&self) -> &RegistryView {
        &self.reorganized
    }

    /// Returns the underlying content store.
    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.store
    }
}
