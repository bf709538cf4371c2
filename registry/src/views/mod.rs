//! Presentation taxonomies over the content store.
//!
//! A `RegistryView` maps category -> sub-category -> integration key to a
//! content object held by the `ContentStore`. Two views exist: the legacy one
//! grouped by product surface and the reorganized one grouped by source
//! ecosystem. Views are declared as static tables of `CategorySpec` and built
//! once against a store; they never copy content.

mod legacy;
mod reorganized;

pub use legacy::LEGACY;
pub use reorganized::REORGANIZED;

use crate::config::RegistryConfig;
use crate::models::{Product, QuickStartContent, QuickStartType};
use crate::store::ContentStore;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Which presentation taxonomy a view implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Grouped by product surface (client, backend, logging, traces, ...).
    Legacy,
    /// Grouped by source ecosystem (go, python, js, ...).
    Reorganized,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Reorganized => write!(f, "reorganized"),
        }
    }
}

impl std::str::FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "reorganized" => Ok(Self::Reorganized),
            _ => Err(format!("unknown view: {s}")),
        }
    }
}

/// Errors returned by view lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No entry exists at the requested selection path.
    #[error("No quickstart found at '{path}' in the {view} view")]
    NotFound {
        /// View that was searched.
        view: ViewKind,
        /// Selection path that missed, `/`-separated.
        path: String,
    },
}

/// Errors that can occur while building a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// An entry names a content id absent from the store.
    #[error("{view} view entry '{path}' references unknown content '{content_id}'")]
    UnknownContent {
        /// View being built.
        view: ViewKind,
        /// Selection path of the entry.
        path: String,
        /// Missing content id.
        content_id: String,
    },

    /// Two entries in one sub-table resolve to the same key string.
    #[error("{view} view sub-table '{path}' lists key '{key}' twice ({first:?}, {second:?})")]
    DuplicateKey {
        /// View being built.
        view: ViewKind,
        /// Category and sub-category of the sub-table.
        path: String,
        /// Colliding key string.
        key: &'static str,
        /// Member already stored under the key.
        first: QuickStartType,
        /// Member that collided.
        second: QuickStartType,
    },

    /// Two categories, or two sub-categories of one category, share a name.
    #[error("{view} view declares '{path}' twice")]
    DuplicateGroup {
        /// View being built.
        view: ViewKind,
        /// Category, or category and sub-category, that was repeated.
        path: String,
    },
}

/// Static declaration of group metadata.
#[derive(Debug, Clone, Copy)]
pub struct MetadataSpec {
    /// Display title.
    pub title: &'static str,
    /// Optional description.
    pub subtitle: Option<&'static str>,
    /// Site-relative logo path, resolved with `RegistryConfig::site_url`.
    pub logo_path: Option<&'static str>,
}

/// Static declaration of a sub-table.
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    /// Sub-category name.
    pub name: &'static str,
    /// Metadata attached to the sub-category.
    pub metadata: Option<MetadataSpec>,
    /// Integration members and the content id each one shows.
    pub entries: &'static [(QuickStartType, &'static str)],
}

/// Static declaration of a category.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Category name.
    pub name: &'static str,
    /// Metadata attached to the category.
    pub metadata: Option<MetadataSpec>,
    /// Sub-tables in display order.
    pub groups: &'static [GroupSpec],
}

/// Title, subtitle and logo attached to a category or sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMetadata {
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Absolute logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl GroupMetadata {
    fn from_spec(spec: &MetadataSpec, config: &RegistryConfig) -> Self {
        Self {
            title: spec.title.to_string(),
            subtitle: spec.subtitle.map(str::to_string),
            logo_url: spec.logo_path.map(|path| config.site_url(path)),
        }
    }
}

/// A single selectable integration.
#[derive(Debug, Clone)]
pub struct Integration {
    /// Key space member this entry was declared with.
    pub kind: QuickStartType,
    /// Id of the content in the store.
    pub content_id: &'static str,
    /// The shared content object.
    pub content: Arc<QuickStartContent>,
}

/// Key and display title of an integration, for populating selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationSummary<'a> {
    /// Table key.
    pub key: &'a str,
    /// Title of the content.
    pub title: &'a str,
}

/// A full selection path into a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPath {
    /// Category name.
    pub category: String,
    /// Sub-category name.
    pub sub_category: String,
    /// Integration key.
    pub key: String,
}

impl std::fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.category, self.sub_category, self.key)
    }
}

#[derive(Debug)]
struct SubCategory {
    metadata: Option<GroupMetadata>,
    integrations: IndexMap<&'static str, Integration>,
}

#[derive(Debug)]
struct Category {
    metadata: Option<GroupMetadata>,
    sub_categories: IndexMap<&'static str, SubCategory>,
}

/// A read-only taxonomy over the content store.
#[derive(Debug)]
pub struct RegistryView {
    kind: ViewKind,
    categories: IndexMap<&'static str, Category>,
}

impl RegistryView {
    /// Builds a view from static table declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entry references a content id the store does not hold
    /// - Two entries of one sub-table resolve to the same key string
    /// - A category or sub-category name is declared twice
    pub fn build(
        kind: ViewKind,
        specs: &[CategorySpec],
        store: &ContentStore,
        config: &RegistryConfig,
    ) -> Result<Self, ViewError> {
        let mut categories = IndexMap::new();

        for spec in specs {
            if categories.contains_key(spec.name) {
                return Err(ViewError::DuplicateGroup {
                    view: kind,
                    path: spec.name.to_string(),
                });
            }
            let mut sub_categories = IndexMap::new();

            for group in spec.groups {
                if sub_categories.contains_key(group.name) {
                    return Err(ViewError::DuplicateGroup {
                        view: kind,
                        path: format!("{}/{}", spec.name, group.name),
                    });
                }
                let mut integrations: IndexMap<&'static str, Integration> = IndexMap::new();

                for &(member, content_id) in group.entries {
                    let key = member.as_str();
                    if let Some(existing) = integrations.get(key) {
                        return Err(ViewError::DuplicateKey {
                            view: kind,
                            path: format!("{}/{}", spec.name, group.name),
                            key,
                            first: existing.kind,
                            second: member,
                        });
                    }

                    let content = store
                        .get(content_id)
                        .ok_or_else(|| ViewError::UnknownContent {
                            view: kind,
                            path: format!("{}/{}/{key}", spec.name, group.name),
                            content_id: content_id.to_string(),
                        })?;

                    integrations.insert(
                        key,
                        Integration {
                            kind: member,
                            content_id,
                            content: Arc::clone(content),
                        },
                    );
                }

                sub_categories.insert(
                    group.name,
                    SubCategory {
                        metadata: group
                            .metadata
                            .as_ref()
                            .map(|m| GroupMetadata::from_spec(m, config)),
                        integrations,
                    },
                );
            }

            categories.insert(
                spec.name,
                Category {
                    metadata: spec
                        .metadata
                        .as_ref()
                        .map(|m| GroupMetadata::from_spec(m, config)),
                    sub_categories,
                },
            );
        }

        let view = Self { kind, categories };
        tracing::info!(
            view = %kind,
            categories = view.categories.len(),
            integrations = view.integration_count(),
            "Registry view built"
        );
        Ok(view)
    }

    /// Returns which taxonomy this view implements.
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Returns the category names in display order.
    #[must_use]
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.keys().copied().collect()
    }

    /// Returns the sub-category names of a category in display order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category does not exist.
    pub fn list_sub_categories(&self, category: &str) -> Result<Vec<&str>, LookupError> {
        Ok(self
            .category(category)?
            .sub_categories
            .keys()
            .copied()
            .collect())
    }

    /// Returns the integrations of a sub-table as `(key, title)` pairs in
    /// display order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category or sub-category does not exist.
    pub fn list_integrations(
        &self,
        category: &str,
        sub_category: &str,
    ) -> Result<Vec<IntegrationSummary<'_>>, LookupError> {
        Ok(self
            .sub_category(category, sub_category)?
            .integrations
            .iter()
            .map(|(key, integration)| IntegrationSummary {
                key,
                title: &integration.content.title,
            })
            .collect())
    }

    /// Returns the integration stored at an exact selection path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if any level of the path is absent. Keys are never
    /// resolved against other sub-tables.
    pub fn integration(
        &self,
        category: &str,
        sub_category: &str,
        key: &str,
    ) -> Result<&Integration, LookupError> {
        self.sub_category(category, sub_category)?
            .integrations
            .get(key)
            .ok_or_else(|| self.not_found(format!("{category}/{sub_category}/{key}")))
    }

    /// Returns the content stored at an exact selection path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if any level of the path is absent.
    pub fn get_content(
        &self,
        category: &str,
        sub_category: &str,
        key: &str,
    ) -> Result<Arc<QuickStartContent>, LookupError> {
        self.integration(category, sub_category, key)
            .map(|integration| Arc::clone(&integration.content))
    }

    /// Returns the metadata attached to a category, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category does not exist.
    pub fn category_metadata(&self, category: &str) -> Result<Option<&GroupMetadata>, LookupError> {
        Ok(self.category(category)?.metadata.as_ref())
    }

    /// Returns the metadata attached to a sub-category, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category or sub-category does not exist.
    pub fn sub_category_metadata(
        &self,
        category: &str,
        sub_category: &str,
    ) -> Result<Option<&GroupMetadata>, LookupError> {
        Ok(self.sub_category(category, sub_category)?.metadata.as_ref())
    }

    /// Returns every selection path whose content configures `product`, in
    /// table order.
    #[must_use]
    pub fn integrations_for_product(&self, product: Product) -> Vec<SelectionPath> {
        self.paths()
            .filter(|(_, integration)| integration.content.configures(product))
            .map(|(path, _)| path)
            .collect()
    }

    /// Iterates over every selection path and its integration, in table order.
    pub fn paths(&self) -> impl Iterator<Item = (SelectionPath, &Integration)> {
        self.categories.iter().flat_map(|(category, body)| {
            body.sub_categories.iter().flat_map(move |(sub, table)| {
                table.integrations.iter().map(move |(key, integration)| {
                    (
                        SelectionPath {
                            category: (*category).to_string(),
                            sub_category: (*sub).to_string(),
                            key: (*key).to_string(),
                        },
                        integration,
                    )
                })
            })
        })
    }

    /// Returns the total number of integration entries.
    #[must_use]
    pub fn integration_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.sub_categories.values())
            .map(|s| s.integrations.len())
            .sum()
    }

    fn category(&self, category: &str) -> Result<&Category, LookupError> {
        self.categories
            .get(category)
            .ok_or_else(|| self.not_found(category.to_string()))
    }

    fn sub_category(
        &self,
        category: &str,
        sub_category: &str,
    ) -> Result<&SubCategory, LookupError> {
        self.category(category)?
            .sub_categories
            .get(sub_category)
            .ok_or_else(|| self.not_found(format!("{category}/{sub_category}")))
    }

    fn not_found(&self, path: String) -> LookupError {
        tracing::debug!(view = %self.kind, %path, "Quickstart lookup missed");
        LookupError::NotFound {
            view: self.kind,
            path,
        }
    }
}
