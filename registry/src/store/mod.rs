//! Content store.
//!
//! Holds every content object exactly once. Index views reference these
//! objects through shared pointers, so an edit to an authored document shows
//! up in every view that lists the integration.

mod document;
mod sources;

pub use sources::{ContentSource, EMBEDDED_SNIPPETS, EMBEDDED_SOURCES};

use crate::models::QuickStartContent;
use document::{Document, Snippets};
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A content document is not valid TOML or does not match the content shape.
    #[error("Failed to parse content document '{source_name}': {error}")]
    Parse {
        /// Name of the offending document.
        source_name: String,
        /// Underlying parse error.
        #[source]
        error: toml::de::Error,
    },

    /// The snippets document could not be parsed.
    #[error("Failed to parse snippets document: {0}")]
    Snippets(#[source] toml::de::Error),

    /// A step references a snippet that does not exist.
    #[error("Content '{id}' references unknown snippet '{snippet}'")]
    UnknownSnippet {
        /// Content id.
        id: String,
        /// Missing snippet name.
        snippet: String,
    },

    /// Content failed type-shape validation.
    #[error("Content '{id}' is invalid: {errors}")]
    Invalid {
        /// Content id.
        id: String,
        /// Validation details.
        errors: validator::ValidationErrors,
    },

    /// Two documents produced the same content id.
    #[error("Duplicate content id '{0}'")]
    DuplicateId(String),
}

/// Immutable store of content objects keyed by content id.
///
/// A content id is `<document>/<name>`, e.g. `backend/go/chi` for the `[chi]`
/// table of the `backend/go` document.
///
/// # Example
///
/// ```
/// use registry::store::ContentStore;
///
/// let store = ContentStore::embedded().unwrap();
/// let chi = store.get("server/go/chi").unwrap();
/// assert!(!chi.entries.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ContentStore {
    contents: IndexMap<String, Arc<QuickStartContent>>,
}

impl ContentStore {
    /// Builds the store from the documents compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded document is malformed.
    pub fn embedded() -> Result<Self, StoreError> {
        Self::from_sources(EMBEDDED_SOURCES, EMBEDDED_SNIPPETS)
    }

    /// Builds the store from the given documents and snippets document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A document or the snippets document fails to parse
    /// - A step references an unknown snippet
    /// - A content object fails validation
    /// - Two content objects share an id
    pub fn from_sources(sources: &[ContentSource], snippets: &str) -> Result<Self, StoreError> {
        let snippets: Snippets = toml::from_str(snippets).map_err(StoreError::Snippets)?;
        let mut contents = IndexMap::new();

        for source in sources {
            let document: Document =
                toml::from_str(source.document).map_err(|error| StoreError::Parse {
                    source_name: source.name.to_string(),
                    error,
                })?;

            tracing::debug!(
                source = source.name,
                contents = document.len(),
                "Parsed content document"
            );

            for (name, authored) in document {
                let id = format!("{}/{name}", source.name);
                let content = authored
                    .resolve(&snippets)
                    .map_err(|snippet| StoreError::UnknownSnippet {
                        id: id.clone(),
                        snippet,
                    })?;

                content
                    .validate_content()
                    .map_err(|errors| StoreError::Invalid {
                        id: id.clone(),
                        errors,
                    })?;

                if contents.contains_key(&id) {
                    return Err(StoreError::DuplicateId(id));
                }
                contents.insert(id, Arc::new(content));
            }
        }

        tracing::info!(
            sources = sources.len(),
            snippets = snippets.len(),
            contents = contents.len(),
            "Content store loaded"
        );

        Ok(Self { contents })
    }

    /// Returns the content object with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<QuickStartContent>> {
        self.contents.get(id)
    }

    /// Returns all content ids in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contents.keys().map(String::as_str)
    }

    /// Returns the number of content objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns true if the store holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPPETS: &str = r#"
[verify]
title = "Verify"
content = "Check the dashboard."
"#;

    fn source(name: &'static str, document: &'static str) -> ContentSource {
        ContentSource { name, document }
    }

    #[test]
    fn test_ids_are_prefixed_with_source() {
        let store = ContentStore::from_sources(
            &[source(
                "backend/rust",
                r#"
[actix]
title = "Rust Actix"
subtitle = "Actix"
[[actix.entries]]
snippet = "verify"
"#,
            )],
            SNIPPETS,
        )
        .unwrap();

        assert_eq!(store.ids().collect::<Vec<_>>(), vec!["backend/rust/actix"]);
        assert_eq!(store.get("backend/rust/actix").unwrap().entries[0].title, "Verify");
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = ContentStore::from_sources(&[source("broken", "[x")], SNIPPETS).unwrap_err();
        assert!(
            matches!(err, StoreError::Parse { ref source_name, .. } if source_name == "broken")
        );
    }

    #[test]
    fn test_unknown_snippet_rejected() {
        let err = ContentStore::from_sources(
            &[source(
                "t",
                r#"
[x]
title = "X"
subtitle = ""
[[x.entries]]
snippet = "missing"
"#,
            )],
            SNIPPETS,
        )
        .unwrap_err();
        assert!(
            matches!(err, StoreError::UnknownSnippet { ref snippet, .. } if snippet == "missing")
        );
    }

    #[test]
    fn test_content_without_steps_rejected() {
        let err = ContentStore::from_sources(
            &[source("t", "[x]\ntitle = \"X\"\nsubtitle = \"\"\n")],
            SNIPPETS,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Invalid { ref id, .. } if id == "t/x"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doc = "[x]\ntitle = \"X\"\nsubtitle = \"\"\n[[x.entries]]\nsnippet = \"verify\"\n";
        let err = ContentStore::from_sources(&[source("t", doc), source("t", doc)], SNIPPETS)
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "t/x"));
    }

    #[test]
    fn test_embedded_store_loads() {
        let store = ContentStore::embedded().unwrap();
        assert!(store.len() > 100);
        for id in store.ids() {
            assert!(!store.get(id).unwrap().entries.is_empty(), "{id} has no steps");
        }
    }
}
