//! Authored content documents.
//!
//! Content is written as TOML, one document per ecosystem. Each top-level
//! table is one content object:
//!
//! ```toml
//! [chi]
//! title = "Go Chi"
//! subtitle = "Set up error monitoring in your Chi application."
//! products = ["Errors", "Logs", "Traces"]
//!
//! [[chi.entries]]
//! title = "Install the Highlight Go SDK."
//! content = "Install the `highlight-go` package with `go get`."
//!
//! [[chi.entries.code]]
//! text = "go get -u github.com/highlight/highlight/sdk/highlight-go"
//! language = "bash"
//!
//! [[chi.entries]]
//! snippet = "verify-errors"
//! ```
//!
//! A step written as `snippet = "<name>"` is replaced by the named shared step
//! from the snippets document.

use crate::models::{Product, QuickStartContent, QuickStartStep};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeSet;

/// A step as written in a content document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AuthoredStep {
    /// Reference to a shared step.
    Snippet(SnippetRef),
    /// A step written in place.
    Inline(QuickStartStep),
}

/// Reference to a shared step by name.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SnippetRef {
    pub snippet: String,
}

/// A content object as written in a content document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AuthoredContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub logo_key: Option<String>,
    #[serde(default)]
    pub products: Option<BTreeSet<Product>>,
    #[serde(default)]
    pub entries: Vec<AuthoredStep>,
}

/// A parsed content document, keyed by content name in authoring order.
pub(crate) type Document = IndexMap<String, AuthoredContent>;

/// Shared steps, keyed by snippet name.
pub(crate) type Snippets = IndexMap<String, QuickStartStep>;

impl AuthoredContent {
    /// Resolves snippet references into concrete steps.
    ///
    /// Returns the name of the first unknown snippet on failure.
    pub fn resolve(self, snippets: &Snippets) -> Result<QuickStartContent, String> {
        let entries = self
            .entries
            .into_iter()
            .map(|step| match step {
                AuthoredStep::Inline(step) => Ok(step),
                AuthoredStep::Snippet(SnippetRef { snippet }) => {
                    snippets.get(&snippet).cloned().ok_or(snippet)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuickStartContent {
            title: self.title,
            subtitle: self.subtitle,
            logo_key: self.logo_key,
            entries,
            products: self.products,
        })
    }
}
