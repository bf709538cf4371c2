//! Quickstart content model.
//!
//! Defines `QuickStartContent`, the title/subtitle/steps payload shown to a
//! user for one integration path, along with its steps and code blocks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Product capability configured by an integration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    /// Session replay.
    Sessions,
    /// Error monitoring.
    Errors,
    /// Distributed tracing.
    Traces,
    /// Log ingestion.
    Logs,
    /// Metrics ingestion.
    Metrics,
}

impl Product {
    /// Returns all products in display order.
    #[must_use]
    pub fn all() -> &'static [Product] {
        &[
            Self::Sessions,
            Self::Errors,
            Self::Traces,
            Self::Logs,
            Self::Metrics,
        ]
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sessions => write!(f, "Sessions"),
            Self::Errors => write!(f, "Errors"),
            Self::Traces => write!(f, "Traces"),
            Self::Logs => write!(f, "Logs"),
            Self::Metrics => write!(f, "Metrics"),
        }
    }
}

impl std::str::FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|product| product.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown product: {s}"))
    }
}

/// A block of code attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickStartCodeBlock {
    /// Identifier of this variant when a step offers alternatives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Literal code or markup.
    pub text: String,

    /// Syntax-highlighting language tag.
    pub language: String,

    /// Text placed on the clipboard instead of `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<String>,
}

impl QuickStartCodeBlock {
    /// Creates a code block.
    #[must_use]
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            language: language.into(),
            copy: None,
        }
    }

    /// Sets the variant key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the copy-to-clipboard override.
    #[must_use]
    pub fn with_copy(mut self, copy: impl Into<String>) -> Self {
        self.copy = Some(copy.into());
        self
    }

    /// Returns the text to place on the clipboard.
    ///
    /// # Example
    ///
    /// ```
    /// use registry::models::QuickStartCodeBlock;
    ///
    /// let block = QuickStartCodeBlock::new("$ npm install highlight.run", "bash")
    ///     .with_copy("npm install highlight.run");
    /// assert_eq!(block.copy_text(), "npm install highlight.run");
    /// ```
    #[must_use]
    pub fn copy_text(&self) -> &str {
        self.copy.as_deref().unwrap_or(&self.text)
    }
}

/// A single instruction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct QuickStartStep {
    /// Step heading.
    #[validate(length(min = 1, message = "Step title cannot be empty"))]
    pub title: String,

    /// Instructional text. May contain placeholders such as
    /// `<YOUR_PROJECT_ID>`.
    pub content: String,

    /// Code blocks, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<QuickStartCodeBlock>,

    /// Excluded from default rendering when set.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl QuickStartStep {
    /// Creates a visible step without code.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            code: Vec::new(),
            hidden: false,
        }
    }

    /// Appends a code block.
    #[must_use]
    pub fn with_code(mut self, block: QuickStartCodeBlock) -> Self {
        self.code.push(block);
        self
    }

    /// Marks the step as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the first code block carrying the given variant key.
    #[must_use]
    pub fn code_variant(&self, key: &str) -> Option<&QuickStartCodeBlock> {
        self.code.iter().find(|block| block.key.as_deref() == Some(key))
    }

    /// Returns the distinct variant keys of this step, in display order.
    #[must_use]
    pub fn code_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for key in self.code.iter().filter_map(|block| block.key.as_deref()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Setup instructions for one integration path.
///
/// # Example
///
/// ```
/// use registry::models::{QuickStartContent, QuickStartStep};
///
/// let content = QuickStartContent::new("Go Chi", "Set up Highlight with Chi.")
///     .with_step(QuickStartStep::new("Install", "Install the SDK."))
///     .with_step(QuickStartStep::new("Legacy install", "Old path.").hidden());
///
/// assert!(content.validate_content().is_ok());
/// assert_eq!(content.renderable_steps().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuickStartContent {
    /// Display name of the integration path.
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    /// One-line description.
    pub subtitle: String,

    /// Identifier of the associated logo asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_key: Option<String>,

    /// Ordered instruction steps.
    #[validate(length(min = 1, message = "At least one step is required"), nested)]
    pub entries: Vec<QuickStartStep>,

    /// Product capabilities this integration configures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<BTreeSet<Product>>,
}

impl QuickStartContent {
    /// Creates content with no steps.
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            logo_key: None,
            entries: Vec::new(),
            products: None,
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, step: QuickStartStep) -> Self {
        self.entries.push(step);
        self
    }

    /// Adds a product tag.
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.get_or_insert_with(BTreeSet::new).insert(product);
        self
    }

    /// Sets the logo key.
    #[must_use]
    pub fn with_logo_key(mut self, logo_key: impl Into<String>) -> Self {
        self.logo_key = Some(logo_key.into());
        self
    }

    /// Returns true if this integration configures the given product.
    #[must_use]
    pub fn configures(&self, product: Product) -> bool {
        self.products
            .as_ref()
            .is_some_and(|products| products.contains(&product))
    }

    /// Returns the steps shown by default, in authoring order.
    #[must_use]
    pub fn renderable_steps(&self) -> Vec<&QuickStartStep> {
        renderable_steps(self)
    }

    /// Checks the type shape: non-empty title, at least one step, and a
    /// heading on every step.
    ///
    /// # Errors
    ///
    /// Returns the collected validation errors if any check fails.
    pub fn validate_content(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

/// Returns the steps of `content` that are not hidden, preserving order.
#[must_use]
pub fn renderable_steps(content: &QuickStartContent) -> Vec<&QuickStartStep> {
    content.entries.iter().filter(|step| !step.hidden).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str) -> QuickStartStep {
        QuickStartStep::new(title, format!("{title} body"))
    }

    #[test]
    fn test_renderable_steps_skips_hidden() {
        let content = QuickStartContent::new("Test", "Subtitle")
            .with_step(step("A").hidden())
            .with_step(step("B"))
            .with_step(step("C").hidden())
            .with_step(step("D"));

        let titles: Vec<&str> = renderable_steps(&content)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "D"]);
    }

    #[test]
    fn test_renderable_steps_all_hidden() {
        let content = QuickStartContent::new("Test", "Subtitle").with_step(step("A").hidden());
        assert!(content.renderable_steps().is_empty());
    }

    #[test]
    fn test_code_block_order_preserved() {
        let s = step("Install")
            .with_code(QuickStartCodeBlock::new("first", "bash"))
            .with_code(QuickStartCodeBlock::new("second", "bash"))
            .with_code(QuickStartCodeBlock::new("third", "bash"));

        let texts: Vec<&str> = s.code.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_code_variant_lookup() {
        let s = step("Install")
            .with_code(QuickStartCodeBlock::new("npm install x", "bash").with_key("npm"))
            .with_code(QuickStartCodeBlock::new("yarn add x", "bash").with_key("yarn"))
            .with_code(QuickStartCodeBlock::new("# any", "bash"));

        assert_eq!(s.code_variant("yarn").unwrap().text, "yarn add x");
        assert!(s.code_variant("pnpm").is_none());
        assert_eq!(s.code_keys(), vec!["npm", "yarn"]);
    }

    #[test]
    fn test_copy_text_defaults_to_text() {
        let block = QuickStartCodeBlock::new("pip install highlight-io", "bash");
        assert_eq!(block.copy_text(), "pip install highlight-io");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let content = QuickStartContent::new("", "Subtitle").with_step(step("A"));
        assert!(content.validate_content().is_err());
    }

    #[test]
    fn test_validate_rejects_no_steps() {
        let content = QuickStartContent::new("Title", "Subtitle");
        assert!(content.validate_content().is_err());
    }

    #[test]
    fn test_validate_rejects_untitled_step() {
        let content = QuickStartContent::new("Title", "Subtitle").with_step(step(""));
        assert!(content.validate_content().is_err());
    }

    #[test]
    fn test_configures_product() {
        let content = QuickStartContent::new("Title", "Subtitle")
            .with_product(Product::Logs)
            .with_product(Product::Traces);

        assert!(content.configures(Product::Logs));
        assert!(!content.configures(Product::Sessions));
        assert!(!QuickStartContent::new("T", "S").configures(Product::Logs));
    }

    #[test]
    fn test_product_parse() {
        assert_eq!("logs".parse::<Product>().unwrap(), Product::Logs);
        assert_eq!("Metrics".parse::<Product>().unwrap(), Product::Metrics);
        assert!("profiles".parse::<Product>().is_err());
    }

    #[test]
    fn test_product_serializes_capitalized() {
        let json = serde_json::to_string(&Product::Sessions).unwrap();
        assert_eq!(json, "\"Sessions\"");
    }

    #[test]
    fn test_hidden_flag_omitted_when_false() {
        let json = serde_json::to_value(step("A")).unwrap();
        assert!(json.get("hidden").is_none());
        assert!(json.get("code").is_none());
    }
}
