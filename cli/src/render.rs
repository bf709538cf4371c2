//! Terminal rendering of quickstart content.

use registry::models::{QuickStartCodeBlock, QuickStartContent, QuickStartStep};
use std::fmt::Write;

/// Placeholder replaced with the configured project id.
pub const PROJECT_ID_PLACEHOLDER: &str = "<YOUR_PROJECT_ID>";

/// Options controlling how content is prepared for display.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Include hidden steps.
    pub all_steps: bool,
    /// Keep only this code variant in steps that offer it.
    pub variant: Option<String>,
    /// Value substituted for `<YOUR_PROJECT_ID>`.
    pub project_id: Option<String>,
}

impl RenderOptions {
    fn substitute(&self, text: &str) -> String {
        match &self.project_id {
            Some(id) => text.replace(PROJECT_ID_PLACEHOLDER, id),
            None => text.to_string(),
        }
    }

    fn code_blocks(&self, step: &QuickStartStep) -> Vec<QuickStartCodeBlock> {
        let selected = self
            .variant
            .as_deref()
            .filter(|variant| step.code_variant(variant).is_some());

        step.code
            .iter()
            .filter(|block| match (selected, block.key.as_deref()) {
                (Some(variant), Some(key)) => key == variant,
                _ => true,
            })
            .map(|block| QuickStartCodeBlock {
                key: block.key.clone(),
                text: self.substitute(&block.text),
                language: block.language.clone(),
                copy: block.copy.as_deref().map(|copy| self.substitute(copy)),
            })
            .collect()
    }
}

/// Returns a copy of `content` with the options applied: hidden steps
/// dropped, code variants narrowed and placeholders filled in.
#[must_use]
pub fn prepare(content: &QuickStartContent, options: &RenderOptions) -> QuickStartContent {
    let steps: Vec<&QuickStartStep> = if options.all_steps {
        content.entries.iter().collect()
    } else {
        content.renderable_steps()
    };

    QuickStartContent {
        title: content.title.clone(),
        subtitle: options.substitute(&content.subtitle),
        logo_key: content.logo_key.clone(),
        entries: steps
            .into_iter()
            .map(|step| QuickStartStep {
                title: step.title.clone(),
                content: options.substitute(&step.content),
                code: options.code_blocks(step),
                hidden: step.hidden,
            })
            .collect(),
        products: content.products.clone(),
    }
}

/// Renders prepared content as plain text.
#[must_use]
pub fn render_text(content: &QuickStartContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", content.title);
    let _ = writeln!(out, "{}", "=".repeat(content.title.chars().count()));
    if !content.subtitle.is_empty() {
        let _ = writeln!(out, "{}", content.subtitle);
    }
    if let Some(products) = &content.products {
        let names: Vec<String> = products.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Products: {}", names.join(", "));
    }

    for (index, step) in content.entries.iter().enumerate() {
        let _ = writeln!(out);
        let marker = if step.hidden { " (hidden)" } else { "" };
        let _ = writeln!(out, "{}. {}{marker}", index + 1, step.title);
        if !step.content.is_empty() {
            let _ = writeln!(out, "{}", step.content);
        }
        for block in &step.code {
            let label = match &block.key {
                Some(key) => format!("{} [{key}]", block.language),
                None => block.language.clone(),
            };
            let _ = writeln!(out, "\n```{label}");
            let _ = writeln!(out, "{}", block.text);
            let _ = writeln!(out, "```");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuickStartContent {
        QuickStartContent::new("Go Chi", "Project <YOUR_PROJECT_ID>")
            .with_step(
                QuickStartStep::new("Install", "Run the installer.")
                    .with_code(QuickStartCodeBlock::new("npm i x", "bash").with_key("npm"))
                    .with_code(QuickStartCodeBlock::new("yarn add x", "bash").with_key("yarn"))
                    .with_code(QuickStartCodeBlock::new("init('<YOUR_PROJECT_ID>')", "js")),
            )
            .with_step(QuickStartStep::new("Old step", "Legacy.").hidden())
    }

    #[test]
    fn test_prepare_drops_hidden_steps() {
        let prepared = prepare(&sample(), &RenderOptions::default());
        assert_eq!(prepared.entries.len(), 1);
        assert_eq!(prepared.entries[0].title, "Install");
    }

    #[test]
    fn test_prepare_all_steps() {
        let options = RenderOptions {
            all_steps: true,
            ..RenderOptions::default()
        };
        let prepared = prepare(&sample(), &options);
        assert_eq!(prepared.entries.len(), 2);
        assert!(render_text(&prepared).contains("2. Old step (hidden)"));
    }

    #[test]
    fn test_variant_keeps_unkeyed_blocks() {
        let options = RenderOptions {
            variant: Some("yarn".to_string()),
            ..RenderOptions::default()
        };
        let prepared = prepare(&sample(), &options);
        let texts: Vec<&str> = prepared.entries[0]
            .code
            .iter()
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(texts, vec!["yarn add x", "init('<YOUR_PROJECT_ID>')"]);
    }

    #[test]
    fn test_unknown_variant_keeps_everything() {
        let options = RenderOptions {
            variant: Some("pnpm".to_string()),
            ..RenderOptions::default()
        };
        let prepared = prepare(&sample(), &options);
        assert_eq!(prepared.entries[0].code.len(), 3);
    }

    #[test]
    fn test_project_id_substitution() {
        let options = RenderOptions {
            project_id: Some("abc123".to_string()),
            ..RenderOptions::default()
        };
        let prepared = prepare(&sample(), &options);
        assert_eq!(prepared.subtitle, "Project abc123");
        assert_eq!(prepared.entries[0].code[2].text, "init('abc123')");
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&prepare(&sample(), &RenderOptions::default()));
        assert!(text.starts_with("Go Chi\n======\n"));
        assert!(text.contains("1. Install\n"));
        assert!(text.contains("```bash [npm]\nnpm i x\n```"));
        assert!(!text.contains("Old step"));
    }
}
