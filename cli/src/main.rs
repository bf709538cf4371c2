//! Quickstart CLI
//!
//! Command-line interface for browsing the quickstart registry and rendering
//! setup instructions in the terminal.
//!
//! # Usage
//!
//! ```bash
//! quickstart --help
//! quickstart categories
//! quickstart --view reorganized integrations go sdks
//! quickstart show backend go chi --project-id abc123
//! ```

#![deny(unsafe_code)]

mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use registry::models::Product;
use registry::{Registry, RegistryConfig, RegistryView, ViewKind};
use render::RenderOptions;

/// Quickstart CLI - browse integration setup instructions
#[derive(Parser)]
#[command(name = "quickstart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Taxonomy to browse (legacy or reorganized)
    #[arg(long, global = true, default_value = "legacy")]
    view: ViewKind,

    /// Project id substituted for <YOUR_PROJECT_ID>
    #[arg(long, global = true, env = "QUICKSTART_PROJECT_ID")]
    project_id: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories of the view
    Categories,

    /// List the sub-categories of a category
    SubCategories {
        /// Category name
        category: String,
    },

    /// List the integrations of a sub-category
    Integrations {
        /// Category name
        category: String,
        /// Sub-category name
        sub_category: String,
    },

    /// Show the setup instructions for an integration
    Show {
        /// Category name
        category: String,
        /// Sub-category name
        sub_category: String,
        /// Integration key
        key: String,
        /// Include hidden steps
        #[arg(long)]
        all_steps: bool,
        /// Only show this code variant where a step offers it (e.g. yarn)
        #[arg(long)]
        variant: Option<String>,
        /// Print the content as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the integrations that configure a product
    Product {
        /// Product name (sessions, errors, traces, logs, metrics)
        product: Product,
    },

    /// Load the registry and verify every selection path resolves
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Quickstart CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = RegistryConfig::from_env()?;
    let registry = Registry::load(&config)
        .context("Failed to load quickstart registry")?;
    let view = registry.view(cli.view);

    match command {
        Commands::Categories => {
            for category in view.list_categories() {
                match view.category_metadata(category)? {
                    Some(metadata) => println!("{category}\t{}", metadata.title),
                    None => println!("{category}"),
                }
            }
        }
        Commands::SubCategories { category } => {
            for sub in view.list_sub_categories(&category)? {
                match view.sub_category_metadata(&category, sub)? {
                    Some(metadata) => println!("{sub}\t{}", metadata.title),
                    None => println!("{sub}"),
                }
            }
        }
        Commands::Integrations {
            category,
            sub_category,
        } => {
            for integration in view.list_integrations(&category, &sub_category)? {
                println!("{}\t{}", integration.key, integration.title);
            }
        }
        Commands::Show {
            category,
            sub_category,
            key,
            all_steps,
            variant,
            json,
        } => {
            tracing::debug!(
                view = %cli.view,
                path = %format!("{category}/{sub_category}/{key}"),
                all_steps,
                variant = variant.as_deref(),
                "Rendering quickstart"
            );
            let content = view.get_content(&category, &sub_category, &key)?;
            let options = RenderOptions {
                all_steps,
                variant,
                project_id: cli.project_id,
            };
            let prepared = render::prepare(&content, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&prepared)?);
            } else {
                print!("{}", render::render_text(&prepared));
            }
        }
        Commands::Product { product } => {
            for path in view.integrations_for_product(product) {
                println!("{path}");
            }
        }
        Commands::Check => {
            for kind in [ViewKind::Legacy, ViewKind::Reorganized] {
                let checked = check_view(registry.view(kind))?;
                println!("{kind}: {checked} integrations ok");
            }
            println!("store: {} content objects", registry.store().len());
        }
    }

    Ok(())
}

/// Resolves every selection path of a view and returns how many were checked.
fn check_view(view: &RegistryView) -> anyhow::Result<usize> {
    let mut checked = 0;
    for (path, _) in view.paths() {
        let content = view.get_content(&path.category, &path.sub_category, &path.key)?;
        anyhow::ensure!(!content.entries.is_empty(), "{path} has no steps");
        checked += 1;
    }
    Ok(checked)
}
