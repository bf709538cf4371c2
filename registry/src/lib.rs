//! Quickstart Registry
//!
//! This crate maps integration selections (category, sub-category, integration
//! key) to the setup instructions shown for them: titles, ordered steps and
//! code blocks.
//!
//! # Modules
//!
//! - [`models`] - Content payload types and the integration key space
//! - [`store`] - The content store, built from embedded TOML documents
//! - [`views`] - The legacy and reorganized taxonomies over the store
//! - [`config`] - Environment configuration
//!
//! # Example
//!
//! ```
//! use registry::{Registry, RegistryConfig};
//!
//! let registry = Registry::load(&RegistryConfig::default()).unwrap();
//! let view = registry.reorganized();
//!
//! for integration in view.list_integrations("rust", "sdks").unwrap() {
//!     println!("{} - {}", integration.key, integration.title);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod models;
pub mod store;
pub mod views;

mod registry;

pub use config::RegistryConfig;
pub use models::{renderable_steps, QuickStartContent};
pub use registry::{LoadError, Registry};
pub use views::{LookupError, RegistryView, ViewKind};
