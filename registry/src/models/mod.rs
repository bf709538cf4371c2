//! Data models for the quickstart registry.
//!
//! This module contains the content payload types and the integration key space.

pub mod content;
pub mod key;

pub use content::{
    renderable_steps, Product, QuickStartCodeBlock, QuickStartContent, QuickStartStep,
};
pub use key::QuickStartType;
