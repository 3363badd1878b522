//! Configuration management for cvtemplater
//!
//! This module contains the configuration system components:
//! - `types`: template sets and per-render options
//! - `loader`: CV document loading, normalization and validation

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::{Cv, Design, Document, InputFormat};
pub use types::{EntryTemplates, RenderOptions, TemplateSet};
