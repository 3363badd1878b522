//! Entry rendering
//!
//! - `interface`: the [`EntryRenderer`] trait
//! - `entry`: rendering one entry through its kind's templates
//! - `template_renderer`: [`TemplateRenderer`], the placeholder-template engine
//! - `document`: rendering every section of a CV document

pub mod document;
pub mod entry;
pub mod interface;
pub mod template_renderer;

pub use document::{render_document, RenderedDocument};
pub use entry::{render_entry_templates, RenderedEntry};
pub use interface::EntryRenderer;
pub use template_renderer::TemplateRenderer;
