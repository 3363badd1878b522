use super::entry::{render_entry_templates, RenderedEntry};
use super::interface::EntryRenderer;
use crate::config::{RenderOptions, TemplateSet};
use crate::entry::Entry;
use crate::error::Result;
use crate::format::Locale;

/// Renders entries with the placeholder templates of a design.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRenderer<'a> {
    templates: &'a TemplateSet,
    locale: &'a Locale,
    options: RenderOptions,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(templates: &'a TemplateSet, locale: &'a Locale, options: RenderOptions) -> Self {
        Self {
            templates,
            locale,
            options,
        }
    }

    /// Same renderer with time spans switched on or off.
    pub fn with_time_span(self, show_time_span: bool) -> Self {
        Self {
            options: RenderOptions {
                show_time_span,
                ..self.options
            },
            ..self
        }
    }
}

impl EntryRenderer for TemplateRenderer<'_> {
    fn render(&self, entry: &Entry) -> Result<RenderedEntry> {
        render_entry_templates(
            entry,
            self.templates,
            self.locale,
            self.options.show_time_span,
            self.options.current_date,
        )
    }
}
