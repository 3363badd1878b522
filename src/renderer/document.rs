use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;

use super::entry::RenderedEntry;
use super::interface::EntryRenderer;
use super::template_renderer::TemplateRenderer;
use crate::config::{Document, RenderOptions};
use crate::error::Result;

/// Every section of a CV, rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sections: IndexMap<String, Vec<RenderedEntry>>,
}

/// Renders all sections of `document` in order.
///
/// Date ranges show their time span when `options.show_time_span` is set or
/// the section is listed in the design's `show_time_spans_in`.
pub fn render_document(document: &Document, options: RenderOptions) -> Result<RenderedDocument> {
    let renderer = TemplateRenderer::new(&document.design.templates, &document.locale, options);

    let mut sections = IndexMap::with_capacity(document.cv.sections.len());
    for (title, entries) in &document.cv.sections {
        let show_time_span = options.show_time_span || document.shows_time_span_in(title);
        debug!("Rendering section '{title}' ({} entries)", entries.len());
        let rendered = renderer.with_time_span(show_time_span).render_all(entries)?;
        sections.insert(title.clone(), rendered);
    }

    info!("Rendered {} sections", sections.len());
    Ok(RenderedDocument {
        name: document.cv.name.clone(),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::config::InputFormat;

    const CV: &str = r#"
cv:
  name: Ada
  sections:
    experience:
      - company: Acme
        position: Engineer
        start_date: 2020-06
    projects:
      - name: Engine
        start_date: 2023-01
        end_date: 2023-05
design:
  show_time_spans_in: [experience]
"#;

    fn options(show_time_span: bool) -> RenderOptions {
        RenderOptions::new(show_time_span, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn time_spans_follow_section_list() {
        let document = Document::from_str_with_format(CV, InputFormat::Yaml).unwrap();
        let rendered = render_document(&document, options(false)).unwrap();

        assert_eq!(rendered.name.as_deref(), Some("Ada"));
        assert_eq!(
            rendered.sections["experience"][0].field("date"),
            Some("June 2020 – present\n\n4 years 7 months")
        );
        assert_eq!(rendered.sections["projects"][0].field("date"), Some("Jan 2023 – May 2023"));
    }

    #[test]
    fn global_flag_shows_every_time_span() {
        let document = Document::from_str_with_format(CV, InputFormat::Yaml).unwrap();
        let rendered = render_document(&document, options(true)).unwrap();
        assert_eq!(
            rendered.sections["projects"][0].field("date"),
            Some("Jan 2023 – May 2023\n\n4 months")
        );
    }

    #[test]
    fn sections_keep_their_order() {
        let document = Document::from_str_with_format(CV, InputFormat::Yaml).unwrap();
        let rendered = render_document(&document, options(false)).unwrap();
        let titles: Vec<_> = rendered.sections.keys().collect();
        assert_eq!(titles, vec!["experience", "projects"]);
    }
}
