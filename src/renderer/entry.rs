//! Rendering of a single entry through its templates

use chrono::NaiveDate;
use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::config::TemplateSet;
use crate::constants::fields::{
    AUTHORS, DATE, DOI, END_DATE, HIGHLIGHTS, START_DATE, SUMMARY, URL,
};
use crate::entry::{Entry, EntryCore};
use crate::error::{Error, Result};
use crate::format::{format_single_date, Locale, Substitutor};
use crate::template::elision::remove_not_provided_placeholders;
use crate::template::fields::{extract_fields, string_list, FieldMap};
use crate::template::processor::{
    process_authors, process_date, process_doi, process_highlights, process_summary,
    process_url,
};

/// An entry together with the text rendered from it.
///
/// `templates` holds each template slot of the entry's kind, `fields` the
/// final value of each field, both keyed by lowercase name. Entries that are
/// not templated come back with both maps empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEntry {
    pub entry: Entry,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub templates: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, String>,
}

impl RenderedEntry {
    pub fn unchanged(entry: &Entry) -> Self {
        Self {
            entry: entry.clone(),
            templates: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn is_templated(&self) -> bool {
        !self.templates.is_empty() || !self.fields.is_empty()
    }

    pub fn template(&self, slot: &str) -> Option<&str> {
        self.templates.get(slot).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Everything a special-field step may read.
struct FieldContext<'a> {
    entry: &'a Entry,
    core: &'a EntryCore,
    templates: &'a TemplateSet,
    locale: &'a Locale,
    show_time_span: bool,
    current_date: NaiveDate,
}

/// A field whose value is computed rather than copied from the entry. The
/// step runs when any of `triggers` is in the field map.
struct SpecialField {
    name: &'static str,
    triggers: &'static [&'static str],
    apply: fn(&FieldContext<'_>, &mut FieldMap) -> Result<()>,
}

/// Steps run in this order. DOI comes after URL because it rewrites URL.
const SPECIAL_FIELDS: [SpecialField; 8] = [
    SpecialField {
        name: HIGHLIGHTS,
        triggers: &[HIGHLIGHTS],
        apply: apply_highlights,
    },
    SpecialField {
        name: AUTHORS,
        triggers: &[AUTHORS],
        apply: apply_authors,
    },
    SpecialField {
        name: DATE,
        triggers: &[DATE, START_DATE, END_DATE],
        apply: apply_date,
    },
    SpecialField {
        name: START_DATE,
        triggers: &[START_DATE],
        apply: apply_start_date,
    },
    SpecialField {
        name: END_DATE,
        triggers: &[END_DATE],
        apply: apply_end_date,
    },
    SpecialField {
        name: URL,
        triggers: &[URL],
        apply: apply_url,
    },
    SpecialField {
        name: DOI,
        triggers: &[DOI],
        apply: apply_doi,
    },
    SpecialField {
        name: SUMMARY,
        triggers: &[SUMMARY],
        apply: apply_summary,
    },
];

fn missing(field: &str, attribute: &str) -> Error {
    Error::internal(format!("{field} in fields but {attribute} is not provided"))
}

fn apply_highlights(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let highlights = ctx
        .core
        .highlights
        .as_ref()
        .ok_or_else(|| missing(HIGHLIGHTS, "highlights"))?;
    fields.insert(HIGHLIGHTS.to_string(), process_highlights(highlights));
    Ok(())
}

fn apply_authors(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let authors = match ctx.entry {
        Entry::Publication(publication) => publication.authors.clone(),
        other => {
            let value = other
                .extra()
                .and_then(|extra| extra.get("authors"))
                .ok_or_else(|| missing(AUTHORS, "authors"))?;
            match string_list(value) {
                Some(authors) => authors,
                // Free-form authors keep their extracted text.
                None => {
                    trace!("Keeping free-form custom authors as written");
                    return Ok(());
                }
            }
        }
    };
    fields.insert(AUTHORS.to_string(), process_authors(&authors));
    Ok(())
}

fn apply_date(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let date = process_date(
        ctx.core.date.as_ref(),
        ctx.core.start_date.as_ref(),
        ctx.core.end_date.as_ref(),
        ctx.templates,
        ctx.locale,
        ctx.show_time_span,
        ctx.current_date,
    )?;
    fields.insert(DATE.to_string(), date);
    Ok(())
}

fn apply_start_date(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let start_date = ctx
        .core
        .start_date
        .as_ref()
        .ok_or_else(|| missing(START_DATE, "start_date"))?;
    fields.insert(
        START_DATE.to_string(),
        format_single_date(start_date, ctx.locale, &ctx.templates.single_date)?,
    );
    Ok(())
}

fn apply_end_date(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let end_date = ctx.core.end_date.as_ref().ok_or_else(|| missing(END_DATE, "end_date"))?;
    fields.insert(
        END_DATE.to_string(),
        format_single_date(end_date, ctx.locale, &ctx.templates.single_date)?,
    );
    Ok(())
}

fn apply_url(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    fields.insert(URL.to_string(), process_url(ctx.entry)?);
    Ok(())
}

fn apply_doi(ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    fields.insert(URL.to_string(), process_url(ctx.entry)?);
    fields.insert(DOI.to_string(), process_doi(ctx.entry)?);
    Ok(())
}

fn apply_summary(_ctx: &FieldContext<'_>, fields: &mut FieldMap) -> Result<()> {
    let summary = fields.get(SUMMARY).ok_or_else(|| missing(SUMMARY, "summary"))?;
    let wrapped = process_summary(summary);
    fields.insert(SUMMARY.to_string(), wrapped);
    Ok(())
}

fn substitute_all<'a, I>(named: I, substitutor: &Substitutor<'_>) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    named
        .into_iter()
        .map(|(name, text)| (name.to_lowercase(), substitutor.substitute(text)))
        .collect()
}

/// Renders `entry` through the templates of its kind.
///
/// Text entries and kinds without configured templates are returned
/// unchanged. Otherwise the entry's fields are extracted, special fields are
/// computed, placeholders without a value are elided from the templates and
/// the remaining placeholders are substituted into every template slot and
/// every field value.
///
/// # Arguments
/// * `entry` - Entry to render
/// * `templates` - Template set of the design
/// * `locale` - Locale used for dates
/// * `show_time_span` - Append the duration to date ranges
/// * `current_date` - Date that `present` resolves to
///
/// # Returns
/// * `Result<RenderedEntry>` - The rendered entry, or an internal error when
///   the entry lacks data its fields call for
pub fn render_entry_templates(
    entry: &Entry,
    templates: &TemplateSet,
    locale: &Locale,
    show_time_span: bool,
    current_date: NaiveDate,
) -> Result<RenderedEntry> {
    let (Some(kind), Some(core)) = (entry.kind(), entry.core()) else {
        return Ok(RenderedEntry::unchanged(entry));
    };
    let Some(entry_templates) = templates.for_kind(kind) else {
        debug!("No templates configured for {kind}, leaving entry as is");
        return Ok(RenderedEntry::unchanged(entry));
    };

    let mut fields = extract_fields(entry)?;
    let context = FieldContext {
        entry,
        core,
        templates,
        locale,
        show_time_span,
        current_date,
    };
    for special in &SPECIAL_FIELDS {
        if special.triggers.iter().any(|trigger| fields.contains_key(*trigger)) {
            trace!("Computing {} for {kind}", special.name);
            (special.apply)(&context, &mut fields)?;
        }
    }

    let entry_templates = remove_not_provided_placeholders(entry_templates, &fields)?;

    let substitutor = Substitutor::new(&fields)?;
    Ok(RenderedEntry {
        entry: entry.clone(),
        templates: substitute_all(&entry_templates, &substitutor),
        fields: substitute_all(&fields, &substitutor),
    })
}
