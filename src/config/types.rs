//! Template set and rendering options

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::templates;
use crate::entry::EntryKind;

/// Named template slots of one entry kind, e.g. `main_column`.
pub type EntryTemplates = IndexMap<String, String>;

/// Templates of a design: shared date templates plus per-kind entry templates
/// keyed by the kind's snake-case name (`experience_entry`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    #[serde(default = "get_default_single_date")]
    pub single_date: String,
    #[serde(default = "get_default_date_range")]
    pub date_range: String,
    #[serde(default = "get_default_time_span")]
    pub time_span: String,
    #[serde(flatten)]
    pub entries: IndexMap<String, EntryTemplates>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            single_date: get_default_single_date(),
            date_range: get_default_date_range(),
            time_span: get_default_time_span(),
            entries: get_default_entry_templates(),
        }
    }
}

impl TemplateSet {
    /// Templates configured for `kind`, if any.
    pub fn for_kind(&self, kind: EntryKind) -> Option<&EntryTemplates> {
        self.entries.get(&kind.template_key())
    }

    /// Fills in every kind and slot of the default design that this set does
    /// not configure. Slots set to an empty string stay empty.
    pub fn merged_over_defaults(mut self) -> Self {
        for (kind, default_slots) in get_default_entry_templates() {
            let slots = self.entries.entry(kind).or_default();
            for (slot, template) in default_slots {
                slots.entry(slot).or_insert(template);
            }
        }
        self
    }
}

/// Per-render switches that do not belong to the design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Append the time span to date ranges.
    pub show_time_span: bool,
    /// Date that `present` resolves to.
    pub current_date: NaiveDate,
}

impl RenderOptions {
    pub fn new(show_time_span: bool, current_date: NaiveDate) -> Self {
        Self {
            show_time_span,
            current_date,
        }
    }

    pub fn today() -> Self {
        Self::new(false, chrono::Local::now().date_naive())
    }
}

fn get_default_single_date() -> String {
    templates::SINGLE_DATE.to_string()
}

fn get_default_date_range() -> String {
    templates::DATE_RANGE.to_string()
}

fn get_default_time_span() -> String {
    templates::TIME_SPAN.to_string()
}

fn slots(pairs: &[(&str, &str)]) -> EntryTemplates {
    pairs
        .iter()
        .map(|(slot, template)| (slot.to_string(), template.to_string()))
        .collect()
}

fn get_default_entry_templates() -> IndexMap<String, EntryTemplates> {
    IndexMap::from([
        (
            EntryKind::Education.template_key(),
            slots(&[
                ("main_column", "**INSTITUTION**, AREA\nSUMMARY\nHIGHLIGHTS"),
                ("degree_column", "**DEGREE**"),
                ("date_and_location_column", "LOCATION\nDATE"),
            ]),
        ),
        (
            EntryKind::Experience.template_key(),
            slots(&[
                ("main_column", "**COMPANY**, POSITION\nSUMMARY\nHIGHLIGHTS"),
                ("date_and_location_column", "LOCATION\nDATE"),
            ]),
        ),
        (
            EntryKind::Normal.template_key(),
            slots(&[
                ("main_column", "**NAME**\nSUMMARY\nHIGHLIGHTS"),
                ("date_and_location_column", "LOCATION\nDATE"),
            ]),
        ),
        (
            EntryKind::Publication.template_key(),
            slots(&[
                ("main_column", "**TITLE**\nSUMMARY\nAUTHORS\nURL (JOURNAL)"),
                ("date_and_location_column", "DATE"),
            ]),
        ),
        (EntryKind::OneLine.template_key(), slots(&[("main_column", "**LABEL:** DETAILS")])),
    ])
}
