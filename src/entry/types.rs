//! Structured entry variants and the attributes they share

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::date::DateValue;
use crate::constants::DOI_BASE_URL;

/// Custom attributes a user may attach to any structured entry.
pub type ExtraFields = IndexMap<String, serde_json::Value>;

/// Attributes every structured entry may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryCore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalEntry {
    pub name: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl PublicationEntry {
    /// Canonical resolver URL for the entry's DOI, if it has one.
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("{DOI_BASE_URL}{doi}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OneLineEntry {
    pub label: String,
    pub details: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletEntry {
    pub bullet: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberedEntry {
    pub number: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReversedNumberedEntry {
    pub reversed_number: String,
    #[serde(flatten)]
    pub core: EntryCore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
