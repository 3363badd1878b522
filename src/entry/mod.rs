//! Entry schema for CV sections
//!
//! This module contains the data model the renderer works on:
//! - `date`: date attributes, including the `present` sentinel
//! - `types`: one struct per structured entry kind

pub mod date;
pub mod types;

use std::fmt::Display;

use cruet::case::snake::to_snake_case;
use serde::{Deserialize, Serialize};

pub use date::DateValue;
pub use types::{
    BulletEntry, EducationEntry, EntryCore, ExperienceEntry, ExtraFields, NormalEntry,
    NumberedEntry, OneLineEntry, PublicationEntry, ReversedNumberedEntry,
};

/// One item of a CV section.
///
/// Deserialization infers the kind from the keys that are present, the same
/// way a section in a CV file is written: a bare string is a text entry,
/// `company` + `position` an experience, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Publication(PublicationEntry),
    Experience(ExperienceEntry),
    Education(EducationEntry),
    OneLine(OneLineEntry),
    Normal(NormalEntry),
    Bullet(BulletEntry),
    Numbered(NumberedEntry),
    ReversedNumbered(ReversedNumberedEntry),
}

/// Kind of a structured entry, used to look up its templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Education,
    Experience,
    Normal,
    Publication,
    OneLine,
    Bullet,
    Numbered,
    ReversedNumbered,
}

impl EntryKind {
    pub const ALL: [EntryKind; 8] = [
        EntryKind::Education,
        EntryKind::Experience,
        EntryKind::Normal,
        EntryKind::Publication,
        EntryKind::OneLine,
        EntryKind::Bullet,
        EntryKind::Numbered,
        EntryKind::ReversedNumbered,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            EntryKind::Education => "EducationEntry",
            EntryKind::Experience => "ExperienceEntry",
            EntryKind::Normal => "NormalEntry",
            EntryKind::Publication => "PublicationEntry",
            EntryKind::OneLine => "OneLineEntry",
            EntryKind::Bullet => "BulletEntry",
            EntryKind::Numbered => "NumberedEntry",
            EntryKind::ReversedNumbered => "ReversedNumberedEntry",
        }
    }

    /// Key under which a design lists this kind's templates, e.g. `experience_entry`.
    pub fn template_key(&self) -> String {
        to_snake_case(self.type_name())
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl Entry {
    /// `None` for text entries, which have no kind and are never templated.
    pub fn kind(&self) -> Option<EntryKind> {
        match self {
            Entry::Text(_) => None,
            Entry::Publication(_) => Some(EntryKind::Publication),
            Entry::Experience(_) => Some(EntryKind::Experience),
            Entry::Education(_) => Some(EntryKind::Education),
            Entry::OneLine(_) => Some(EntryKind::OneLine),
            Entry::Normal(_) => Some(EntryKind::Normal),
            Entry::Bullet(_) => Some(EntryKind::Bullet),
            Entry::Numbered(_) => Some(EntryKind::Numbered),
            Entry::ReversedNumbered(_) => Some(EntryKind::ReversedNumbered),
        }
    }

    pub fn core(&self) -> Option<&EntryCore> {
        match self {
            Entry::Text(_) => None,
            Entry::Publication(e) => Some(&e.core),
            Entry::Experience(e) => Some(&e.core),
            Entry::Education(e) => Some(&e.core),
            Entry::OneLine(e) => Some(&e.core),
            Entry::Normal(e) => Some(&e.core),
            Entry::Bullet(e) => Some(&e.core),
            Entry::Numbered(e) => Some(&e.core),
            Entry::ReversedNumbered(e) => Some(&e.core),
        }
    }

    fn core_mut(&mut self) -> Option<&mut EntryCore> {
        match self {
            Entry::Text(_) => None,
            Entry::Publication(e) => Some(&mut e.core),
            Entry::Experience(e) => Some(&mut e.core),
            Entry::Education(e) => Some(&mut e.core),
            Entry::OneLine(e) => Some(&mut e.core),
            Entry::Normal(e) => Some(&mut e.core),
            Entry::Bullet(e) => Some(&mut e.core),
            Entry::Numbered(e) => Some(&mut e.core),
            Entry::ReversedNumbered(e) => Some(&mut e.core),
        }
    }

    /// Custom attributes the entry was given beyond its schema.
    pub fn extra(&self) -> Option<&ExtraFields> {
        match self {
            Entry::Text(_) => None,
            Entry::Publication(e) => Some(&e.extra),
            Entry::Experience(e) => Some(&e.extra),
            Entry::Education(e) => Some(&e.extra),
            Entry::OneLine(e) => Some(&e.extra),
            Entry::Normal(e) => Some(&e.extra),
            Entry::Bullet(e) => Some(&e.extra),
            Entry::Numbered(e) => Some(&e.extra),
            Entry::ReversedNumbered(e) => Some(&e.extra),
        }
    }

    pub fn as_publication(&self) -> Option<&PublicationEntry> {
        match self {
            Entry::Publication(publication) => Some(publication),
            _ => None,
        }
    }

    /// Settles which date fields an entry renders from.
    ///
    /// A single `date` wins over any range and clears it. A start date without
    /// an end date runs until `present`. An end date on its own becomes the
    /// single `date`.
    pub fn normalized(mut self) -> Self {
        if let Some(core) = self.core_mut() {
            if core.date.is_some() {
                core.start_date = None;
                core.end_date = None;
            } else if core.start_date.is_some() {
                core.end_date.get_or_insert(DateValue::Present);
            } else if let Some(end_date) = core.end_date.take() {
                core.date = Some(end_date);
            }
        }
        self
    }
}
