//! CV document loading and validation

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::types::TemplateSet;
use crate::constants::{INPUT_EXTENSIONS, STDIN_INDICATOR};
use crate::entry::{DateValue, Entry};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::format::Locale;
use crate::ioutils::read_from;

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Format implied by the file extension of `path`, if it is a supported one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension_lowercase()?.as_str() {
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cv {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sections: IndexMap<String, Vec<Entry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    #[serde(default)]
    pub templates: TemplateSet,
    /// Section titles whose date ranges also show their time span.
    #[serde(default)]
    pub show_time_spans_in: Vec<String>,
}

/// A CV together with the design and locale it is rendered with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub cv: Cv,
    pub design: Design,
    pub locale: Locale,
}

/// Document as written, before entries are typed.
#[derive(Debug, Deserialize)]
struct RawDocument {
    cv: RawCv,
    #[serde(default)]
    design: Design,
    #[serde(default)]
    locale: Locale,
}

#[derive(Debug, Deserialize)]
struct RawCv {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sections: IndexMap<String, Vec<serde_json::Value>>,
}

impl Document {
    /// Loads a document from `path`.
    ///
    /// `-` reads YAML from stdin. A path without a supported extension is
    /// tried with each of [`INPUT_EXTENSIONS`] appended, in order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.to_str_checked()? == STDIN_INDICATOR {
            debug!("Reading document from stdin");
            let content = read_from(std::io::stdin())?;
            return Self::from_str_with_format(&content, InputFormat::Yaml);
        }

        let (path, format) = resolve_input(path)?;
        debug!("Loading {format:?} document from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_str_with_format(&content, format)
    }

    /// Parses, normalizes and validates a document.
    pub fn from_str_with_format(content: &str, format: InputFormat) -> Result<Self> {
        let raw: RawDocument = match format {
            InputFormat::Json => serde_json::from_str(content)?,
            InputFormat::Yaml => serde_yaml::from_str(content)?,
        };

        let mut sections = IndexMap::with_capacity(raw.cv.sections.len());
        for (title, values) in raw.cv.sections {
            let entries = values
                .into_iter()
                .enumerate()
                .map(|(index, value)| parse_entry(&title, index, value))
                .collect::<Result<Vec<_>>>()?;
            sections.insert(title, entries);
        }

        let document = Document {
            cv: Cv {
                name: raw.cv.name,
                sections,
            },
            design: Design {
                templates: raw.design.templates.merged_over_defaults(),
                show_time_spans_in: raw.design.show_time_spans_in,
            },
            locale: raw.locale,
        };
        document.validate()?;
        Ok(document)
    }

    pub fn validate(&self) -> Result<()> {
        let templates = &self.design.templates;
        for (name, template) in [
            ("single_date", &templates.single_date),
            ("date_range", &templates.date_range),
            ("time_span", &templates.time_span),
        ] {
            if template.trim().is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "{name} template must not be empty"
                )));
            }
        }

        for (name, months) in [
            ("month_names", &self.locale.month_names),
            ("month_abbreviations", &self.locale.month_abbreviations),
        ] {
            if months.len() != 12 {
                return Err(Error::ConfigValidation(format!(
                    "locale {name} must list 12 months, found {}",
                    months.len()
                )));
            }
        }

        for title in &self.design.show_time_spans_in {
            if !self.cv.sections.contains_key(title) {
                warn!("show_time_spans_in lists '{title}', which is not a section of this CV");
            }
        }

        for (title, entries) in &self.cv.sections {
            for core in entries.iter().filter_map(Entry::core) {
                if core.date.as_ref().is_some_and(DateValue::is_present)
                    || core.start_date.as_ref().is_some_and(DateValue::is_present)
                {
                    return Err(Error::ConfigValidation(format!(
                        "'present' can only end a date range (section '{title}')"
                    )));
                }
                if let Some(url) = core.url.as_deref() {
                    validate_url(url).map_err(|reason| {
                        Error::ConfigValidation(format!(
                            "invalid url '{url}' in section '{title}': {reason}"
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Whether date ranges in `section` show their time span.
    pub fn shows_time_span_in(&self, section: &str) -> bool {
        self.design.show_time_spans_in.iter().any(|title| title == section)
    }
}

/// Date attributes checked for a precise error when an entry fails to type.
const DATE_KEYS: [&str; 3] = ["date", "start_date", "end_date"];

fn parse_entry(section: &str, index: usize, value: serde_json::Value) -> Result<Entry> {
    match Entry::deserialize(&value) {
        Ok(entry) => Ok(entry.normalized()),
        Err(err) => {
            let position = format!("entry {} of section '{section}'", index + 1);
            if let Some(invalid) = invalid_date(&value) {
                debug!("Malformed date in {position}");
                return Err(invalid);
            }
            Err(Error::UnknownEntryType(format!("{position} ({err})")))
        }
    }
}

/// The first malformed date attribute of an entry, if any.
fn invalid_date(value: &serde_json::Value) -> Option<Error> {
    DATE_KEYS
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(DateValue::from_json)
        .find_map(Result::err)
}

fn validate_url(url: &str) -> std::result::Result<(), String> {
    let parsed = Url::parse(url).map_err(|err| err.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("unsupported scheme '{scheme}'")),
    }
}

fn resolve_input(path: &Path) -> Result<(PathBuf, InputFormat)> {
    if let Some(format) = InputFormat::from_path(path) {
        if path.is_file() {
            return Ok((path.to_path_buf(), format));
        }
    } else {
        let base = path.to_str_checked()?;
        for extension in INPUT_EXTENSIONS {
            let candidate = PathBuf::from(format!("{base}.{extension}"));
            if let Some(format) = InputFormat::from_path(&candidate) {
                if candidate.is_file() {
                    return Ok((candidate, format));
                }
            }
        }
    }

    Err(Error::ConfigNotFound {
        path: path.display().to_string(),
        extensions: INPUT_EXTENSIONS.join(", "),
    })
}
