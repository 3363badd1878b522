use indexmap::IndexMap;
use log::trace;
use regex::{Captures, Regex};

use crate::error::Result;

/// Shortens a URL for display by dropping the scheme, a leading `www.` and
/// any trailing slash.
///
/// # Examples
/// ```
/// use cvtemplater::format::clean_url;
///
/// assert_eq!(clean_url("https://www.example.com/project/"), "example.com/project");
/// ```
pub fn clean_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    without_www.trim_end_matches('/').to_string()
}

/// Builds the word-bounded alternation matching any of `keys`, longer keys
/// first so `START_DATE` wins over `DATE`.
pub(crate) fn placeholder_pattern<'a, I>(keys: I) -> Result<Regex>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = Regex::new(&format!(r"\b(?:{alternation})\b"))?;
    trace!("Placeholder pattern: {pattern}");
    Ok(pattern)
}

/// Replaces every match of `pattern` in `template` with its value in
/// `placeholders`. Matches without a value stay as they are.
pub(crate) fn replace_placeholders(
    pattern: &Regex,
    template: &str,
    placeholders: &IndexMap<String, String>,
) -> String {
    pattern
        .replace_all(template, |caps: &Captures| {
            placeholders.get(&caps[0]).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Substitutes one set of placeholders into any number of templates,
/// compiling the match pattern once.
///
/// Matching happens in a single pass with longer keys tried first, so a
/// substituted value is never scanned again. Uppercase words that are not
/// keys stay as literal text.
///
/// # Examples
/// ```
/// use cvtemplater::format::Substitutor;
/// use indexmap::IndexMap;
///
/// let fields = IndexMap::from([("NAME".to_string(), "Ada".to_string())]);
/// let substitutor = Substitutor::new(&fields).unwrap();
/// assert_eq!(substitutor.substitute("**NAME**"), "**Ada**");
/// assert_eq!(substitutor.substitute("NAME, LOCATION"), "Ada, LOCATION");
/// ```
#[derive(Debug)]
pub struct Substitutor<'a> {
    placeholders: &'a IndexMap<String, String>,
    pattern: Option<Regex>,
}

impl<'a> Substitutor<'a> {
    pub fn new(placeholders: &'a IndexMap<String, String>) -> Result<Self> {
        let pattern = if placeholders.is_empty() {
            None
        } else {
            Some(placeholder_pattern(placeholders.keys().map(String::as_str))?)
        };
        Ok(Self {
            placeholders,
            pattern,
        })
    }

    pub fn substitute(&self, template: &str) -> String {
        match &self.pattern {
            Some(pattern) => replace_placeholders(pattern, template, self.placeholders),
            None => template.to_string(),
        }
    }
}

/// Replaces every whole-word occurrence of each key of `placeholders` in
/// `template` with its value.
///
/// # Arguments
/// * `template` - Text containing placeholder tokens
/// * `placeholders` - Token to replacement value
///
/// # Returns
/// * `Result<String>` - The substituted text
pub fn substitute_placeholders(
    template: &str,
    placeholders: &IndexMap<String, String>,
) -> Result<String> {
    if template.is_empty() {
        return Ok(String::new());
    }
    Ok(Substitutor::new(placeholders)?.substitute(template))
}
