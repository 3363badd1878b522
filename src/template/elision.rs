use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use regex::Regex;

use crate::error::Result;

/// A placeholder: a word made only of uppercase letters and underscores.
static UPPERCASE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z_]+\b").expect("valid placeholder pattern"));

/// Trailing run of anything but letters (with their combining marks),
/// digits, sentence punctuation and markdown emphasis/link characters.
static UNWANTED_TRAILING_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}.!?\[\]()*_%]+$").expect("valid trailing parts pattern")
});

/// Collects every placeholder token used across `templates`, in order of
/// first appearance.
pub fn used_placeholders<'a, I>(templates: I) -> IndexSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    templates
        .into_iter()
        .flat_map(|template| UPPERCASE_WORD.find_iter(template).map(|m| m.as_str()))
        .collect()
}

/// Removes placeholders that have no value in `fields` from every template.
///
/// Each unavailable placeholder goes together with the characters glued to
/// it, so `(URL)` or `DOI:` disappear entirely while free-standing words such
/// as `at` stay. The results are then passed through [`clean_trailing_parts`].
/// When every placeholder is provided the templates are returned untouched.
///
/// # Examples
/// ```
/// use cvtemplater::template::elision::remove_not_provided_placeholders;
/// use indexmap::IndexMap;
///
/// let templates = IndexMap::from([(
///     "main_column".to_string(),
///     "POSITION at COMPANY, LOCATION".to_string(),
/// )]);
/// let fields = IndexMap::from([
///     ("POSITION".to_string(), "Engineer".to_string()),
///     ("COMPANY".to_string(), "Acme".to_string()),
/// ]);
/// let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
/// assert_eq!(elided["main_column"], "POSITION at COMPANY");
/// ```
pub fn remove_not_provided_placeholders(
    templates: &IndexMap<String, String>,
    fields: &IndexMap<String, String>,
) -> Result<IndexMap<String, String>> {
    let used = used_placeholders(templates.values().map(String::as_str));
    let not_provided: Vec<&str> = used
        .into_iter()
        .filter(|placeholder| !fields.contains_key(*placeholder))
        .collect();

    if not_provided.is_empty() {
        return Ok(templates.clone());
    }
    debug!("Eliding placeholders without values: {not_provided:?}");

    let alternation = not_provided
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = Regex::new(&format!(r"\S*(?:{alternation})\S*"))?;
    trace!("Elision pattern: {pattern}");

    Ok(templates
        .iter()
        .map(|(name, template)| {
            let elided = pattern.replace_all(template, "");
            (name.clone(), clean_trailing_parts(&elided))
        })
        .collect())
}

/// Tidies text left behind by elision, line by line.
///
/// Trailing whitespace is trimmed, stray trailing separators such as `, ` or
/// `: ` are stripped, and lines that end up empty are dropped. Sentence
/// punctuation and markdown syntax (`.!?[]()*_%`) survive at line ends.
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
/// ```
/// use cvtemplater::template::elision::clean_trailing_parts;
///
/// assert_eq!(
///     clean_trailing_parts("Position at Company, \nLink: "),
///     "Position at Company\nLink"
/// );
/// ```
pub fn clean_trailing_parts(text: &str) -> String {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                return None;
            }
            let cleaned = UNWANTED_TRAILING_PARTS.replace(line, "");
            let cleaned = cleaned.trim_end();
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn finds_used_placeholders() {
        let used = used_placeholders(["**COMPANY**, POSITION", "LOCATION\nDATE (DATE)"]);
        let used: Vec<_> = used.into_iter().collect();
        assert_eq!(used, vec!["COMPANY", "POSITION", "LOCATION", "DATE"]);
    }

    #[test]
    fn ignores_mixed_case_words() {
        let used = used_placeholders(["Worked at Acme as POSITION"]);
        assert_eq!(used.into_iter().collect::<Vec<_>>(), vec!["POSITION"]);
    }

    #[test]
    fn elides_missing_location() {
        let templates = map(&[("main_column", "POSITION at COMPANY, LOCATION")]);
        let fields = map(&[("POSITION", "Engineer"), ("COMPANY", "Acme")]);
        let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
        assert_eq!(elided["main_column"], "POSITION at COMPANY");
    }

    #[test]
    fn elides_punctuation_glued_to_placeholder() {
        let templates = map(&[("main_column", "**TITLE**\nURL (JOURNAL)\nSee DOI:")]);
        let fields = map(&[("TITLE", "Paper"), ("URL", "[a](b)")]);
        let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
        assert_eq!(elided["main_column"], "**TITLE**\nURL\nSee");
    }

    #[test]
    fn drops_lines_that_become_empty() {
        let templates = map(&[("date_and_location_column", "LOCATION\nDATE")]);
        let fields = map(&[("DATE", "2024")]);
        let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
        assert_eq!(elided["date_and_location_column"], "DATE");
    }

    #[test]
    fn untouched_when_everything_is_provided() {
        let templates = map(&[("main_column", "  NAME, \n")]);
        let fields = map(&[("NAME", "Ada")]);
        let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
        assert_eq!(elided["main_column"], "  NAME, \n");
    }

    #[test]
    fn elision_applies_to_every_slot() {
        let templates = map(&[("a", "NAME, LOCATION"), ("b", "LOCATION"), ("c", "Static")]);
        let fields = map(&[("NAME", "Ada")]);
        let elided = remove_not_provided_placeholders(&templates, &fields).unwrap();
        assert_eq!(elided["a"], "NAME");
        assert_eq!(elided["b"], "");
        assert_eq!(elided["c"], "Static");
    }

    #[test]
    fn cleanup_strips_trailing_separators() {
        assert_eq!(
            clean_trailing_parts("Position at Company, \nLink: "),
            "Position at Company\nLink"
        );
    }

    #[test]
    fn cleanup_preserves_markdown_and_punctuation() {
        assert_eq!(clean_trailing_parts("**Bold** -- "), "**Bold**");
        assert_eq!(clean_trailing_parts("[site](https://a.b) | "), "[site](https://a.b)");
        assert_eq!(clean_trailing_parts("Done! "), "Done!");
        assert_eq!(clean_trailing_parts("50%, "), "50%");
        assert_eq!(clean_trailing_parts("Zürich, Café, "), "Zürich, Café");
    }

    #[test]
    fn cleanup_keeps_combining_marks() {
        assert_eq!(clean_trailing_parts("Cafe\u{301}, "), "Cafe\u{301}");
        assert_eq!(clean_trailing_parts("Hindi: \u{915}\u{93f} | "), "Hindi: \u{915}\u{93f}");
    }

    #[test]
    fn cleanup_drops_blank_and_separator_only_lines() {
        assert_eq!(clean_trailing_parts("a\n   \n, \nb"), "a\nb");
    }

    proptest! {
        #[test]
        fn cleanup_is_idempotent(text in "[a-zA-Z0-9 ,.:;!?*_()\\[\\]%\\-\né\u{301}]{0,60}") {
            let once = clean_trailing_parts(&text);
            prop_assert_eq!(clean_trailing_parts(&once), once);
        }
    }
}
