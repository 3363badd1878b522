//! Display values for fields that need more than their raw text
//!
//! Each processor is a pure function over raw entry attributes. They fail
//! with [`Error::Internal`] when asked for a value the entry does not have,
//! since that means the templates and the entry disagree about its schema.

use chrono::NaiveDate;

use crate::config::TemplateSet;
use crate::constants::{HIGHLIGHT_SEPARATOR, SUMMARY_ADMONITION, SUMMARY_INDENT};
use crate::entry::{DateValue, Entry};
use crate::error::{Error, Result};
use crate::ext::StrExt;
use crate::format::{
    clean_url, compute_time_span_string, format_date_range, format_single_date, Locale,
};

/// Renders highlights as a markdown list. A highlight containing `" - "`
/// becomes a bullet followed by one indented sub-bullet per extra segment.
///
/// # Examples
/// ```
/// use cvtemplater::template::processor::process_highlights;
///
/// let highlights = vec![
///     "Led team of 5 engineers".to_string(),
///     "Reduced costs - Server optimization - Database indexing".to_string(),
/// ];
/// assert_eq!(
///     process_highlights(&highlights),
///     "- Led team of 5 engineers\n- Reduced costs\n  - Server optimization\n  - Database indexing"
/// );
/// ```
pub fn process_highlights(highlights: &[String]) -> String {
    highlights
        .iter()
        .map(|highlight| format!("- {}", highlight.replace(HIGHLIGHT_SEPARATOR, "\n  - ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins author names with `", "`.
pub fn process_authors(authors: &[String]) -> String {
    authors.join(", ")
}

/// Renders the DATE field of an entry.
///
/// A lone `date` goes through the single-date template. A complete
/// `start_date`/`end_date` pair goes through the range template, followed by
/// the time span as a separate paragraph when `show_time_span` is set.
/// Anything else is an error.
pub fn process_date(
    date: Option<&DateValue>,
    start_date: Option<&DateValue>,
    end_date: Option<&DateValue>,
    templates: &TemplateSet,
    locale: &Locale,
    show_time_span: bool,
    current_date: NaiveDate,
) -> Result<String> {
    match (date, start_date, end_date) {
        (Some(date), None, None) => format_single_date(date, locale, &templates.single_date),
        (_, Some(start), Some(end)) => {
            let date_range = format_date_range(
                start,
                end,
                locale,
                &templates.single_date,
                &templates.date_range,
            )?;
            if !show_time_span {
                return Ok(date_range);
            }
            let time_span =
                compute_time_span_string(start, end, locale, current_date, &templates.time_span)?;
            Ok(format!("{date_range}\n\n{time_span}"))
        }
        _ => Err(Error::internal("Date is not provided for this entry.")),
    }
}

/// Renders the URL field as a markdown link. Publications with a DOI link
/// to the DOI instead of their URL.
pub fn process_url(entry: &Entry) -> Result<String> {
    if entry.as_publication().is_some_and(|publication| publication.doi.is_some()) {
        return process_doi(entry);
    }
    match entry.core().and_then(|core| core.url.as_deref()) {
        Some(url) => Ok(format!("[{}]({url})", clean_url(url))),
        None => Err(Error::internal("URL is not provided for this entry.")),
    }
}

/// Renders the DOI field of a publication as a markdown link to its resolver URL.
pub fn process_doi(entry: &Entry) -> Result<String> {
    match entry.as_publication().and_then(|publication| publication.doi_url()) {
        Some(doi_url) => Ok(format!("[{}]({doi_url})", clean_url(&doi_url))),
        None => Err(Error::internal("DOI is not provided for this entry.")),
    }
}

/// Wraps a summary in a `!!! summary` admonition block.
///
/// # Examples
/// ```
/// use cvtemplater::template::processor::process_summary;
///
/// assert_eq!(
///     process_summary("Key project achievements\nand outcomes"),
///     "!!! summary\n    Key project achievements\n    and outcomes"
/// );
/// ```
pub fn process_summary(summary: &str) -> String {
    format!("{SUMMARY_ADMONITION}\n{}", summary.indent_lines(SUMMARY_INDENT))
}
