//! Locale-aware date formatting
//!
//! Dates are rendered through small placeholder templates such as
//! `MONTH_ABBREVIATION YEAR` or `START_DATE – END_DATE`, using the same
//! substitution primitive as entry templates.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text::{placeholder_pattern, replace_placeholders};
use crate::entry::DateValue;
use crate::error::{Error, Result};
use crate::template::elision::remove_not_provided_placeholders;

fn date_pattern(keys: &[&str]) -> Regex {
    placeholder_pattern(keys.iter().copied()).expect("valid date placeholder pattern")
}

static SINGLE_DATE_PLACEHOLDERS: LazyLock<Regex> = LazyLock::new(|| {
    date_pattern(&[
        "MONTH_NAME",
        "MONTH_ABBREVIATION",
        "MONTH",
        "MONTH_IN_TWO_DIGITS",
        "YEAR",
        "YEAR_IN_TWO_DIGITS",
    ])
});

static DATE_RANGE_PLACEHOLDERS: LazyLock<Regex> =
    LazyLock::new(|| date_pattern(&["START_DATE", "END_DATE"]));

static TIME_SPAN_PLACEHOLDERS: LazyLock<Regex> = LazyLock::new(|| {
    date_pattern(&["HOW_MANY_YEARS", "YEARS", "HOW_MANY_MONTHS", "MONTHS"])
});

/// Words and month names used when rendering dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub language: String,
    pub month_names: Vec<String>,
    pub month_abbreviations: Vec<String>,
    pub present: String,
    pub year: String,
    pub years: String,
    pub month: String,
    pub months: String,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            month_names: owned(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            month_abbreviations: owned(&[
                "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct",
                "Nov", "Dec",
            ]),
            present: "present".to_string(),
            year: "year".to_string(),
            years: "years".to_string(),
            month: "month".to_string(),
            months: "months".to_string(),
        }
    }
}

impl Locale {
    fn month_name(&self, month: u32) -> Result<&str> {
        lookup_month(&self.month_names, month, "month_names")
    }

    fn month_abbreviation(&self, month: u32) -> Result<&str> {
        lookup_month(&self.month_abbreviations, month, "month_abbreviations")
    }
}

fn lookup_month<'a>(names: &'a [String], month: u32, list: &str) -> Result<&'a str> {
    (month as usize)
        .checked_sub(1)
        .and_then(|index| names.get(index))
        .map(String::as_str)
        .ok_or_else(|| {
            Error::ConfigValidation(format!("locale {list} has no entry for month {month}"))
        })
}

/// Renders one date.
///
/// `present` becomes the locale's word for it, free text and year-only dates
/// are returned as they are, and month dates go through `template`, which may
/// use `MONTH_NAME`, `MONTH_ABBREVIATION`, `MONTH`, `MONTH_IN_TWO_DIGITS`,
/// `YEAR` and `YEAR_IN_TWO_DIGITS`.
pub fn format_single_date(date: &DateValue, locale: &Locale, template: &str) -> Result<String> {
    let (year, month) = match date {
        DateValue::Present => return Ok(locale.present.clone()),
        DateValue::Text(text) => return Ok(text.clone()),
        DateValue::Year(year) => return Ok(year.to_string()),
        DateValue::YearMonth { year, month } => (*year, *month),
        DateValue::Day(day) => (day.year(), day.month()),
    };

    let placeholders: IndexMap<String, String> = [
        ("MONTH_NAME", locale.month_name(month)?.to_string()),
        ("MONTH_ABBREVIATION", locale.month_abbreviation(month)?.to_string()),
        ("MONTH", month.to_string()),
        ("MONTH_IN_TWO_DIGITS", format!("{month:02}")),
        ("YEAR", year.to_string()),
        ("YEAR_IN_TWO_DIGITS", format!("{:02}", year.rem_euclid(100))),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    Ok(replace_placeholders(&SINGLE_DATE_PLACEHOLDERS, template, &placeholders))
}

/// Renders a date range by placing both rendered ends into `range_template`
/// at `START_DATE` and `END_DATE`. A range whose ends render identically
/// collapses to a single date.
pub fn format_date_range(
    start: &DateValue,
    end: &DateValue,
    locale: &Locale,
    single_date_template: &str,
    range_template: &str,
) -> Result<String> {
    let start = format_single_date(start, locale, single_date_template)?;
    let end = format_single_date(end, locale, single_date_template)?;
    if start == end {
        return Ok(start);
    }

    let placeholders =
        IndexMap::from([("START_DATE".to_string(), start), ("END_DATE".to_string(), end)]);
    Ok(replace_placeholders(&DATE_RANGE_PLACEHOLDERS, range_template, &placeholders))
}

/// Whole years and leftover months between two dates.
///
/// Months are counted on the calendar, minus one when the end falls on an
/// earlier day of the month than the start. If either end is year-only, only
/// years are counted. A span shorter than one month still counts as one month.
fn years_and_months(
    start: &DateValue,
    end: &DateValue,
    current_date: NaiveDate,
) -> Option<(i64, i64)> {
    let start_day = start.resolve(current_date)?;
    let end_day = end.resolve(current_date)?;

    if start.is_year_only() || end.is_year_only() {
        let years = i64::from(end_day.year() - start_day.year()).max(0);
        return Some((years, 0));
    }

    let mut total = i64::from(end_day.year() - start_day.year()) * 12
        + i64::from(end_day.month()) - i64::from(start_day.month());
    if end_day.day() < start_day.day() {
        total -= 1;
    }
    let total = total.max(1);
    Some((total / 12, total % 12))
}

/// Renders the time elapsed between `start` and `end` through `template`,
/// which may use `HOW_MANY_YEARS`, `YEARS`, `HOW_MANY_MONTHS` and `MONTHS`.
/// Zero-valued parts are elided from the template. Returns an empty string
/// when either end is free text.
pub fn compute_time_span_string(
    start: &DateValue,
    end: &DateValue,
    locale: &Locale,
    current_date: NaiveDate,
    template: &str,
) -> Result<String> {
    let Some((years, months)) = years_and_months(start, end, current_date) else {
        debug!("No time span between '{start}' and '{end}': not calendar dates");
        return Ok(String::new());
    };

    let mut placeholders = IndexMap::new();
    if years > 0 {
        let word = if years == 1 { &locale.year } else { &locale.years };
        placeholders.insert("HOW_MANY_YEARS".to_string(), years.to_string());
        placeholders.insert("YEARS".to_string(), word.clone());
    }
    if months > 0 {
        let word = if months == 1 { &locale.month } else { &locale.months };
        placeholders.insert("HOW_MANY_MONTHS".to_string(), months.to_string());
        placeholders.insert("MONTHS".to_string(), word.clone());
    }

    let templates = IndexMap::from([("time_span".to_string(), template.to_string())]);
    let templates = remove_not_provided_placeholders(&templates, &placeholders)?;
    let template = templates.get("time_span").map(String::as_str).unwrap_or_default();
    let span = replace_placeholders(&TIME_SPAN_PLACEHOLDERS, template, &placeholders);
    Ok(span.trim().to_string())
}
