use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::PRESENT;
use crate::error::{Error, Result};

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:-(\d{1,2}))?(?:-(\d{1,2}))?$").expect("valid date pattern")
});

/// A date attribute of an entry.
///
/// Numeric dates (`2024`, `2024-03`, `2024-03-15`) are parsed and validated,
/// `present` becomes the sentinel used to close open ranges, and anything
/// else is kept as free text and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "String")]
pub enum DateValue {
    Present,
    Year(i32),
    YearMonth { year: i32, month: u32 },
    Day(NaiveDate),
    Text(String),
}

/// Shapes a date may take in YAML or JSON input.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Int(i64),
    Str(String),
}

impl TryFrom<RawDate> for DateValue {
    type Error = Error;

    fn try_from(raw: RawDate) -> Result<Self> {
        match raw {
            RawDate::Int(year) => {
                i32::try_from(year).map(DateValue::Year).map_err(|_| Error::InvalidDate {
                    value: year.to_string(),
                    reason: "year out of range".into(),
                })
            }
            RawDate::Str(s) => s.parse(),
        }
    }
}

impl FromStr for DateValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(PRESENT) {
            return Ok(DateValue::Present);
        }

        let Some(caps) = NUMERIC_DATE.captures(trimmed) else {
            return Ok(DateValue::Text(trimmed.to_string()));
        };

        let invalid = |reason: &str| Error::InvalidDate {
            value: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let year: i32 = caps[1].parse().map_err(|_| invalid("year is not a number"))?;
        let month = caps.get(2).map(|m| m.as_str().parse::<u32>());
        let day = caps.get(3).map(|d| d.as_str().parse::<u32>());

        match (month, day) {
            (None, _) => Ok(DateValue::Year(year)),
            (Some(Ok(month)), None) => {
                if (1..=12).contains(&month) {
                    Ok(DateValue::YearMonth { year, month })
                } else {
                    Err(invalid("month out of range"))
                }
            }
            (Some(Ok(month)), Some(Ok(day))) => NaiveDate::from_ymd_opt(year, month, day)
                .map(DateValue::Day)
                .ok_or_else(|| invalid("not a calendar date")),
            _ => Err(invalid("malformed date")),
        }
    }
}

impl DateValue {
    /// Reads a date from an untyped document value. Returns `None` when the
    /// value is neither an integer nor a string.
    pub fn from_json(value: &serde_json::Value) -> Option<Result<Self>> {
        let raw = match value {
            serde_json::Value::Number(number) => RawDate::Int(number.as_i64()?),
            serde_json::Value::String(text) => RawDate::Str(text.clone()),
            _ => return None,
        };
        Some(Self::try_from(raw))
    }

    pub fn is_present(&self) -> bool {
        matches!(self, DateValue::Present)
    }

    /// Year-only dates carry no month, so time spans against them are
    /// counted in whole years.
    pub fn is_year_only(&self) -> bool {
        matches!(self, DateValue::Year(_))
    }

    /// Resolves the date to a calendar day. `present` becomes `current_date`,
    /// partial dates fall on the first day of their period and free text has
    /// no calendar day at all.
    pub fn resolve(&self, current_date: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateValue::Present => Some(current_date),
            DateValue::Year(year) => NaiveDate::from_ymd_opt(*year, 1, 1),
            DateValue::YearMonth { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1),
            DateValue::Day(date) => Some(*date),
            DateValue::Text(_) => None,
        }
    }

    pub fn year(&self, current_date: NaiveDate) -> Option<i32> {
        self.resolve(current_date).map(|d| d.year())
    }
}

impl Display for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateValue::Present => write!(f, "{PRESENT}"),
            DateValue::Year(year) => write!(f, "{year}"),
            DateValue::YearMonth { year, month } => write!(f, "{year}-{month:02}"),
            DateValue::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<DateValue> for String {
    fn from(value: DateValue) -> Self {
        value.to_string()
    }
}
