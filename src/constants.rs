//! Constants used throughout cvtemplater

/// Input file extensions in order of preference
pub const INPUT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Base URL that DOIs are resolved against
pub const DOI_BASE_URL: &str = "https://doi.org/";

/// Header line of the admonition wrapping entry summaries
pub const SUMMARY_ADMONITION: &str = "!!! summary";

/// Indentation applied to every summary line inside the admonition
pub const SUMMARY_INDENT: &str = "    ";

/// Marker separating a highlight from its sub-bullets
pub const HIGHLIGHT_SEPARATOR: &str = " - ";

/// Literal sentinel accepted as the end of a date range
pub const PRESENT: &str = "present";

/// Shared date templates used when a design does not override them
pub mod templates {
    pub const SINGLE_DATE: &str = "MONTH_ABBREVIATION YEAR";
    pub const DATE_RANGE: &str = "START_DATE – END_DATE";
    pub const TIME_SPAN: &str = "HOW_MANY_YEARS YEARS HOW_MANY_MONTHS MONTHS";
}

/// Uppercase field names with dedicated processing
pub mod fields {
    pub const HIGHLIGHTS: &str = "HIGHLIGHTS";
    pub const AUTHORS: &str = "AUTHORS";
    pub const DATE: &str = "DATE";
    pub const START_DATE: &str = "START_DATE";
    pub const END_DATE: &str = "END_DATE";
    pub const URL: &str = "URL";
    pub const DOI: &str = "DOI";
    pub const SUMMARY: &str = "SUMMARY";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
