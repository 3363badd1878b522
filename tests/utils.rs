#![allow(dead_code)]

use chrono::NaiveDate;
use cvtemplater::cli::{Args, OutputFormat};
use cvtemplater::entry::Entry;
use std::fs;
use std::path::{Path, PathBuf};

/// Date every test resolves `present` to.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Parses a single entry written in YAML.
pub fn entry(yaml: &str) -> Entry {
    serde_yaml::from_str(yaml).unwrap()
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn cli_args(input: PathBuf, output: Option<PathBuf>, format: OutputFormat) -> Args {
    Args {
        input,
        output,
        format,
        current_date: Some(fixed_today()),
        show_time_span: false,
        verbose: 0,
    }
}
