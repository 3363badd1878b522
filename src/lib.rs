//! Entry-template rendering for CV documents.
//!
//! Entries of a CV are turned into display text by filling placeholder
//! templates (`**COMPANY**, POSITION`) with the entry's fields. Placeholders
//! without a value are removed together with the punctuation around them.

/// Handles argument parsing and the command-line workflow.
pub mod cli;

/// Template sets, render options and CV document loading.
pub mod config;

/// Constants used across the crate.
pub mod constants;

/// The entry data model.
pub mod entry;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Date, URL and placeholder formatting.
pub mod format;

/// A set of helpers for reading input and writing output.
pub mod ioutils;

/// Rendering of entries and documents.
pub mod renderer;

/// Field extraction, special-field processing and placeholder elision.
pub mod template;
