//! Template processing for entries
//!
//! This module contains the steps an entry goes through before substitution:
//! - `fields`: flattening an entry into its field map
//! - `processor`: display values for fields that need dedicated formatting
//! - `elision`: removing placeholders that have no value

pub mod elision;
pub mod fields;
pub mod processor;
