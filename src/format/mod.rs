//! Formatting primitives shared by the renderer
//!
//! - `date`: locale-aware single dates, date ranges and time spans
//! - `text`: URL shortening and placeholder substitution

pub mod date;
pub mod text;

pub use date::{compute_time_span_string, format_date_range, format_single_date, Locale};
pub use text::{clean_url, substitute_placeholders, Substitutor};
