/// Extension traits for built-in Rust types.
///
/// Each extension trait lives in its own file named after the type it extends:
/// - `path.rs` - Extensions for `std::path::Path`
/// - `string.rs` - Extensions for `str`
pub mod path;
pub mod string;

pub use path::PathExt;
pub use string::StrExt;
