use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path
    /// contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use cvtemplater::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("cv.yaml");
    /// assert_eq!(path.to_str_checked().unwrap(), "cv.yaml");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Lowercased file extension, if the path has one that is valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use cvtemplater::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("CV.YAML").extension_lowercase().as_deref(), Some("yaml"));
    /// assert_eq!(Path::new("cv").extension_lowercase(), None);
    /// ```
    fn extension_lowercase(&self) -> Option<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn extension_lowercase(&self) -> Option<String> {
        self.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase)
    }
}
