/// Extension trait for `str` with the line-oriented helpers the renderer needs
pub trait StrExt {
    /// Prefixes every line that is not blank with `prefix`, keeping line
    /// endings as they are. Blank lines are left alone so they carry no
    /// trailing whitespace.
    ///
    /// # Examples
    /// ```
    /// use cvtemplater::ext::StrExt;
    ///
    /// assert_eq!("a\n\nb".indent_lines("  "), "  a\n\n  b");
    /// ```
    fn indent_lines(&self, prefix: &str) -> String;
}

impl StrExt for str {
    fn indent_lines(&self, prefix: &str) -> String {
        self.split_inclusive('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    line.to_string()
                } else {
                    format!("{prefix}{line}")
                }
            })
            .collect()
    }
}
