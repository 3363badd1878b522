use super::RenderedEntry;
use crate::entry::Entry;
use crate::error::Result;

/// Trait for engines that turn entries into their display text.
pub trait EntryRenderer {
    /// Renders a single entry.
    ///
    /// # Arguments
    /// * `entry` - Entry to render
    ///
    /// # Returns
    /// * `Result<RenderedEntry>` - The entry with its rendered templates and fields
    fn render(&self, entry: &Entry) -> Result<RenderedEntry>;

    /// Renders a sequence of entries, stopping at the first failure.
    ///
    /// # Arguments
    /// * `entries` - Entries to render, in order
    ///
    /// # Returns
    /// * `Result<Vec<RenderedEntry>>` - Rendered entries in the same order
    fn render_all(&self, entries: &[Entry]) -> Result<Vec<RenderedEntry>> {
        entries.iter().map(|entry| self.render(entry)).collect()
    }
}
