//! List command report data structures.

use super::output::{Output, Report};

/// Schema entries and the files they generate.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
}

/// A single schema entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// Top-level schema key, e.g. "user_agent".
    pub key: String,
    /// Generated file name, e.g. "UserAgent.php".
    pub file_name: String,
    /// Number of fields in the entry.
    pub field_count: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No types defined");
            return;
        }

        out.section(&format!("Types ({})", self.entries.len()));
        for entry in &self.entries {
            out.list_item(&format!(
                "{} -> {} ({} fields)",
                entry.key, entry.file_name, entry.field_count
            ));
        }
    }
}
