/// Unique identifier for a record in the mailbox.
///
/// Identifiers start at 1 and are handed out in arrival order. `u32` keeps
/// them directly usable as members of the term index bitmaps.
pub type RecordId = u32;

/// A single indexed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub sender: String,
    pub subject: String,
    pub body: String,
    /// Date in a lexically sortable format (`YYYY-MM-DD`)
    pub date: String,
}

impl Record {
    /// Text that the term index tokenizes: subject and body joined by a space
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.subject.len() + self.body.len() + 1);
        text.push_str(&self.subject);
        text.push(' ');
        text.push_str(&self.body);
        text
    }
}

/// Summary numbers for the `stats` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub record_count: usize,
    pub sender_count: usize,
    pub term_count: usize,
    /// Height of the date tree (0 when empty)
    pub date_tree_height: usize,
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
}
