use crate::index::types::{Record, RecordId};
use rustc_hash::FxHashMap;

/// Exact-match index from sender to that sender's records, in arrival order.
///
/// Keys are compared exactly as stored: no trimming and no case folding.
#[derive(Debug, Default)]
pub struct SenderIndex {
    by_sender: FxHashMap<String, Vec<RecordId>>,
}

impl SenderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the record to its sender's list, creating the entry if needed
    pub fn index(&mut self, record: &Record) {
        match self.by_sender.get_mut(record.sender.as_str()) {
            Some(ids) => ids.push(record.id),
            None => {
                self.by_sender.insert(record.sender.clone(), vec![record.id]);
            }
        }
    }

    /// Records from `sender` in the order they were indexed; empty if unknown
    pub fn lookup(&self, sender: &str) -> &[RecordId] {
        self.by_sender
            .get(sender)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct senders
    pub fn len(&self) -> usize {
        self.by_sender.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sender.is_empty()
    }

    /// All known senders, sorted
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = self.by_sender.keys().map(String::as_str).collect();
        senders.sort_unstable();
        senders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: RecordId, sender: &str) -> Record {
        Record {
            id,
            sender: sender.to_string(),
            subject: String::new(),
            body: String::new(),
            date: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn test_lookup_preserves_arrival_order() {
        let mut index = SenderIndex::new();
        index.index(&record(1, "ana@correo.com"));
        index.index(&record(2, "juan@correo.com"));
        index.index(&record(3, "ana@correo.com"));
        index.index(&record(4, "ana@correo.com"));

        assert_eq!(index.lookup("ana@correo.com"), &[1, 3, 4]);
        assert_eq!(index.lookup("juan@correo.com"), &[2]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_sender_is_empty() {
        let index = SenderIndex::new();
        assert!(index.lookup("ana@correo.com").is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut index = SenderIndex::new();
        index.index(&record(1, "Ana@Correo.com"));

        assert!(index.lookup("ana@correo.com").is_empty());
        assert_eq!(index.lookup("Ana@Correo.com"), &[1]);
    }

    #[test]
    fn test_senders_sorted() {
        let mut index = SenderIndex::new();
        index.index(&record(1, "luis@correo.com"));
        index.index(&record(2, "ana@correo.com"));

        assert_eq!(index.senders(), vec!["ana@correo.com", "luis@correo.com"]);
    }
}
