use crate::index::types::{Record, RecordId};

/// Owner of every record in the mailbox.
///
/// Records live in a `Vec` whose position is `id - 1`. Identifiers are never
/// reused and there is no removal, so the mapping stays dense.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier, store the record and return it
    pub fn create(
        &mut self,
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
    ) -> &Record {
        let id = self.next_id();
        self.records.push(Record {
            id,
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            date: date.into(),
        });
        &self.records[self.records.len() - 1]
    }

    /// Look up a record by identifier
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let index = (id as usize).checked_sub(1)?;
        self.records.get(index)
    }

    /// Identifier the next `create` call will assign
    pub fn next_id(&self) -> RecordId {
        self.records.len() as RecordId + 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = RecordStore::new();
        let first = store.create("a@x", "s", "b", "2025-01-01").id;
        let second = store.create("b@x", "s", "b", "2025-01-02").id;
        let third = store.create("c@x", "s", "b", "2025-01-03").id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(third, 3);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_get_returns_stored_record() {
        let mut store = RecordStore::new();
        store.create("juan@correo.com", "Reunion", "urgente", "2025-11-10");

        let record = store.get(1).unwrap();
        assert_eq!(record.sender, "juan@correo.com");
        assert_eq!(record.subject, "Reunion");
        assert_eq!(record.date, "2025-11-10");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let mut store = RecordStore::new();
        store.create("a@x", "", "", "2025-01-01");

        assert!(store.get(0).is_none());
        assert!(store.get(2).is_none());
        assert!(store.get(999).is_none());
    }
}
