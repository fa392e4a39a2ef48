use crate::index::date_tree::DateTree;
use crate::index::sender::SenderIndex;
use crate::index::store::RecordStore;
use crate::index::terms::TermIndex;
use crate::index::types::{IndexStats, Record, RecordId};
use crate::utils::{normalize_term, tokenize_query};
use tracing::debug;

/// The indexed mailbox: record store plus its three indexes.
///
/// All mutation goes through [`Mailbox::create_and_index`], which updates the
/// store, the term index, the sender index and the date tree in that order.
/// None of those steps can fail once the record exists, so a call either
/// indexes the record everywhere or was never made.
#[derive(Debug, Default)]
pub struct Mailbox {
    store: RecordStore,
    terms: TermIndex,
    senders: SenderIndex,
    by_date: DateTree,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from raw fields and index it
    pub fn create_and_index(
        &mut self,
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
    ) -> &Record {
        let record = self.store.create(sender, subject, body, date);
        let token_count = self.terms.index(record);
        self.senders.index(record);
        self.by_date.insert(&record.date, record.id);

        debug!(
            id = record.id,
            sender = %record.sender,
            date = %record.date,
            tokens = token_count,
            "indexed record"
        );
        record
    }

    /// Look up a record by identifier
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    /// Every record, ascending by date (ties in arrival order)
    pub fn sorted_by_date(&self) -> Vec<&Record> {
        self.resolve(&self.by_date.sorted_ids())
    }

    /// Records from exactly `sender` (case-sensitive), in arrival order
    pub fn from_sender(&self, sender: &str) -> Vec<&Record> {
        self.resolve(self.senders.lookup(sender))
    }

    /// Identifiers of records containing `term` as a whole token.
    ///
    /// The term is lowercased before the lookup.
    pub fn term_ids(&self, term: &str) -> Vec<RecordId> {
        self.terms.lookup(&normalize_term(term))
    }

    /// Records containing `term` as a whole token, ascending by identifier
    pub fn with_term(&self, term: &str) -> Vec<&Record> {
        self.resolve(&self.term_ids(term))
    }

    /// Records containing every token of a free-form query.
    ///
    /// A single word behaves like [`Mailbox::with_term`]; a query with no
    /// alphanumeric characters matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let tokens = tokenize_query(query);
        self.resolve(&self.terms.lookup_all(&tokens))
    }

    /// Known senders, sorted
    pub fn senders(&self) -> Vec<&str> {
        self.senders.senders()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            record_count: self.store.len(),
            sender_count: self.senders.len(),
            term_count: self.terms.len(),
            date_tree_height: self.by_date.height(),
            earliest_date: self.by_date.earliest().map(str::to_string),
            latest_date: self.by_date.latest().map(str::to_string),
        }
    }

    fn resolve(&self, ids: &[RecordId]) -> Vec<&Record> {
        ids.iter().filter_map(|&id| self.store.get(id)).collect()
    }
}
