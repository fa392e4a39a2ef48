//! # mailfind - Mailbox Indexer
//!
//! mailfind loads a plain-text mailbox (`sender;subject;body;date` per line)
//! into memory and answers three kinds of query: every message ordered by
//! date, every message from one sender, and every message containing a
//! keyword.
//!
//! ## Architecture
//!
//! - [`index`] - Record store and the three indexes, behind [`index::Mailbox`]
//! - [`ingest`] - Mailbox file parsing
//! - [`output`] - Colored output for the one-shot commands
//! - `tui` - Interactive terminal UI (feature `interactive`)
//! - [`utils`] - Tokenizer, configuration, progress spinner
//! - [`error`] - Library error type
//!
//! ## Quick Start
//!
//! ```
//! use mailfind::index::Mailbox;
//!
//! let mut mailbox = Mailbox::new();
//! mailbox.create_and_index("juan@correo.com", "Reunion de equipo", "Reunion urgente", "2025-11-10");
//! mailbox.create_and_index("luis@correo.com", "Proyecto nuevo", "Entregar el reporte", "2025-11-09");
//!
//! let dates: Vec<&str> = mailbox.sorted_by_date().iter().map(|r| r.date.as_str()).collect();
//! assert_eq!(dates, ["2025-11-09", "2025-11-10"]);
//!
//! assert_eq!(mailbox.from_sender("juan@correo.com").len(), 1);
//! assert_eq!(mailbox.term_ids("REUNION"), vec![1]);
//! assert!(mailbox.get(999).is_none());
//! ```
//!
//! ## Indexes
//!
//! 1. **Record store** - owns every record, hands out identifiers from 1
//! 2. **Date tree** - unbalanced binary search tree keyed by date string
//! 3. **Sender index** - exact, case-sensitive sender to records in arrival order
//! 4. **Term index** - lowercase alphanumeric token to a bitmap of identifiers
//!
//! Everything is rebuilt from the mailbox file on each start; nothing is
//! persisted.

pub mod error;
pub mod index;
pub mod ingest;
pub mod output;
#[cfg(feature = "interactive")]
pub mod tui;
pub mod utils;

pub use error::{MailError, Result};
