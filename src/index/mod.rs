pub mod date_tree;
pub mod mailbox;
pub mod seed;
pub mod sender;
pub mod stats;
pub mod store;
pub mod terms;
pub mod types;

pub use mailbox::Mailbox;
pub use types::*;
