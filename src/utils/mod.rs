//! Shared helpers.
//!
//! - [`app_data`] - Configuration file (`config.json` in the user config dir)
//! - [`progress`] - Loading spinner, silent without the `progress` feature
//! - [`tokenizer`] - Token extraction for the term index
//!
//! ```
//! use mailfind::utils::extract_tokens;
//!
//! let tokens = extract_tokens("Reunion de equipo: mañana");
//! assert!(tokens.contains("reunion"));
//! assert!(tokens.contains("mañana"));
//! ```

pub mod app_data;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
