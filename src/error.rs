use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the mailbox library.
///
/// Lookups never fail: an unknown sender, term or identifier is an empty
/// result, not an error.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("could not open mailbox file {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for mailbox operations
pub type Result<T> = std::result::Result<T, MailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailError::UnreadableSource {
            path: PathBuf::from("correos.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "could not open mailbox file correos.txt: missing"
        );

        let err = MailError::Config("bad color".to_string());
        assert_eq!(err.to_string(), "configuration error: bad color");
    }
}
