//! Mailbox file ingestion.
//!
//! One message per line, fields separated by `;`:
//!
//! ```text
//! sender;subject;body;date
//! ```
//!
//! Only the first four fields are read and missing trailing fields are empty.
//! Lines with an empty sender are skipped.

use crate::error::{MailError, Result};
use crate::index::Mailbox;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const FIELD_SEPARATOR: char = ';';

/// Fields of one mailbox line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub sender: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub date: &'a str,
}

/// Outcome of loading a mailbox file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read, including skipped ones
    pub lines: usize,
    /// Records indexed
    pub loaded: usize,
    /// Lines ignored because the sender was empty
    pub skipped: usize,
}

/// Split a line into its fields. `None` when the sender is empty.
pub fn parse_line(line: &str) -> Option<RawFields<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.splitn(5, FIELD_SEPARATOR);

    let sender = fields.next().unwrap_or("");
    if sender.is_empty() {
        return None;
    }

    Some(RawFields {
        sender,
        subject: fields.next().unwrap_or(""),
        body: fields.next().unwrap_or(""),
        date: fields.next().unwrap_or(""),
    })
}

/// Load every valid line of the file at `path` into `mailbox`
pub fn load_mailbox_file(path: &Path, mailbox: &mut Mailbox) -> Result<LoadReport> {
    let file = File::open(path).map_err(|source| MailError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loading mailbox file");

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading {}", path.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = load_from_reader(BufReader::new(file), mailbox).map_err(|source| {
        MailError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        }
    });
    pb.finish_and_clear();

    let report = report?;
    info!(
        loaded = report.loaded,
        skipped = report.skipped,
        "mailbox file loaded"
    );
    Ok(report)
}

/// Load every valid line from `reader` into `mailbox`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_from_reader<R: BufRead>(
    mut reader: R,
    mailbox: &mut Mailbox,
) -> std::io::Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line: Cow<'_, str> = String::from_utf8_lossy(&buf);

        match parse_line(&line) {
            Some(fields) => {
                mailbox.create_and_index(fields.sender, fields.subject, fields.body, fields.date);
                report.loaded += 1;
            }
            None => {
                debug!(line = report.lines, "skipping line with empty sender");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
