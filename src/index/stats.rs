use crate::index::mailbox::Mailbox;
use crate::index::types::IndexStats;
use crate::ingest::LoadReport;
use std::io::{self, Write};
use std::path::Path;

/// Display mailbox statistics
pub fn show_stats(
    mailbox: &Mailbox,
    mailbox_path: &Path,
    report: Option<LoadReport>,
) -> io::Result<()> {
    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), &mailbox.stats(), mailbox_path, report)
}

fn write_stats<W: Write>(
    out: &mut W,
    stats: &IndexStats,
    mailbox_path: &Path,
    report: Option<LoadReport>,
) -> io::Result<()> {
    writeln!(out, "Mailbox Statistics")?;
    writeln!(out, "==================")?;
    writeln!(out)?;
    writeln!(out, "Mailbox file:     {}", mailbox_path.display())?;
    match report {
        Some(report) => {
            writeln!(out, "Lines read:       {}", report.lines)?;
            writeln!(out, "Lines skipped:    {}", report.skipped)?;
        }
        None => writeln!(out, "Lines read:       (file not loaded)")?,
    }
    writeln!(out)?;
    writeln!(out, "Records:          {}", stats.record_count)?;
    writeln!(out, "Senders:          {}", stats.sender_count)?;
    writeln!(out, "Distinct terms:   {}", stats.term_count)?;
    writeln!(out, "Date tree height: {}", stats.date_tree_height)?;
    writeln!(
        out,
        "Date range:       {} .. {}",
        stats.earliest_date.as_deref().unwrap_or("-"),
        stats.latest_date.as_deref().unwrap_or("-")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_stats() {
        let stats = IndexStats {
            record_count: 3,
            sender_count: 2,
            term_count: 7,
            date_tree_height: 2,
            earliest_date: Some("2025-11-09".to_string()),
            latest_date: Some("2025-11-11".to_string()),
        };
        let report = LoadReport { lines: 4, loaded: 3, skipped: 1 };

        let mut out = Vec::new();
        write_stats(&mut out, &stats, Path::new("correos.txt"), Some(report)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Records:          3"));
        assert!(text.contains("Lines skipped:    1"));
        assert!(text.contains("Date range:       2025-11-09 .. 2025-11-11"));
    }

    #[test]
    fn test_write_stats_empty() {
        let mut out = Vec::new();
        write_stats(&mut out, &IndexStats::default(), Path::new("x.txt"), None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(file not loaded)"));
        assert!(text.contains("Date range:       - .. -"));
    }
}
