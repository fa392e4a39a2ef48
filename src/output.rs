//! Colored terminal output for the non-interactive commands

use crate::index::Record;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Which listing a set of records came from; decides the columns shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// id, sender, subject, date
    ByDate,
    /// id, subject, date (the sender is already known)
    BySender,
    /// id, subject, sender, date
    ByTerm,
}

/// Open stdout with the requested color choice
pub fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(choice)
}

/// Print a titled list of records, one per line
pub fn print_records<W: WriteColor>(
    out: &mut W,
    title: &str,
    records: &[&Record],
    listing: Listing,
) -> io::Result<()> {
    print_heading(out, title)?;

    for record in records {
        print_id(out, record)?;
        match listing {
            Listing::ByDate => {
                print_field(out, &record.sender, Color::White)?;
                print_field(out, &record.subject, Color::Red)?;
            }
            Listing::BySender => {
                print_field(out, &record.subject, Color::White)?;
            }
            Listing::ByTerm => {
                print_field(out, &record.subject, Color::Red)?;
                print_field(out, &record.sender, Color::White)?;
            }
        }
        print_field(out, &record.date, Color::White)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print one record in full
pub fn print_record<W: WriteColor>(out: &mut W, record: &Record) -> io::Result<()> {
    print_heading(out, "[ MESSAGE ]")?;

    print_label(out, "ID: ")?;
    writeln!(out, "{}", record.id)?;

    print_label(out, "Sender: ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
    writeln!(out, "{}", record.sender)?;
    out.reset()?;

    print_label(out, "Subject: ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(out, "{}", record.subject)?;
    out.reset()?;

    print_label(out, "Date: ")?;
    writeln!(out, "{}", record.date)?;
    writeln!(out)?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
    writeln!(out, "{}", record.body)?;
    out.reset()?;

    Ok(())
}

/// Print a one-line status message (green for success, red for problems)
pub fn print_notice<W: WriteColor>(out: &mut W, message: &str, ok: bool) -> io::Result<()> {
    let color = if ok { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(out, "{}", message)?;
    out.reset()
}

fn print_heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::White)).set_bold(true))?;
    writeln!(out, "{}", title)?;
    out.reset()?;
    writeln!(out)
}

fn print_label<W: WriteColor>(out: &mut W, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", label)?;
    out.reset()
}

fn print_id<W: WriteColor>(out: &mut W, record: &Record) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", record.id)?;
    out.reset()
}

fn print_field<W: WriteColor>(out: &mut W, value: &str, color: Color) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}", value)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn record(id: u32, sender: &str, subject: &str, date: &str) -> Record {
        Record {
            id,
            sender: sender.to_string(),
            subject: subject.to_string(),
            body: "cuerpo del mensaje".to_string(),
            date: date.to_string(),
        }
    }

    fn render(f: impl FnOnce(&mut Buffer) -> io::Result<()>) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_records_by_date_columns() {
        let a = record(3, "luis@correo.com", "Proyecto nuevo", "2025-11-09");
        let b = record(1, "juan@correo.com", "Reunion de equipo", "2025-11-10");
        let text = render(|out| print_records(out, "[ BY DATE ]", &[&a, &b], Listing::ByDate));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[ BY DATE ]");
        assert_eq!(lines[2], "3  luis@correo.com  Proyecto nuevo  2025-11-09");
        assert_eq!(lines[3], "1  juan@correo.com  Reunion de equipo  2025-11-10");
    }

    #[test]
    fn test_records_by_sender_omit_sender() {
        let a = record(2, "ana@correo.com", "Entrega de tarea", "2025-11-11");
        let text = render(|out| print_records(out, "[ RESULTS ]", &[&a], Listing::BySender));
        assert!(text.contains("2  Entrega de tarea  2025-11-11"));
        assert!(!text.contains("ana@correo.com"));
    }

    #[test]
    fn test_records_by_term_columns() {
        let a = record(2, "ana@correo.com", "Entrega de tarea", "2025-11-11");
        let text = render(|out| print_records(out, "[ RESULTS ]", &[&a], Listing::ByTerm));
        assert!(text.contains("2  Entrega de tarea  ana@correo.com  2025-11-11"));
    }

    #[test]
    fn test_print_record() {
        let a = record(7, "ana@correo.com", "Entrega", "2025-11-11");
        let text = render(|out| print_record(out, &a));

        assert!(text.contains("ID: 7"));
        assert!(text.contains("Sender: ana@correo.com"));
        assert!(text.contains("Subject: Entrega"));
        assert!(text.contains("Date: 2025-11-11"));
        assert!(text.ends_with("cuerpo del mensaje\n"));
    }
}
