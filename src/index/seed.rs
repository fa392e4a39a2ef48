use crate::index::mailbox::Mailbox;

/// Built-in messages as `(sender, subject, body, date)`
pub const SEED_RECORDS: [(&str, &str, &str, &str); 3] = [
    (
        "juan@correo.com",
        "Reunion de equipo",
        "Reunion urgente mañana",
        "2025-11-10",
    ),
    (
        "ana@correo.com",
        "Entrega de tarea",
        "La tarea esta lista",
        "2025-11-11",
    ),
    (
        "luis@correo.com",
        "Proyecto nuevo",
        "Debemos entregar el reporte",
        "2025-11-09",
    ),
];

/// Index the built-in messages into `mailbox`
pub fn load_seed_records(mailbox: &mut Mailbox) -> usize {
    for (sender, subject, body, date) in SEED_RECORDS {
        mailbox.create_and_index(sender, subject, body, date);
    }
    SEED_RECORDS.len()
}
