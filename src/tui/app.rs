use crate::index::{Mailbox, Record, RecordId};
use crate::output::Listing;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Prompt(PromptKind),
    Results,
    Reader,
}

/// What the prompt screen is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Sender,
    Keyword,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Sender => " Search by sender ",
            PromptKind::Keyword => " Search by keyword ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Sender => "Sender",
            PromptKind::Keyword => "Keyword",
        }
    }
}

/// Main menu entries, in display order
pub const MENU_ITEMS: [(char, &str); 4] = [
    ('1', "View messages by date"),
    ('2', "Search by sender"),
    ('3', "Search by keyword"),
    ('0', "Quit"),
];

/// Application state
pub struct App {
    pub mailbox: Mailbox,
    pub screen: Screen,
    pub menu_selected: usize,
    /// Text typed on the prompt screen
    pub input: String,
    pub results: Vec<RecordId>,
    pub results_title: String,
    pub listing: Listing,
    pub selected: usize,
    /// Digits typed on the results screen to open a message by id
    pub id_input: String,
    /// Message shown on the reader screen
    pub reading: Option<RecordId>,
    pub reader_scroll: u16,
    pub status_message: String,
    /// Whether the status message reports success
    pub status_ok: bool,
    pub use_color: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(mailbox: Mailbox, status_message: String, status_ok: bool, use_color: bool) -> Self {
        Self {
            mailbox,
            screen: Screen::Menu,
            menu_selected: 0,
            input: String::new(),
            results: Vec::new(),
            results_title: String::new(),
            listing: Listing::ByDate,
            selected: 0,
            id_input: String::new(),
            reading: None,
            reader_scroll: 0,
            status_message,
            status_ok,
            use_color,
            should_quit: false,
        }
    }

    /// Run the action bound to a menu key ('1', '2', '3' or '0')
    pub fn choose(&mut self, key: char) {
        match key {
            '1' => self.show_sorted(),
            '2' => self.open_prompt(PromptKind::Sender),
            '3' => self.open_prompt(PromptKind::Keyword),
            '0' => self.should_quit = true,
            _ => {}
        }
    }

    pub fn choose_selected(&mut self) {
        if let Some((key, _)) = MENU_ITEMS.get(self.menu_selected) {
            self.choose(*key);
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1).min(MENU_ITEMS.len() - 1);
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn show_sorted(&mut self) {
        let ids = self.mailbox.sorted_by_date().iter().map(|r| r.id).collect();
        self.show_results(" Messages by date ".to_string(), Listing::ByDate, ids);
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.input.clear();
        self.screen = Screen::Prompt(kind);
    }

    /// Run the query typed on the prompt screen
    pub fn submit_prompt(&mut self) {
        let Screen::Prompt(kind) = self.screen else {
            return;
        };

        let (ids, empty_message): (Vec<RecordId>, &str) = match kind {
            PromptKind::Sender => (
                self.mailbox.from_sender(&self.input).iter().map(|r| r.id).collect(),
                "No messages from that sender.",
            ),
            PromptKind::Keyword => (
                self.mailbox.search(&self.input).iter().map(|r| r.id).collect(),
                "No matches found.",
            ),
        };

        if ids.is_empty() {
            self.set_status(empty_message, false);
            self.back_to_menu();
            return;
        }

        let listing = match kind {
            PromptKind::Sender => Listing::BySender,
            PromptKind::Keyword => Listing::ByTerm,
        };
        let title = format!(" {}: {} ", kind.label(), self.input);
        self.show_results(title, listing, ids);
    }

    fn show_results(&mut self, title: String, listing: Listing, ids: Vec<RecordId>) {
        self.set_status(&format!("{} messages", ids.len()), true);
        self.results = ids;
        self.results_title = title;
        self.listing = listing;
        self.selected = 0;
        self.id_input.clear();
        self.screen = Screen::Results;
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1).min(self.results.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.results.len().saturating_sub(1);
    }

    /// Type a digit of a message id on the results screen.
    ///
    /// `0` on an empty id goes back to the menu.
    pub fn push_id_digit(&mut self, digit: char) {
        if digit == '0' && self.id_input.is_empty() {
            self.back_to_menu();
            return;
        }
        if digit.is_ascii_digit() {
            self.id_input.push(digit);
        }
    }

    /// Open the typed id if any, otherwise the highlighted result.
    ///
    /// An id that matches no message leaves the screen unchanged.
    pub fn open(&mut self) {
        if self.id_input.is_empty() {
            if let Some(&id) = self.results.get(self.selected) {
                self.open_record(id);
            }
            return;
        }

        let typed = std::mem::take(&mut self.id_input);
        match typed.parse::<RecordId>() {
            Ok(0) => self.back_to_menu(),
            Ok(id) if self.mailbox.get(id).is_some() => self.open_record(id),
            _ => self.set_status(&format!("No message with id {}.", typed), false),
        }
    }

    fn open_record(&mut self, id: RecordId) {
        self.reading = Some(id);
        self.reader_scroll = 0;
        self.screen = Screen::Reader;
    }

    pub fn close_reader(&mut self) {
        self.reading = None;
        self.screen = if self.results.is_empty() {
            Screen::Menu
        } else {
            Screen::Results
        };
    }

    pub fn scroll_down(&mut self) {
        self.reader_scroll = self.reader_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.reader_scroll = self.reader_scroll.saturating_sub(1);
    }

    pub fn back_to_menu(&mut self) {
        self.input.clear();
        self.id_input.clear();
        self.results.clear();
        self.selected = 0;
        self.reading = None;
        self.screen = Screen::Menu;
    }

    pub fn result_records(&self) -> Vec<&Record> {
        self.results
            .iter()
            .filter_map(|&id| self.mailbox.get(id))
            .collect()
    }

    pub fn reading_record(&self) -> Option<&Record> {
        self.reading.and_then(|id| self.mailbox.get(id))
    }

    fn set_status(&mut self, message: &str, ok: bool) {
        self.status_message = message.to_string();
        self.status_ok = ok;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::seed::load_seed_records;

    fn app() -> App {
        let mut mailbox = Mailbox::new();
        load_seed_records(&mut mailbox);
        App::new(mailbox, "ready".to_string(), true, false)
    }

    fn type_input(app: &mut App, text: &str) {
        app.input.push_str(text);
    }

    #[test]
    fn test_sorted_listing() {
        let mut app = app();
        app.choose('1');

        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.results, vec![3, 1, 2]);
        assert_eq!(app.listing, Listing::ByDate);
    }

    #[test]
    fn test_sender_search() {
        let mut app = app();
        app.choose('2');
        assert_eq!(app.screen, Screen::Prompt(PromptKind::Sender));

        type_input(&mut app, "ana@correo.com");
        app.submit_prompt();

        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.results, vec![2]);
    }

    #[test]
    fn test_unknown_sender_returns_to_menu() {
        let mut app = app();
        app.choose('2');
        type_input(&mut app, "nadie@correo.com");
        app.submit_prompt();

        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.status_ok);
        assert_eq!(app.status_message, "No messages from that sender.");
    }

    #[test]
    fn test_keyword_search_is_case_insensitive() {
        let mut app = app();
        app.choose('3');
        type_input(&mut app, "REUNION");
        app.submit_prompt();

        assert_eq!(app.results, vec![1]);
        assert_eq!(app.listing, Listing::ByTerm);
    }

    #[test]
    fn test_open_selected_and_close() {
        let mut app = app();
        app.choose('1');
        app.select_next();
        app.open();

        assert_eq!(app.screen, Screen::Reader);
        assert_eq!(app.reading_record().map(|r| r.id), Some(1));

        app.close_reader();
        assert_eq!(app.screen, Screen::Results);
    }

    #[test]
    fn test_open_by_typed_id() {
        let mut app = app();
        app.choose('1');
        app.push_id_digit('2');
        app.open();

        assert_eq!(app.reading, Some(2));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut app = app();
        app.choose('1');
        for digit in "999".chars() {
            app.push_id_digit(digit);
        }
        app.open();

        assert_eq!(app.screen, Screen::Results);
        assert!(app.reading.is_none());
        assert!(app.id_input.is_empty());
        assert!(!app.status_ok);
    }

    #[test]
    fn test_zero_goes_back() {
        let mut app = app();
        app.choose('1');
        app.push_id_digit('0');
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        app.menu_prev();
        assert_eq!(app.menu_selected, 0);

        for _ in 0..10 {
            app.menu_next();
        }
        assert_eq!(app.menu_selected, MENU_ITEMS.len() - 1);

        app.choose_selected();
        assert!(app.should_quit);
    }
}
