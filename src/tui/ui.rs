use crate::output::Listing;
use crate::tui::app::{App, MENU_ITEMS, PromptKind, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen body
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    match app.screen {
        Screen::Menu => draw_menu(f, app, chunks[0]),
        Screen::Prompt(_) => draw_prompt(f, app, chunks[0]),
        Screen::Results => draw_results(f, app, chunks[0]),
        Screen::Reader => draw_reader(f, app, chunks[0]),
    }
    draw_hints(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

/// Foreground style, or plain when colors are off
fn fg(app: &App, color: Color) -> Style {
    if app.use_color {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|(key, label)| {
            ListItem::new(Line::from(vec![
                Span::styled(key.to_string(), fg(app, Color::Green)),
                Span::raw(". "),
                Span::raw(*label),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Main menu ", title_style())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.menu_selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_prompt(f: &mut Frame, app: &App, area: Rect) {
    let Screen::Prompt(kind) = app.screen else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(app.input.as_str())
        .style(fg(app, Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(kind.title(), title_style())),
        );
    f.render_widget(input, chunks[0]);
    f.set_cursor_position((
        chunks[0].x + app.input.chars().count() as u16 + 1,
        chunks[0].y + 1,
    ));

    // Known senders as a hint
    if kind == PromptKind::Sender {
        let senders: Vec<ListItem> = app
            .mailbox
            .senders()
            .into_iter()
            .map(|s| ListItem::new(Span::styled(s.to_string(), fg(app, Color::DarkGray))))
            .collect();
        let list = List::new(senders)
            .block(Block::default().borders(Borders::ALL).title(" Known senders "));
        f.render_widget(list, chunks[1]);
    }
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = app
        .result_records()
        .into_iter()
        .map(|record| {
            let mut spans: Vec<Span> = vec![Span::styled(record.id.to_string(), fg(app, Color::Green))];
            let columns: Vec<(&str, Color)> = match app.listing {
                Listing::ByDate => vec![
                    (record.sender.as_str(), Color::White),
                    (record.subject.as_str(), Color::Red),
                ],
                Listing::BySender => vec![(record.subject.as_str(), Color::White)],
                Listing::ByTerm => vec![
                    (record.subject.as_str(), Color::Red),
                    (record.sender.as_str(), Color::White),
                ],
            };
            for (value, color) in columns {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(value, fg(app, color)));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(record.date.as_str(), fg(app, Color::White)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(app.results_title.as_str(), title_style())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let id_input = Paragraph::new(app.id_input.as_str())
        .style(fg(app, Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Message id (Enter opens, 0 returns) "),
        );
    f.render_widget(id_input, chunks[1]);
}

fn draw_reader(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.reading_record() {
        Some(record) => {
            let label = fg(app, Color::Green);
            let mut lines = vec![
                Line::from(vec![Span::styled("ID: ", label), Span::raw(record.id.to_string())]),
                Line::from(vec![
                    Span::styled("Sender: ", label),
                    Span::styled(record.sender.as_str(), fg(app, Color::White)),
                ]),
                Line::from(vec![
                    Span::styled("Subject: ", label),
                    Span::styled(record.subject.as_str(), fg(app, Color::Red)),
                ]),
                Line::from(vec![
                    Span::styled("Date: ", label),
                    Span::styled(record.date.as_str(), fg(app, Color::White)),
                ]),
                Line::default(),
            ];
            lines.extend(record.body.lines().map(Line::raw));
            Text::from(lines)
        }
        None => Text::raw("No message selected"),
    };

    let reader = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Reading message ", title_style())),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.reader_scroll, 0));

    f.render_widget(reader, area);
}

fn draw_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Menu => "1-3: choose  ↑/↓ Enter: select  0/Esc: quit",
        Screen::Prompt(_) => "Enter: search  Esc: back",
        Screen::Results => "↑/↓ j/k g/G: move  digits: id  Enter: open  Esc: back",
        Screen::Reader => "↑/↓: scroll  Enter/Esc: back",
    };
    f.render_widget(Paragraph::new(hints).style(fg(app, Color::DarkGray)), area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.status_ok { Color::Green } else { Color::Red };
    let status = Paragraph::new(app.status_message.as_str()).style(fg(app, color));

    f.render_widget(status, area);
}
