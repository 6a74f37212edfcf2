use crate::flow::CategoryPicker;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_category_selection(f: &mut Frame, area: Rect, picker: &CategoryPicker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = picker
        .categories
        .iter()
        .map(|(label, checked)| {
            let mark = if *checked { "[x]" } else { "[ ]" };
            ListItem::new(format!("{} {}", mark, label))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    "Select Categories to Quiz On",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !picker.categories.is_empty() {
        state.select(Some(picker.cursor));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    let button = Paragraph::new("[ Start Quiz ]")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[1]);
}

pub fn draw_no_questions(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("No questions found for the selected categories."),
        Line::from(""),
        Line::from(Span::styled(
            "[ Go Back ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Start Quiz"));
    f.render_widget(paragraph, area);
}
