use crate::flow::QuizPicker;
use crate::utils::{quiz_display_name, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const QUIZ_PLACEHOLDER: &str = "-- Please choose a quiz --";

pub fn draw_quiz_selection(f: &mut Frame, area: Rect, picker: &QuizPicker, confirm_enabled: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut items = vec![ListItem::new(QUIZ_PLACEHOLDER).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )];
    // Borders and the highlight symbol take four columns.
    let name_width = chunks[0].width.saturating_sub(4) as usize;
    items.extend(
        picker
            .quizzes
            .iter()
            .map(|file| ListItem::new(truncate_string(quiz_display_name(file), name_width))),
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    "Select a Quiz",
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
    state.select(Some(picker.selected.map_or(0, |i| i + 1)));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let button_style = if confirm_enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new("[ Select ]")
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[1]);
}
