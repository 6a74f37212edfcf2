use crate::session::{AnswerInput, QuizSession};
use crate::ui::layout::calculate_question_chunks;
use crate::utils::{cursor_column, quiz_display_name};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_question(f: &mut Frame, area: Rect, session: &QuizSession) {
    let layout = calculate_question_chunks(area);
    let question = session.current();

    let progress = format!(
        "Question {} of {} - {}",
        session.current_index() + 1,
        session.total(),
        quiz_display_name(session.quiz_file())
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_text = Paragraph::new(Text::from(question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let next_label = if session.is_last() {
        "Finish Test"
    } else {
        "Next Question"
    };
    let answer_title = format!("Your Answer (Enter: {})", next_label);

    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let content = match &session.input {
        AnswerInput::Choice { cursor, selected } => option_lines(
            &question.answers,
            *cursor,
            |i| if *selected == Some(i) { "(•)" } else { "( )" },
            highlight,
        ),
        AnswerInput::Checkboxes { cursor, checked } => option_lines(
            &question.answers,
            *cursor,
            |i| {
                if checked.get(i).copied().unwrap_or(false) {
                    "[x]"
                } else {
                    "[ ]"
                }
            },
            highlight,
        ),
        AnswerInput::Text { buffer, .. } => {
            if buffer.is_empty() {
                Text::from(Span::styled(
                    "Type your answer here...",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Text::from(buffer.as_str())
            }
        }
    };

    let answer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(answer_title),
    );
    f.render_widget(answer, layout.answer_area);

    if let AnswerInput::Text { buffer, cursor } = &session.input {
        let inner_width = layout.answer_area.width.saturating_sub(2);
        let column = (cursor_column(buffer, *cursor) as u16).min(inner_width.saturating_sub(1));
        f.set_cursor_position((layout.answer_area.x + 1 + column, layout.answer_area.y + 1));
    }
}

fn option_lines<'a>(
    options: &'a [String],
    cursor: usize,
    mark: impl Fn(usize) -> &'static str,
    highlight: Style,
) -> Text<'a> {
    let mut text = Text::default();
    for (i, option) in options.iter().enumerate() {
        let pointer = if i == cursor { "> " } else { "  " };
        let line = Line::from(format!("{}{} {}", pointer, mark(i), option));
        text.push_line(if i == cursor {
            line.style(highlight)
        } else {
            line
        });
    }
    text
}
