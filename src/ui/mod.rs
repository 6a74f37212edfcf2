mod alert;
mod categories;
pub mod layout;
mod menu;
mod nav;
mod quiz;
mod stats;
mod summary;

use crate::flow::{Pending, QuizFlow, Screen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub use alert::draw_alert;
pub use categories::{draw_category_selection, draw_no_questions};
pub use layout::{calculate_question_chunks, calculate_screen_chunks, centered_rect};
pub use menu::draw_quiz_selection;
pub use nav::draw_nav;
pub use quiz::draw_question;
pub use stats::draw_statistics;
pub use summary::draw_results;

/// Renders the whole application for the current controller state.
pub fn draw(f: &mut Frame, flow: &QuizFlow) {
    let layout = calculate_screen_chunks(f.area());
    draw_nav(f, layout.nav_area, flow.tab());

    let area = layout.content_area;
    match flow.screen() {
        Screen::Loading(pending) => draw_message(f, area, loading_title(pending), "Loading..."),
        Screen::QuizSelection(picker) => {
            draw_quiz_selection(f, area, picker, flow.confirm_enabled())
        }
        Screen::NoQuizzes => draw_message(f, area, "Select a Quiz", "No quizzes found."),
        Screen::CategorySelection(picker) => draw_category_selection(f, area, picker),
        Screen::CategoriesFailed => draw_message(
            f,
            area,
            "Select Categories to Quiz On",
            "Failed to load categories. Please try again later.",
        ),
        Screen::NoQuestions { .. } => draw_no_questions(f, area),
        Screen::Question(session) => draw_question(f, area, session),
        Screen::Results { result, scroll } => draw_results(f, area, result, *scroll),
        Screen::Statistics(view) => draw_statistics(f, area, view),
    }

    draw_help(f, layout.help_area, &help_hints(flow.screen()));

    if let Some(message) = flow.alert() {
        draw_alert(f, message);
    }
}

fn loading_title(pending: &Pending) -> &'static str {
    match pending {
        Pending::Quizzes => "Select a Quiz",
        Pending::Categories { .. } => "Select Categories to Quiz On",
        Pending::Questions { .. } => "Starting Quiz",
        Pending::Submission { .. } => "Submitting Test",
        Pending::Statistics => "Quiz Statistics",
    }
}

fn help_hints(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut hints = match screen {
        Screen::QuizSelection(_) => vec![("↑/↓", "Choose"), ("Enter", "Select")],
        Screen::CategorySelection(_) => vec![
            ("↑/↓", "Navigate"),
            ("Space", "Toggle"),
            ("Enter", "Start Quiz"),
        ],
        Screen::NoQuestions { .. } => vec![("Enter", "Go Back")],
        Screen::Question(session) => {
            let next = if session.is_last() {
                "Finish Test"
            } else {
                "Next Question"
            };
            match session.input {
                crate::session::AnswerInput::Text { .. } => {
                    vec![("←/→", "Move"), ("Enter", next)]
                }
                _ => vec![("↑/↓", "Navigate"), ("Space", "Select"), ("Enter", next)],
            }
        }
        Screen::Results { .. } => vec![("↑/↓", "Scroll")],
        Screen::Statistics(_) => vec![("↑/↓", "Scroll"), ("Tab", "Switch Table")],
        _ => vec![],
    };
    hints.extend([("F1", "Quiz"), ("F2", "Statistics"), ("Ctrl+C", "Quit")]);
    hints
}

/// Cyan bold, shared by screen titles and key names in the help bar.
fn accent_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), accent_style()));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_message(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), accent_style())),
        );
    f.render_widget(paragraph, area);
}
