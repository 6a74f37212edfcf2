use crate::flow::REVIEW_LINES_PER_RESULT;
use crate::models::{DetailedResult, TestResult};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_results(f: &mut Frame, area: Rect, result: &TestResult, scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let score = Paragraph::new(vec![
        Line::from(Span::styled(
            "Quiz Complete!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Your Score: {}", result.score_line())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, chunks[0]);

    let mut review = Text::default();
    for item in &result.detailed_results {
        for line in review_lines(item) {
            review.push_line(line);
        }
    }

    let review = Paragraph::new(review)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Review Your Answers"),
        );
    f.render_widget(review, chunks[1]);
}

fn review_lines(item: &DetailedResult) -> [Line<'static>; REVIEW_LINES_PER_RESULT] {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let (marker, color) = if item.is_correct {
        ("✓ correct", Color::Green)
    } else {
        ("✗ incorrect", Color::Red)
    };
    [
        Line::from(Span::styled(
            marker,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Question: ", bold),
            Span::from(item.question.clone()),
        ]),
        Line::from(vec![
            Span::styled("Your Answer: ", bold),
            Span::styled(item.user_answer_display(), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("Correct Answer: ", bold),
            Span::from(item.correct_answers.join(", ")),
        ]),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, DetailedResult};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(result: &TestResult) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| draw_results(f, f.area(), result, 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_review_rows() {
        let result = TestResult {
            score: 1,
            total_questions: 2,
            percentage: 50.0,
            detailed_results: vec![
                DetailedResult {
                    question: "Pick rivers".to_string(),
                    user_answer: Some(Answer::Multiple(vec!["Nile".into(), "Amazon".into()])),
                    correct_answers: vec!["Nile".into(), "Amazon".into()],
                    is_correct: true,
                },
                DetailedResult {
                    question: "Capital of Peru?".to_string(),
                    user_answer: None,
                    correct_answers: vec!["Lima".into()],
                    is_correct: false,
                },
            ],
        };

        let text = render(&result);
        assert!(text.contains("Your Score: 1 / 2 (50%)"));
        assert!(text.contains("Your Answer: Nile, Amazon"));
        assert!(text.contains("Your Answer: No answer"));
        assert!(text.contains("Correct Answer: Lima"));
        assert_eq!(text.matches("✓ correct").count(), 1);
        assert_eq!(text.matches("✗ incorrect").count(), 1);
    }
}
