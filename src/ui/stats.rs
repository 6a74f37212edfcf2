use crate::flow::{StatsFocus, StatsView};
use crate::ui::layout::calculate_statistics_chunks;
use crate::utils::{format_percentage, stat_bar_widths};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const BAR_WIDTH: u16 = 20;

fn percentage_cell(percentage: f64) -> Cell<'static> {
    let (correct, incorrect) = stat_bar_widths(percentage, BAR_WIDTH);
    Cell::from(Line::from(vec![
        Span::styled(
            "█".repeat(correct as usize),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            "█".repeat(incorrect as usize),
            Style::default().fg(Color::Red),
        ),
        Span::from(format!(" {}", format_percentage(percentage))),
    ]))
}

fn header(labels: &[&'static str]) -> Row<'static> {
    Row::new(labels.iter().map(|l| Cell::from(*l))).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn table_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

pub fn draw_statistics(f: &mut Frame, area: Rect, view: &StatsView) {
    let layout = calculate_statistics_chunks(area);
    let stats = &view.stats;

    let intro = Paragraph::new("Overall performance on all questions and categories.").block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            "Quiz Statistics",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    );
    f.render_widget(intro, layout.intro_area);

    let question_rows = stats
        .ranked_questions
        .iter()
        .skip(view.question_offset)
        .map(|item| {
            Row::new(vec![
                Cell::from(item.question.clone()),
                Cell::from(item.categories.join(", ")),
                percentage_cell(item.correct_percentage),
            ])
        });
    let questions = Table::new(
        question_rows,
        [
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(BAR_WIDTH + 8),
        ],
    )
    .header(header(&["Question", "Category", "Correct %"]))
    .block(table_block("Questions Needing Review", view.focus == StatsFocus::Questions));
    f.render_widget(questions, layout.questions_area);

    let category_rows = stats
        .category_performance
        .iter()
        .skip(view.category_offset)
        .map(|item| {
            Row::new(vec![
                Cell::from(item.category.clone()),
                percentage_cell(item.correct_percentage),
            ])
        });
    let categories = Table::new(
        category_rows,
        [Constraint::Percentage(50), Constraint::Length(BAR_WIDTH + 8)],
    )
    .header(header(&["Category", "Correct %"]))
    .block(table_block("Category Performance", view.focus == StatsFocus::Categories));
    f.render_widget(categories, layout.categories_area);
}

#[cfg(test)]
mod tests {
    use crate::api::ApiResponse;
    use crate::flow::QuizFlow;
    use crate::models::{CategoryPerformance, RankedQuestion, Statistics};
    use crate::ui::testing::render_text;
    use std::collections::HashSet;

    fn sample() -> Statistics {
        Statistics {
            ranked_questions: vec![
                RankedQuestion {
                    question: "Capital of Peru?".to_string(),
                    correct_percentage: 100.0 / 3.0,
                    categories: vec!["Capitals".to_string(), "South America".to_string()],
                    incorrect_count: 2,
                },
                RankedQuestion {
                    question: "Longest river?".to_string(),
                    correct_percentage: 75.0,
                    categories: vec!["Rivers".to_string()],
                    incorrect_count: 1,
                },
            ],
            category_performance: vec![CategoryPerformance {
                category: "Capitals".to_string(),
                correct_percentage: 50.0,
            }],
        }
    }

    #[test]
    fn test_statistics_tables() {
        let mut flow = QuizFlow::new();
        flow.show_statistics();
        flow.handle_response(ApiResponse::Statistics(Some(sample())));

        let text = render_text(&flow);
        assert!(text.contains("Questions Needing Review"));
        assert!(text.contains("Category Performance"));
        assert!(text.contains("Capitals, South America"));
        assert!(text.contains("33.3%"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("50.0%"));
    }

    #[test]
    fn test_bar_spans_full_width() {
        let mut flow = QuizFlow::new();
        flow.show_statistics();
        flow.handle_response(ApiResponse::Statistics(Some(sample())));

        let text = render_text(&flow);
        let row = text
            .lines()
            .find(|line| line.contains("Longest river?"))
            .unwrap();
        // Correct and incorrect segments together span the bar.
        assert_eq!(row.matches('█').count(), 20);
        assert!(row.contains("75.0%"));
    }

    #[test]
    fn test_every_category_row_is_reachable() {
        let stats = Statistics {
            ranked_questions: vec![],
            category_performance: (0..20)
                .map(|i| CategoryPerformance {
                    category: format!("Region-{:02}", i),
                    correct_percentage: 50.0,
                })
                .collect(),
        };
        let mut flow = QuizFlow::new();
        flow.show_statistics();
        flow.handle_response(ApiResponse::Statistics(Some(stats)));
        flow.switch_stats_table();

        let mut seen = HashSet::new();
        for _ in 0..30 {
            let text = render_text(&flow);
            seen.extend((0..20).filter(|i| text.contains(&format!("Region-{:02}", i))));
            flow.scroll(1);
        }
        assert_eq!(seen.len(), 20);
        // Scrolling stops with the last category still on screen.
        assert!(render_text(&flow).contains("Region-19"));
    }

    #[test]
    fn test_scroll_skips_ranked_rows() {
        let mut flow = QuizFlow::new();
        flow.show_statistics();
        flow.handle_response(ApiResponse::Statistics(Some(sample())));
        flow.scroll(1);

        let text = render_text(&flow);
        assert!(!text.contains("Capital of Peru?"));
        assert!(text.contains("Longest river?"));
    }
}
