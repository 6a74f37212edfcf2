use crate::flow::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn draw_nav(f: &mut Frame, area: Rect, active: Tab) {
    let selected = match active {
        Tab::Quiz => 0,
        Tab::Statistics => 1,
    };
    let tabs = Tabs::new(vec![Line::from("Quiz [F1]"), Line::from("Statistics [F2]")])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quiz Client v0.1.0"),
        );
    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn highlighted_tab(active: Tab) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|f| draw_nav(f, f.area(), active))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .filter(|cell| cell.fg == Color::Yellow)
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_active_tab_marker_follows_tab() {
        let quiz = highlighted_tab(Tab::Quiz);
        assert!(quiz.contains("Quiz [F1]"));
        assert!(!quiz.contains("Statistics"));

        let stats = highlighted_tab(Tab::Statistics);
        assert!(stats.contains("Statistics [F2]"));
        assert!(!stats.contains("Quiz"));
    }
}
