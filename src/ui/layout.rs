use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub nav_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

pub struct QuestionLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
}

pub struct StatisticsLayout {
    pub intro_area: Rect,
    pub questions_area: Rect,
    pub categories_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        nav_area: chunks[0],
        content_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_question_chunks(area: Rect) -> QuestionLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Percentage(60),
        ])
        .split(area);

    QuestionLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
    }
}

pub fn calculate_statistics_chunks(area: Rect) -> StatisticsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(55),
            Constraint::Min(4),
        ])
        .split(area);

    StatisticsLayout {
        intro_area: chunks[0],
        questions_area: chunks[1],
        categories_area: chunks[2],
    }
}

/// A `height`-row box spanning `percent_x` of the width, centred in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_screen_chunks(area);

        // Margin 1 leaves 98 rows: 3 + 92 + 3.
        assert_eq!(layout.nav_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }

    #[test]
    fn test_question_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_question_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert!(layout.question_area.height >= 3);
        assert!(layout.answer_area.height > 0);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 7, area);

        assert_eq!(popup.height, 7);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
    }
}
