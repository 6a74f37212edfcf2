use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max_width` terminal columns, ending in "..." when shortened.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// "geo.csv" -> "geo"
pub fn quiz_display_name(file: &str) -> &str {
    file.strip_suffix(".csv").unwrap_or(file)
}

/// Splits `width` cells into (correct, incorrect) proportional to `percentage`.
pub fn stat_bar_widths(percentage: f64, width: u16) -> (u16, u16) {
    let pct = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let correct = ((pct / 100.0) * width as f64).round() as u16;
    let correct = correct.min(width);
    (correct, width - correct)
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Terminal column of the cursor after the first `cursor` chars of `text`.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}
