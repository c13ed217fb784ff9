//! Modal dialog rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render an error dialog overlay centered on the screen.
///
/// Input is swallowed by the controller while a dialog is up, so the hint
/// line names the only two keys that do anything.
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let screen = frame.area();
    let width = screen.width.saturating_sub(4).min(60);
    if width < 12 || screen.height < 6 {
        return;
    }

    let inner_width = width.saturating_sub(4) as usize;
    let wrapped = wrap_text(message, inner_width);
    let height = (wrapped.len() as u16 + 4).min(screen.height);

    let dialog_area = Rect {
        x: screen.width.saturating_sub(width) / 2,
        y: screen.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut lines: Vec<Line> = wrapped
        .into_iter()
        .map(|text| Line::from(format!(" {text}")))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]));

    let block = Block::default()
        .title(" Error ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}

/// Break text into lines no wider than `width` columns, respecting
/// embedded newlines
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_splits_on_width() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_keeps_embedded_newlines() {
        let lines = wrap_text("first\nsecond line", 20);
        assert_eq!(lines, vec!["first", "second line"]);
    }

    #[test]
    fn test_wrap_text_never_returns_nothing() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
