//! CSV import prompt rendering

use super::field_renderer::draw_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the centered import panel with its path input
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(8).clamp(30, 70);
    let height = 8.min(area.height);
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(" Import from CSV ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Path input
            Constraint::Length(1), // Note
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    draw_field(
        frame,
        chunks[0],
        "File path",
        &app.state.import_path,
        true,
        false,
        None,
    );

    let note = Paragraph::new(Line::from(Span::styled(
        " Only the first data row is applied to the form.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(note, chunks[1]);

    let hint = Paragraph::new(Line::from(vec![
        Span::raw(" Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to import or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to go back"),
    ]));
    frame.render_widget(hint, chunks[2]);
}
