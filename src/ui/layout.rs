//! Layout utilities and the status bar

use crate::app::App;
use crate::platform::{IMPORT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{SaveStatus, View};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything above the one-row status bar
pub fn content_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Draw the status bar: save indicator, view hints, quit hint
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Save status indicator
    let (dot_color, label) = match app.state.save_status {
        SaveStatus::Saved => (Color::Green, SaveStatus::Saved.label()),
        SaveStatus::Dirty => (Color::Yellow, SaveStatus::Dirty.label()),
    };
    spans.push(Span::styled(" ● ", Style::default().fg(dot_color)));
    spans.push(Span::styled(label, Style::default().fg(dot_color)));
    spans.push(Span::raw(" | "));

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Form => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:submit  {IMPORT_SHORTCUT}:import CSV  Esc:quit"
        ),
        View::ImportCsv => "Enter:import  Esc:back".to_string(),
    }
}
