//! Toast notification overlay

use super::components::wrap_text;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 40;

/// Stack live toasts in the top-right corner, newest at the bottom
pub fn draw_toasts(frame: &mut Frame, app: &App) {
    if app.state.toasts.is_empty() {
        return;
    }

    let screen = frame.area();
    let width = TOAST_WIDTH.min(screen.width.saturating_sub(2));
    if width < 12 {
        return;
    }
    let x = screen.width.saturating_sub(width + 1);
    let inner_width = width.saturating_sub(4) as usize;

    let mut y = 1;
    for toast in app.state.toasts.iter() {
        let body = wrap_text(&toast.description, inner_width);
        let height = body.len() as u16 + 2;
        if y + height >= screen.height {
            break;
        }

        let area = Rect {
            x,
            y,
            width,
            height,
        };
        frame.render_widget(Clear, area);

        let lines: Vec<Line> = body
            .into_iter()
            .map(|text| Line::from(format!(" {text}")))
            .collect();
        let block = Block::default()
            .title(format!(" {} ", toast.title))
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        frame.render_widget(Paragraph::new(lines).block(block), area);
        y += height;
    }
}
