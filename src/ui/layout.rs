//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar: last status message, or key hints
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": submit  "),
            Span::styled(
                crate::platform::COPY_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": copy last  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ])
    };

    let paragraph = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, bar);
}
