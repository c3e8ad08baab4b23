//! Toast notification overlay

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a toast anchored to the bottom-left corner, above the status bar
pub fn render_toast(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    let toast_area = Rect {
        x: area.x + 1.min(area.width.saturating_sub(width)),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::White),
    )))
    .block(block);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}
