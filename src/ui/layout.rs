//! Layout components (header, form body, status bar)

use crate::app::App;
use crate::state::FocusTarget;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Title shown above the form
pub const FORM_TITLE: &str = "Crm Dynamic Form";

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the form title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        FORM_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw key hints for the focused widget
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);

    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
    ];

    let widget_hint = match app.focus.current() {
        FocusTarget::Text(field) if field.is_multiline() => Some(("Enter", "new line")),
        FocusTarget::Gender => Some(("←/→", "choose")),
        FocusTarget::Education => Some(("←/→", "change")),
        FocusTarget::Skills => Some(("Space", "check")),
        FocusTarget::Submit => Some(("Enter", "submit")),
        FocusTarget::Text(_) => None,
    };
    if let Some((keys, action)) = widget_hint {
        spans.push(Span::styled(keys, key_style));
        spans.push(Span::raw(format!(": {action}  ")));
    }

    spans.push(Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style));
    spans.push(Span::raw(": submit  "));
    spans.push(Span::styled("Esc", key_style));
    spans.push(Span::raw(if app.toast.is_some() {
        ": dismiss"
    } else {
        ": quit"
    }));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
