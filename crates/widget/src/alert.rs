use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Render an inline configuration or runtime alert.
///
/// Alerts share one visual treatment so designers recognize them regardless
/// of origin; they occupy a single line and truncate to the available width.
pub fn render_alert(frame: &mut Frame<'_>, area: Rect, message: &str) {
    if area.width == 0 || area.height == 0 || message.is_empty() {
        return;
    }
    let style = Style::default().fg(Color::Red);
    let line = Line::from(Span::styled(message.to_string(), style));
    frame.render_widget(Paragraph::new(line), area);
}
