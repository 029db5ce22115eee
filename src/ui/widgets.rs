//! Reusable UI widgets for student-form
//!
//! - Status banner (success / aggregate error)
//! - Status bar with key hints
//! - Label/value summary lines

use crate::form::Banner;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Render the form banner centred on a single line
pub fn render_banner(frame: &mut Frame, banner: Banner, theme: &Theme, area: Rect) {
    let style = if banner.is_error() {
        theme.error()
    } else {
        theme.success()
    };
    let prefix = if banner.is_error() { "✗ " } else { "✓ " };

    let widget = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(banner.message(), style.add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// "Label: value" with a bold label, used by the summary panel
pub fn labeled_line<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.text().add_modifier(Modifier::BOLD)),
        Span::styled(value, theme.text()),
    ])
}

/// Rect of the given size centred in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 15, 60, 20));
        // Clamped to the available space
        assert_eq!(centered_rect(200, 10, area), Rect::new(0, 20, 100, 10));
    }
}
