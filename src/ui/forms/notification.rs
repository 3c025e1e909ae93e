//! Submission outcome notification, sliding in from the right edge

use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const MAX_WIDTH: u16 = 48;
const HEIGHT: u16 = 5;

/// Draw `notification` in the top-right corner of `area`
pub fn draw(frame: &mut Frame, area: Rect, notification: &Notification, now: Instant) {
    let width = MAX_WIDTH.min(area.width);
    let Some(rect) = slide_rect(area, width, notification.presence(now)) else {
        return;
    };

    let (color, icon, title) = match notification.kind {
        NotificationKind::Success => (Color::Green, "✓", " Success "),
        NotificationKind::Error => (Color::Red, "✗", " Error "),
    };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(notification.message.as_str()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

/// Visible part of the box when `presence` of it has slid in from the right
fn slide_rect(area: Rect, width: u16, presence: f32) -> Option<Rect> {
    let shown = (f32::from(width) * presence.clamp(0.0, 1.0)).round() as u16;
    if shown == 0 {
        return None;
    }
    Some(Rect {
        x: area.right().saturating_sub(shown),
        y: area.y,
        width: shown,
        height: HEIGHT.min(area.height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_sliding_in() {
        assert_eq!(slide_rect(Rect::new(0, 0, 100, 20), 40, 0.0), None);
    }

    #[test]
    fn test_fully_shown_hugs_right_edge() {
        let rect = slide_rect(Rect::new(10, 2, 100, 20), 40, 1.0).unwrap();
        assert_eq!(rect, Rect::new(70, 2, 40, HEIGHT));
    }

    #[test]
    fn test_partial_slide() {
        let rect = slide_rect(Rect::new(0, 0, 100, 20), 40, 0.5).unwrap();
        assert_eq!(rect.width, 20);
        assert_eq!(rect.right(), 100);
    }
}
