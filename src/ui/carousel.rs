//! Testimonial carousel rendering

use crate::content::Testimonial;
use crate::state::{Carousel, CarouselView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Draw the slide the track offset points at, with its indicator dots
pub fn draw(buf: &mut Buffer, area: Rect, carousel: &Carousel<Testimonial>) {
    let view = carousel.render();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Slide
            Constraint::Length(1), // Indicators
        ])
        .split(area);

    if let Some(slide) = carousel.slides().get(visible_slide(&view)) {
        draw_slide(buf, chunks[0], slide);
    }
    draw_indicators(buf, chunks[1], &view);
}

/// Slide under the viewport for a track shifted by `offset_percent`
fn visible_slide(view: &CarouselView) -> usize {
    (-view.offset_percent / 100).max(0) as usize
}

fn draw_slide(buf: &mut Buffer, area: Rect, slide: &Testimonial) {
    let lines = vec![
        Line::from(Span::styled(
            format!("“{}”", slide.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                slide.author,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(", {}", slide.role), Style::default().fg(Color::Gray)),
        ]),
    ];

    let inset = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" ◂ h   l ▸ ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(inset, buf);
}

fn draw_indicators(buf: &mut Buffer, area: Rect, view: &CarouselView) {
    let spans: Vec<Span> = view
        .indicators
        .iter()
        .flat_map(|indicator| {
            let dot = if indicator.active {
                Span::styled("●", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○", Style::default().fg(Color::DarkGray))
            };
            [dot, Span::raw(" ")]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;
    use std::time::Instant;

    #[test]
    fn test_visible_slide_follows_cursor() {
        let mut carousel = Carousel::new(TESTIMONIALS.to_vec(), Instant::now()).unwrap();
        assert_eq!(visible_slide(&carousel.render()), 0);
        carousel.previous();
        assert_eq!(visible_slide(&carousel.render()), TESTIMONIALS.len() - 1);
    }

    #[test]
    fn test_draw_shows_current_author() {
        let mut carousel = Carousel::new(TESTIMONIALS.to_vec(), Instant::now()).unwrap();
        carousel.next();
        let area = Rect::new(0, 0, 100, 9);
        let mut buf = Buffer::empty(area);
        draw(&mut buf, area, &carousel);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter_map(|pos| buf.cell(pos).map(|c| c.symbol().to_string()))
            .collect();
        assert!(text.contains(TESTIMONIALS[1].author));
        assert!(!text.contains(TESTIMONIALS[0].author));
    }
}
