//! Scroll-driven reveal and smooth scrolling

use std::time::{Duration, Instant};

/// Share of an element that must be on screen before it reveals
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// The viewport bottom is pulled up by this many rows (-50px)
pub const REVEAL_BOTTOM_MARGIN: i32 = -2;

/// Vertical extent in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: i32,
    pub height: i32,
}

impl Span {
    pub fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Fraction of `element` inside `viewport` once its bottom edge moves by `bottom_margin`
pub fn intersection_ratio(element: Span, viewport: Span, bottom_margin: i32) -> f32 {
    if element.height <= 0 {
        return 0.0;
    }
    let root_bottom = viewport.bottom() + bottom_margin;
    let top = element.top.max(viewport.top);
    let bottom = element.bottom().min(root_bottom);
    let visible = (bottom - top).max(0);
    visible as f32 / element.height as f32
}

/// Reveals elements once and keeps them revealed
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Check element positions against the viewport; returns newly revealed indices
    pub fn observe(&mut self, elements: &[Span], viewport: Span) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            let Some(revealed) = self.revealed.get_mut(index) else {
                break;
            };
            if *revealed {
                continue;
            }
            let ratio = intersection_ratio(*element, viewport, REVEAL_BOTTOM_MARGIN);
            // Any intersection at or past the threshold counts
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                *revealed = true;
                newly.push(index);
            }
        }
        newly
    }
}

/// Eased scroll towards an anchor target
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    from: u16,
    to: u16,
    started: Instant,
}

impl SmoothScroll {
    pub const DURATION: Duration = Duration::from_millis(400);

    pub fn new(from: u16, to: u16, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
        }
    }

    /// Offset at `now`
    pub fn position(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = simple_easing::cubic_out(progress);
        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round() as u16
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Self::DURATION
    }
}
