//! Testimonial carousel state

use std::time::{Duration, Instant};
use thiserror::Error;

/// Interval between automatic advances
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

/// Errors raised by carousel operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,
    #[error("slide index {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
    #[error("auto-advance interval must be longer than zero")]
    ZeroInterval,
}

/// Events the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Next,
    Previous,
    GoTo(usize),
    /// Timer tick carrying the current time
    Tick(Instant),
}

/// One indicator dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Render directive produced by every transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    /// Track translation as a percentage of the track width
    pub offset_percent: i32,
    pub indicators: Vec<Indicator>,
}

impl CarouselView {
    /// Index of the active indicator
    pub fn active_index(&self) -> Option<usize> {
        self.indicators.iter().find(|i| i.active).map(|i| i.index)
    }
}

/// Recurring timer that drives automatic advances.
///
/// Manual navigation never touches it, so a user click right before a due
/// tick is followed by an automatic advance.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    next_due: Instant,
}

impl AutoAdvance {
    /// `interval` must be non-zero
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true once per elapsed interval
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        // Missed ticks coalesce into one; the next deadline stays on the
        // original schedule
        let behind = (now - self.next_due).as_nanos() % self.interval.as_nanos();
        let behind = Duration::from_nanos(u64::try_from(behind).unwrap_or(u64::MAX));
        self.next_due = now + (self.interval - behind);
        true
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Carousel over a fixed sequence of slides
#[derive(Debug, Clone)]
pub struct Carousel<S> {
    slides: Vec<S>,
    cursor: usize,
    auto_advance: AutoAdvance,
}

impl<S> Carousel<S> {
    /// Create a carousel positioned on the first slide
    pub fn new(slides: Vec<S>, now: Instant) -> Result<Self, CarouselError> {
        Self::with_interval(slides, AUTO_ADVANCE_INTERVAL, now)
    }

    pub fn with_interval(
        slides: Vec<S>,
        interval: Duration,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            slides,
            cursor: 0,
            auto_advance: AutoAdvance::new(interval, now),
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &S {
        &self.slides[self.cursor]
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Apply an event and return the view to draw
    pub fn handle(&mut self, event: CarouselEvent) -> Result<Option<CarouselView>, CarouselError> {
        match event {
            CarouselEvent::Next => Ok(Some(self.next())),
            CarouselEvent::Previous => Ok(Some(self.previous())),
            CarouselEvent::GoTo(index) => self.go_to(index).map(Some),
            CarouselEvent::Tick(now) => Ok(self.tick(now)),
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<CarouselView, CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.cursor = index;
        Ok(self.render())
    }

    pub fn next(&mut self) -> CarouselView {
        let len = self.slides.len();
        self.cursor = (self.cursor + 1) % len;
        self.render()
    }

    pub fn previous(&mut self) -> CarouselView {
        let len = self.slides.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.render()
    }

    /// Advance when the auto-advance timer is due
    pub fn tick(&mut self, now: Instant) -> Option<CarouselView> {
        if self.auto_advance.fire(now) {
            tracing::trace!(cursor = self.cursor, "carousel auto-advance");
            Some(self.next())
        } else {
            None
        }
    }

    pub fn next_due(&self) -> Instant {
        self.auto_advance.next_due()
    }

    /// Map the cursor to a track offset and indicator flags
    pub fn render(&self) -> CarouselView {
        CarouselView {
            offset_percent: -(self.cursor as i32) * 100,
            indicators: (0..self.slides.len())
                .map(|index| Indicator {
                    index,
                    active: index == self.cursor,
                })
                .collect(),
        }
    }
}
