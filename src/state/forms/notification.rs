//! Submission outcome notifications

use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Lifecycle of a displayed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
    pub phase: NotificationPhase,
}

impl Notification {
    /// Slide-in and slide-out duration
    pub const ANIMATION: Duration = Duration::from_millis(300);
    /// Time on screen before the exit animation starts
    pub const DISPLAY: Duration = Duration::from_millis(5000);

    pub fn new(kind: NotificationKind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            shown_at: now,
            phase: NotificationPhase::Entering,
        }
    }

    /// How far the notification has slid into place (0.0 hidden, 1.0 shown)
    pub fn presence(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        match self.phase {
            NotificationPhase::Entering => {
                let progress = elapsed.as_secs_f32() / Self::ANIMATION.as_secs_f32();
                simple_easing::cubic_out(progress.clamp(0.0, 1.0))
            }
            NotificationPhase::Visible => 1.0,
            NotificationPhase::Exiting => {
                let exit_elapsed = elapsed.saturating_sub(Self::DISPLAY);
                let progress = exit_elapsed.as_secs_f32() / Self::ANIMATION.as_secs_f32();
                1.0 - simple_easing::cubic_in(progress.clamp(0.0, 1.0))
            }
        }
    }
}

/// Holds the single notification of a form
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    /// Show a notification, replacing whatever is displayed
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let notification = Notification::new(kind, message, now);
        if let Some(old) = self.current.replace(notification) {
            tracing::debug!(replaced = %old.id, "notification replaced");
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Advance the display phases; removal happens only after the exit animation
    pub fn tick(&mut self, now: Instant) {
        let Some(notification) = self.current.as_mut() else {
            return;
        };
        let elapsed = now.saturating_duration_since(notification.shown_at);
        if elapsed >= Notification::DISPLAY + Notification::ANIMATION {
            tracing::debug!(id = %notification.id, "notification removed");
            self.current = None;
        } else if elapsed >= Notification::DISPLAY {
            notification.phase = NotificationPhase::Exiting;
        } else if elapsed >= Notification::ANIMATION {
            notification.phase = NotificationPhase::Visible;
        }
    }
}
