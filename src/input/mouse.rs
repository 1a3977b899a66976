use glam::DVec2;
use web_time::{Duration, Instant};

/// Result of a primary-button release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// The press turned into a drag, or took too long.
    NoAction,
    /// A quick press and release at this position.
    Click(DVec2),
}

/// Tracks the cursor and tells clicks from drags.
///
/// A release counts as a click only when it follows the press within the
/// click window; anything slower was a drag.
#[derive(Debug, Clone)]
pub struct PointerState {
    pub position: DVec2,
    pressed_at: Option<Instant>,
    click_window: Duration,
}

impl PointerState {
    /// Pointer with no button held.
    pub fn new(click_window: Duration) -> Self {
        Self {
            position: DVec2::ZERO,
            pressed_at: None,
            click_window,
        }
    }

    /// Whether the primary button is held.
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Move the cursor and return the movement since the last position.
    pub fn handle_position(&mut self, position: DVec2) -> DVec2 {
        let delta = position - self.position;
        self.position = position;
        delta
    }

    /// Record a press at `now`.
    pub fn handle_press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Process a release at `now`.
    pub fn handle_release(&mut self, now: Instant) -> ClickResult {
        match self.pressed_at.take() {
            Some(pressed) if now.saturating_duration_since(pressed) <= self.click_window => {
                ClickResult::Click(self.position)
            }
            _ => ClickResult::NoAction,
        }
    }
}
