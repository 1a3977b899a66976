use web_time::{Duration, Instant};

/// Rate limiter for repeated discrete steps (held-key zoom).
///
/// A step is due once `interval` has elapsed since the previous one, so the
/// visual rate does not depend on how often the host ticks.
#[derive(Debug, Clone)]
pub struct StepPacer {
    interval: Duration,
    last_step: Option<Instant>,
}

impl StepPacer {
    /// Pacer allowing one step per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
        }
    }

    /// Whether a step may run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_step
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Record a step at `now` if one is due. Returns whether it was.
    pub fn try_step(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.last_step = Some(now);
        true
    }

    /// Forget the previous step; the next one is due immediately.
    pub fn reset(&mut self) {
        self.last_step = None;
    }
}
