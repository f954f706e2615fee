/// Countdown for the next auto-advance. The controller stores it as
/// `Option<AutoplayTimer>`; a paused or cancelled timer is `None`, never a
/// dangling handle.
#[derive(Debug, Clone, Copy)]
pub struct AutoplayTimer {
    interval_ms: f32,
    remaining_ms: f32,
}

impl AutoplayTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            remaining_ms: interval_ms,
        }
    }

    /// A timer that resumes a partially elapsed interval.
    pub fn with_remaining(interval_ms: f32, remaining_ms: f32) -> Self {
        Self {
            interval_ms,
            remaining_ms: remaining_ms.clamp(0.0, interval_ms),
        }
    }

    /// Advance the countdown. Returns true when the interval has elapsed;
    /// the caller is expected to replace the timer after an expiry.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.remaining_ms = (self.remaining_ms - dt_ms).max(0.0);
        self.remaining_ms <= 0.0
    }

    pub fn remaining_ms(&self) -> f32 {
        self.remaining_ms
    }

    /// Fill level of the progress indicator, in [0, 1].
    pub fn progress(&self) -> f32 {
        (1.0 - self.remaining_ms / self.interval_ms).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_once_the_interval_has_elapsed() {
        let mut timer = AutoplayTimer::new(5000.0);
        assert!(!timer.tick(4999.0));
        assert!(timer.tick(1.0));
    }

    #[test]
    fn resumed_timer_keeps_the_remaining_time() {
        let mut timer = AutoplayTimer::with_remaining(5000.0, 3000.0);
        assert!((timer.progress() - 0.4).abs() < 1e-6);
        assert!(!timer.tick(2999.0));
        assert!(timer.tick(1.0));
    }

    #[test]
    fn remaining_is_clamped_to_the_interval() {
        let timer = AutoplayTimer::with_remaining(5000.0, 9000.0);
        assert_eq!(timer.remaining_ms(), 5000.0);
        let timer = AutoplayTimer::with_remaining(5000.0, -10.0);
        assert_eq!(timer.remaining_ms(), 0.0);
    }
}
