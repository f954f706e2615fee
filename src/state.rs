use crate::timer::AutoplayTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Exactly one slide active, ready to accept navigation.
    Settled,
    /// The current slide is playing its exit treatment; `target` becomes
    /// active once the treatment finishes.
    Exiting { target: usize },
}

/// All mutable carousel state, owned exclusively by the controller.
#[derive(Debug)]
pub struct CarouselState {
    pub current_index: usize,
    pub phase: TransitionPhase,
    /// Pending auto-advance. `None` while paused or cancelled.
    pub autoplay: Option<AutoplayTimer>,
    /// Time left on the interval, kept across pause/resume so a resume
    /// continues the countdown instead of restarting it.
    pub remaining_ms: f32,
}

impl CarouselState {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            current_index: 0,
            phase: TransitionPhase::Settled,
            autoplay: Some(AutoplayTimer::new(interval_ms)),
            remaining_ms: interval_ms,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Exiting { .. })
    }
}
