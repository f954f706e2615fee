use tracing::{debug, trace};

use crate::announcer::Announcer;
use crate::constants::*;
use crate::slide::{Slide, Testimonial};
use crate::state::{CarouselState, TransitionPhase};
use crate::swipe::{SwipeDirection, SwipeTracker};
use crate::timer::AutoplayTimer;

/// Owns the slide deck and the carousel state, and reconciles every input
/// channel (buttons, dots, keys, swipes, hover pause) into one consistent
/// displayed slide.
///
/// All methods are synchronous; time only moves when the frontend calls
/// [`update`](Self::update) with the elapsed milliseconds.
pub struct CarouselController<A: Announcer> {
    slides: Vec<Slide>,
    state: CarouselState,
    interval_ms: f32,
    swipe: SwipeTracker,
    announcer: A,
}

impl<A: Announcer> CarouselController<A> {
    /// Build a controller over a non-empty deck. The first slide becomes
    /// active right away and autoplay starts with a full interval.
    pub fn new(testimonials: Vec<Testimonial>, interval_ms: f32, announcer: A) -> Self {
        debug_assert!(!testimonials.is_empty(), "deck must contain at least one slide");
        let slides: Vec<Slide> = testimonials.into_iter().map(Slide::new).collect();
        let mut controller = Self {
            slides,
            state: CarouselState::new(interval_ms),
            interval_ms,
            swipe: SwipeTracker::new(SWIPE_THRESHOLD_PX),
            announcer,
        };
        controller.slides[0].activate_immediately();
        controller.announce_current();
        controller
    }

    /// Navigate to `index`, wrapping negative and overflowing values into
    /// the deck. A call during an in-flight transition is silently dropped
    /// so a rapid burst of requests cannot tear the display.
    pub fn go_to(&mut self, index: isize) {
        if self.state.is_transitioning() {
            trace!(index, "navigation dropped: transition in flight");
            return;
        }
        let len = self.slides.len() as isize;
        let target = index.rem_euclid(len) as usize;
        self.slides[self.state.current_index].start_exit();
        self.state.phase = TransitionPhase::Exiting { target };
    }

    pub fn next(&mut self) {
        self.go_to(self.state.current_index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.state.current_index as isize - 1);
    }

    /// Cancel the pending auto-advance and freeze the progress fill at its
    /// current level. Pausing an already paused carousel is a no-op.
    pub fn pause_autoplay(&mut self) {
        if let Some(timer) = self.state.autoplay.take() {
            self.state.remaining_ms = timer.remaining_ms();
            debug!(remaining_ms = self.state.remaining_ms, "autoplay paused");
        }
    }

    /// Restart the countdown from the frozen remaining time, not a fresh
    /// interval. Resuming a running carousel is a no-op.
    pub fn resume_autoplay(&mut self) {
        if self.state.autoplay.is_none() {
            debug!(remaining_ms = self.state.remaining_ms, "autoplay resumed");
            self.state.autoplay = Some(AutoplayTimer::with_remaining(
                self.interval_ms,
                self.state.remaining_ms,
            ));
        }
    }

    /// Restart the countdown with a full interval. Every explicit manual
    /// navigation gets a full dwell time before the next auto-advance.
    pub fn reset_autoplay(&mut self) {
        self.state.remaining_ms = self.interval_ms;
        self.state.autoplay = Some(AutoplayTimer::new(self.interval_ms));
    }

    /// Touch (or mouse press) landed at horizontal position `x` in pixels.
    /// Pauses autoplay while the finger is down and arms the swipe tracker.
    pub fn touch_start(&mut self, x: f32) {
        self.pause_autoplay();
        self.swipe.begin(x);
    }

    /// Touch lifted at `x`. A swipe navigates and grants a fresh interval;
    /// a tap resumes the frozen countdown. Returns true when the gesture
    /// navigated.
    pub fn touch_end(&mut self, x: f32) -> bool {
        match self.swipe.end(x) {
            Some(SwipeDirection::Left) => {
                self.next();
                self.reset_autoplay();
                true
            }
            Some(SwipeDirection::Right) => {
                self.prev();
                self.reset_autoplay();
                true
            }
            None => {
                self.resume_autoplay();
                false
            }
        }
    }

    /// Advance slide animations, the transition state machine and the
    /// autoplay countdown by `dt_ms` elapsed milliseconds.
    pub fn update(&mut self, dt_ms: f32) {
        for slide in &mut self.slides {
            slide.update(dt_ms);
        }

        // Commit once the outgoing slide's exit treatment has finished.
        if let TransitionPhase::Exiting { target } = self.state.phase {
            if !self.slides[self.state.current_index].is_animating() {
                self.commit(target);
            }
        }

        let expired = match self.state.autoplay.as_mut() {
            Some(timer) => {
                let expired = timer.tick(dt_ms);
                self.state.remaining_ms = timer.remaining_ms();
                expired
            }
            None => false,
        };
        if expired {
            debug!("autoplay interval elapsed");
            self.next();
            self.reset_autoplay();
        }
    }

    fn commit(&mut self, target: usize) {
        let old = self.state.current_index;
        self.slides[old].hide();
        self.slides[target].activate();
        self.state.current_index = target;
        self.state.phase = TransitionPhase::Settled;
        debug!(from = old, to = target, "slide committed");
        self.announce_current();
    }

    fn announce_current(&mut self) {
        let index = self.state.current_index;
        let message = format!(
            "Showing testimonial from {}, {} of {}",
            self.slides[index].testimonial.author,
            index + 1,
            self.slides.len()
        );
        self.announcer.announce(message);
    }

    // --- Read access for frontends and tests ---

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.state.autoplay.is_some()
    }

    /// Progress indicator fill in [0, 1], frozen while paused.
    pub fn progress(&self) -> f32 {
        (1.0 - self.state.remaining_ms / self.interval_ms).clamp(0.0, 1.0)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.state.current_index]
    }

    /// One flag per indicator dot; exactly one is set in any settled state.
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.slides.len())
            .map(|i| i == self.state.current_index)
            .collect()
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announcer::LiveRegion;

    fn deck(n: usize) -> Vec<Testimonial> {
        (0..n)
            .map(|i| Testimonial {
                author: format!("Author {i}"),
                role: "Customer".into(),
                quote: "Great product.".into(),
            })
            .collect()
    }

    #[test]
    fn first_slide_is_active_and_announced_at_startup() {
        let controller =
            CarouselController::new(deck(3), AUTOPLAY_INTERVAL_MS, LiveRegion::new());
        assert_eq!(controller.current_index(), 0);
        assert!(controller.active_slide().is_active());
        assert_eq!(
            controller.announcer().text(),
            "Showing testimonial from Author 0, 1 of 3"
        );
    }

    #[test]
    fn autoplay_starts_with_an_empty_progress_bar() {
        let controller =
            CarouselController::new(deck(3), AUTOPLAY_INTERVAL_MS, LiveRegion::new());
        assert!(controller.is_autoplay_running());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn exactly_one_dot_tracks_the_active_slide() {
        let mut controller =
            CarouselController::new(deck(4), AUTOPLAY_INTERVAL_MS, LiveRegion::new());
        controller.go_to(2);
        controller.update(EXIT_DURATION_MS + 1.0);
        let dots = controller.dot_states();
        assert_eq!(dots.iter().filter(|set| **set).count(), 1);
        assert!(dots[2]);
    }
}
