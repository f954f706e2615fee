#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged leftwards: advance to the next slide.
    Left,
    /// Content dragged rightwards: go back to the previous slide.
    Right,
}

/// Classifies a horizontal drag as a swipe or a tap. A gesture only counts
/// as a swipe when the travel strictly exceeds the threshold; anything
/// shorter is a tap or scroll and produces no navigation.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Returns the swipe direction, or `None` for a
    /// tap, a sub-threshold drag, or an end without a matching begin.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta < -self.threshold_px {
            Some(SwipeDirection::Left)
        } else if delta > self.threshold_px {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_leftward_drag_is_a_left_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(200.0);
        assert_eq!(tracker.end(140.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn long_rightward_drag_is_a_right_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(140.0);
        assert_eq!(tracker.end(200.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(200.0);
        assert_eq!(tracker.end(180.0), None);
    }

    #[test]
    fn travel_equal_to_the_threshold_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(200.0);
        assert_eq!(tracker.end(150.0), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.end(0.0), None);
    }

    #[test]
    fn gesture_state_is_consumed_by_end() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(200.0);
        assert_eq!(tracker.end(100.0), Some(SwipeDirection::Left));
        // A second end without a new begin must not re-fire.
        assert_eq!(tracker.end(0.0), None);
    }
}
