use serde::Deserialize;

use crate::constants::*;

/// One testimonial record as it appears in a deck file.
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Hidden,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Treatment {
    None,
    Exit,  // Fading out before being hidden
    Enter, // Fading in after being committed
}

/// A testimonial plus its display state and a small time-driven
/// enter/exit treatment. Slides are created once at startup and never
/// move; the controller flips their display state by index.
pub struct Slide {
    pub testimonial: Testimonial,
    display: DisplayState,
    treatment: Treatment,
    treatment_timer: f32,
}

impl Slide {
    pub fn new(testimonial: Testimonial) -> Self {
        Self {
            testimonial,
            display: DisplayState::Hidden,
            treatment: Treatment::None,
            treatment_timer: 0.0,
        }
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn is_active(&self) -> bool {
        self.display == DisplayState::Active
    }

    pub fn is_animating(&self) -> bool {
        self.treatment != Treatment::None
    }

    /// Make this slide the visible one without any treatment.
    /// Used for the slide shown at startup.
    pub fn activate_immediately(&mut self) {
        self.display = DisplayState::Active;
        self.treatment = Treatment::None;
        self.treatment_timer = 0.0;
    }

    /// Make this slide the visible one and play the enter treatment.
    pub fn activate(&mut self) {
        self.display = DisplayState::Active;
        self.treatment = Treatment::Enter;
        self.treatment_timer = 0.0;
    }

    pub fn hide(&mut self) {
        self.display = DisplayState::Hidden;
        self.treatment = Treatment::None;
        self.treatment_timer = 0.0;
    }

    /// Begin the exit treatment. Overrides a running enter treatment so
    /// the exit always gets its full window.
    pub fn start_exit(&mut self) {
        self.treatment = Treatment::Exit;
        self.treatment_timer = 0.0;
    }

    pub fn update(&mut self, dt_ms: f32) {
        let duration = match self.treatment {
            Treatment::None => return,
            Treatment::Exit => EXIT_DURATION_MS,
            Treatment::Enter => ENTER_DURATION_MS,
        };
        self.treatment_timer += dt_ms;
        if self.treatment_timer >= duration {
            self.treatment = Treatment::None;
            self.treatment_timer = 0.0;
        }
    }

    /// Render opacity in [0, 1]. Exit fades out, enter fades in.
    pub fn opacity(&self) -> f32 {
        match self.treatment {
            Treatment::Exit => {
                let t = (self.treatment_timer / EXIT_DURATION_MS).min(1.0);
                1.0 - t
            }
            Treatment::Enter => (self.treatment_timer / ENTER_DURATION_MS).min(1.0),
            Treatment::None => {
                if self.is_active() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial() -> Testimonial {
        Testimonial {
            author: "Ada".into(),
            role: "CTO".into(),
            quote: "It just works.".into(),
        }
    }

    #[test]
    fn exit_treatment_finishes_after_its_window() {
        let mut slide = Slide::new(testimonial());
        slide.activate_immediately();
        slide.start_exit();
        assert!(slide.is_animating());

        slide.update(EXIT_DURATION_MS / 2.0);
        assert!(slide.is_animating());
        assert!(slide.opacity() < 1.0);

        slide.update(EXIT_DURATION_MS);
        assert!(!slide.is_animating());
    }

    #[test]
    fn enter_overridden_by_exit_restarts_the_timer() {
        let mut slide = Slide::new(testimonial());
        slide.activate();
        slide.update(ENTER_DURATION_MS / 2.0);
        slide.start_exit();

        // Exit gets its full window even though an enter was running.
        slide.update(EXIT_DURATION_MS - 1.0);
        assert!(slide.is_animating());
        slide.update(2.0);
        assert!(!slide.is_animating());
    }

    #[test]
    fn hidden_slide_has_zero_opacity() {
        let slide = Slide::new(testimonial());
        assert_eq!(slide.display(), DisplayState::Hidden);
        assert_eq!(slide.opacity(), 0.0);
    }
}
