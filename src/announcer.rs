/// Sink for assistive-technology announcements. The controller pushes a
/// message through this seam on every committed slide change so it never
/// touches the rendering environment directly.
pub trait Announcer {
    fn announce(&mut self, message: String);
}

/// Polite live region: each announcement replaces the previous one. The
/// frontend renders its text as a status line.
#[derive(Debug, Default)]
pub struct LiveRegion {
    message: String,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.message
    }
}

impl Announcer for LiveRegion {
    fn announce(&mut self, message: String) {
        self.message = message;
    }
}
