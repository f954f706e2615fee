pub const AUTOPLAY_INTERVAL_MS: f32 = 5000.0; // Dwell time before auto-advance
pub const EXIT_DURATION_MS: f32 = 300.0;      // Outgoing slide exit treatment
pub const ENTER_DURATION_MS: f32 = 300.0;     // Incoming slide enter treatment
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;     // Minimum horizontal travel to count as a swipe

pub const FPS: u32 = 60;                      // Target frames per second for the frontend loop
pub const FRAME_TIME_MS: f32 = 1000.0 / FPS as f32; // Time per frame (milliseconds)

pub const CELL_WIDTH_PX: f32 = 8.0;           // Terminal cell width used to scale mouse travel to pixels
