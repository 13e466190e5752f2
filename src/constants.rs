pub const WINDOW_WIDTH: i32 = 1280;          // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                     // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;       // Minimum horizontal drag distance (pixels)
pub const TRACK_SLIDE_DURATION: f32 = 0.35;  // Duration of the track easing between slots (seconds)

// Navigation chrome layout
pub const ARROW_WIDTH: f32 = 36.0;           // Arrow control bounding box
pub const ARROW_HEIGHT: f32 = 56.0;
pub const ARROW_MARGIN: f32 = 16.0;          // Distance from the window edge
pub const DOT_RADIUS: f32 = 7.0;             // Drawn indicator radius
pub const DOT_PICK_RADIUS: f32 = 10.0;       // Click target radius (must stay below DOT_SPACING / 2)
pub const DOT_SPACING: f32 = 24.0;           // Center-to-center distance between dots
pub const DOT_MARGIN_BOTTOM: f32 = 28.0;     // Distance from the window bottom to the dot centers
