use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Tracks one horizontal drag: the press position goes in, an optional
/// swipe direction comes out on release.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let diff = start - x;
        // Strictly greater: a drag of exactly the threshold is ignored.
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if diff > 0.0 { Swipe::Left } else { Swipe::Right })
    }
}
