use raylib::prelude::*;

use crate::constants::TRACK_SLIDE_DURATION;
use crate::slide::Slide;

/// The slide track. Slides sit side by side in viewport-sized slots; the
/// track offset eases toward the active slot so that the slide at the
/// active index ends up filling the viewport.
///
/// The offset is kept in slide units and converted to pixels at draw time,
/// which keeps the animation stable across window resizes.
pub struct Track {
    slides: Vec<Slide>,
    offset: f32, // current position, in slide units
    target: f32,
    tween: Option<ease::Tween>,
    animation_timer: f32,
}

impl Track {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            offset: 0.0,
            target: 0.0,
            tween: None,
            animation_timer: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Ease the track toward the given slot. Safe to call every frame;
    /// a new tween only starts when the target actually changes, and a
    /// restart mid-flight departs from the current drawn position.
    pub fn scroll_to(&mut self, index: usize) {
        let target = index as f32;
        if target == self.target {
            return;
        }
        self.target = target;
        self.tween = Some(ease::Tween::new(
            ease::cubic_out,
            self.offset,
            target,
            TRACK_SLIDE_DURATION,
        ));
        self.animation_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.tween.is_none() {
            return;
        }
        self.animation_timer += dt;
        if let Some(tween) = &mut self.tween {
            self.offset = tween.apply(dt);
        }
        if self.animation_timer >= TRACK_SLIDE_DURATION {
            // Snap to the exact slot so the slide sits pixel-aligned.
            self.offset = self.target;
            self.tween = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport_width: f32, viewport_height: f32) {
        for (i, slide) in self.slides.iter().enumerate() {
            let slot_x = (i as f32 - self.offset) * viewport_width;
            // Skip slides entirely outside the viewport.
            if slot_x + viewport_width <= 0.0 || slot_x >= viewport_width {
                continue;
            }
            slide.draw(d, slot_x, viewport_width, viewport_height);
        }
    }
}
