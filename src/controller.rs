use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct SliderConfig {
    pub auto_slide: bool,
    pub interval: Duration,
    pub pause_on_hover: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_slide: true,
            interval: Duration::from_millis(4000),
            pause_on_hover: true,
        }
    }
}

// Pending recurring advance; exists iff auto-advance is currently active.
#[derive(Debug, Clone, Copy)]
struct AdvanceTimer {
    elapsed: f32, // seconds since the last (re)start
}

/// The slider state machine. Owns the active index and the advance timer;
/// all input sources converge on the navigation operations below, and the
/// frontend draws whatever `active_index` says each frame.
pub struct SliderController {
    active_index: usize,
    slide_count: usize,
    config: SliderConfig,
    timer: Option<AdvanceTimer>,
    disposed: bool,
}

impl SliderController {
    pub fn new(slide_count: usize, config: SliderConfig) -> Self {
        debug_assert!(slide_count > 0);
        let mut slider = Self {
            active_index: 0,
            slide_count,
            config,
            timer: None,
            disposed: false,
        };
        if slider.config.auto_slide {
            slider.start_auto_advance();
        }
        slider
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn advance(&mut self) {
        if self.disposed {
            return;
        }
        self.active_index = (self.active_index + 1) % self.slide_count;
        self.reset_auto_advance();
    }

    pub fn retreat(&mut self) {
        if self.disposed {
            return;
        }
        self.active_index = (self.active_index + self.slide_count - 1) % self.slide_count;
        self.reset_auto_advance();
    }

    // Caller guarantees the index is in range.
    pub fn jump_to(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        debug_assert!(index < self.slide_count);
        self.active_index = index;
        self.reset_auto_advance();
    }

    pub fn start_auto_advance(&mut self) {
        if self.disposed {
            return;
        }
        self.stop_auto_advance(); // at most one timer outstanding
        self.timer = Some(AdvanceTimer { elapsed: 0.0 });
    }

    pub fn stop_auto_advance(&mut self) {
        self.timer = None;
    }

    // Manual navigation restarts the countdown to the full interval,
    // it never resumes a partial one.
    fn reset_auto_advance(&mut self) {
        if self.config.auto_slide {
            self.start_auto_advance();
        }
    }

    /// Feed one frame of elapsed time into the advance timer. Fires at most
    /// once per call; frame time is far below any usable interval.
    pub fn tick(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        let fired = match &mut self.timer {
            Some(timer) => {
                timer.elapsed += dt;
                if timer.elapsed >= self.config.interval.as_secs_f32() {
                    timer.elapsed = 0.0; // recurring: rearm before advancing
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if fired {
            self.advance();
        }
    }

    pub fn pointer_entered(&mut self) {
        if self.config.pause_on_hover {
            self.stop_auto_advance();
        }
    }

    pub fn pointer_left(&mut self) {
        // Only an auto-configured slider resumes; hovering a static one is a no-op.
        if self.config.pause_on_hover && self.config.auto_slide {
            self.start_auto_advance();
        }
    }

    /// Stop the timer and freeze the controller; every operation after this
    /// is a no-op, so the active index never changes again.
    pub fn dispose(&mut self) {
        self.stop_auto_advance();
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(auto_slide: bool, interval_ms: u64, pause_on_hover: bool) -> SliderConfig {
        SliderConfig {
            auto_slide,
            interval: Duration::from_millis(interval_ms),
            pause_on_hover,
        }
    }

    fn manual() -> SliderConfig {
        config(false, 4000, false)
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut slider = SliderController::new(3, manual());
        slider.retreat();
        assert_eq!(slider.active_index(), 2);
        slider.advance();
        assert_eq!(slider.active_index(), 0);
        slider.advance();
        slider.advance();
        assert_eq!(slider.active_index(), 2);
        slider.advance();
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn index_stays_in_range_over_any_sequence() {
        let mut slider = SliderController::new(5, manual());
        for step in 0..100 {
            if step % 3 == 0 {
                slider.retreat();
            } else {
                slider.advance();
            }
            assert!(slider.active_index() < slider.slide_count());
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let mut slider = SliderController::new(1, manual());
        slider.advance();
        assert_eq!(slider.active_index(), 0);
        slider.retreat();
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn jump_to_lands_exactly() {
        let mut slider = SliderController::new(4, manual());
        slider.jump_to(2);
        assert_eq!(slider.active_index(), 2);
        slider.jump_to(0);
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn auto_advances_on_schedule() {
        let mut slider = SliderController::new(4, config(true, 5000, true));
        for _ in 0..10 {
            slider.tick(0.5); // 5000 ms total
        }
        assert_eq!(slider.active_index(), 1);
        for _ in 0..10 {
            slider.tick(0.5); // 10000 ms total
        }
        assert_eq!(slider.active_index(), 2);
    }

    #[test]
    fn no_auto_advance_when_disabled() {
        let mut slider = SliderController::new(3, manual());
        assert!(!slider.is_auto_advancing());
        slider.tick(100.0);
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn navigation_restarts_countdown() {
        let mut slider = SliderController::new(3, config(true, 4000, true));
        slider.tick(3.0);
        slider.advance();
        assert_eq!(slider.active_index(), 1);
        // The old countdown would have fired at 4.0s total; the fresh one
        // must run its full interval from the navigation instead.
        slider.tick(3.5);
        assert_eq!(slider.active_index(), 1);
        slider.tick(0.5);
        assert_eq!(slider.active_index(), 2);
    }

    #[test]
    fn jump_restarts_countdown() {
        let mut slider = SliderController::new(3, config(true, 4000, true));
        slider.tick(3.5);
        slider.jump_to(2);
        slider.tick(3.5);
        assert_eq!(slider.active_index(), 2);
        slider.tick(0.5);
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes_fresh() {
        let mut slider = SliderController::new(3, config(true, 4000, true));
        slider.tick(3.5);
        slider.pointer_entered();
        assert!(!slider.is_auto_advancing());
        slider.tick(100.0);
        assert_eq!(slider.active_index(), 0);
        slider.pointer_left();
        assert!(slider.is_auto_advancing());
        slider.tick(3.5);
        assert_eq!(slider.active_index(), 0); // fresh interval, not a resumed one
        slider.tick(0.5);
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn hover_on_static_slider_is_a_noop() {
        let mut slider = SliderController::new(3, config(false, 4000, true));
        slider.pointer_entered();
        slider.pointer_left();
        assert!(!slider.is_auto_advancing());
        slider.tick(100.0);
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn hover_ignored_when_pause_disabled() {
        let mut slider = SliderController::new(3, config(true, 4000, false));
        slider.pointer_entered();
        assert!(slider.is_auto_advancing());
        slider.tick(4.0);
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn manual_start_keeps_firing_without_auto_config() {
        // start_auto_advance is public surface and works regardless of the
        // config flag; only navigation-driven restarts consult it.
        let mut slider = SliderController::new(3, manual());
        slider.start_auto_advance();
        slider.tick(4.0);
        assert_eq!(slider.active_index(), 1);
        slider.tick(4.0);
        assert_eq!(slider.active_index(), 2);
    }

    #[test]
    fn stop_cancels_pending_timer() {
        let mut slider = SliderController::new(3, config(true, 4000, true));
        slider.stop_auto_advance();
        slider.tick(100.0);
        assert_eq!(slider.active_index(), 0);
    }

    #[test]
    fn dispose_freezes_everything() {
        let mut slider = SliderController::new(3, config(true, 4000, true));
        slider.advance();
        slider.dispose();
        assert!(!slider.is_auto_advancing());
        slider.tick(100.0);
        slider.advance();
        slider.retreat();
        slider.jump_to(2);
        slider.start_auto_advance();
        assert_eq!(slider.active_index(), 1);
        assert!(!slider.is_auto_advancing());
    }
}
