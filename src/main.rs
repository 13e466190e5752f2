use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod chrome;
mod constants;
mod controller;
mod gesture;
mod slide;
mod texture_loader;
mod track;

use crate::chrome::{Chrome, Control};
use crate::constants::*;
use crate::controller::{SliderConfig, SliderController};
use crate::gesture::{Swipe, SwipeTracker};
use crate::slide::Slide;
use crate::texture_loader::{collect_image_paths, load_texture_with_exif_rotation};
use crate::track::Track;

/// Image carousel: cycles the images of a directory in a window.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the images to cycle through
    image_dir: PathBuf,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = 4000)]
    interval: u64,

    /// Disable timer-driven advancing
    #[arg(long)]
    no_auto: bool,

    /// Keep advancing while the pointer hovers the window
    #[arg(long)]
    no_pause_on_hover: bool,

    /// Randomize the slide order at startup
    #[arg(long)]
    shuffle: bool,
}

impl Args {
    fn slider_config(&self) -> SliderConfig {
        SliderConfig {
            auto_slide: !self.no_auto,
            interval: Duration::from_millis(self.interval),
            pause_on_hover: !self.no_pause_on_hover,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.slider_config();

    let image_paths = collect_image_paths(&args.image_dir, args.shuffle)?;
    info!(
        "found {} images in {}",
        image_paths.len(),
        args.image_dir.display()
    );

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping {}: {e:#}", path.display()),
        }
    }

    if slides.is_empty() {
        bail!("none of the images could be loaded");
    }

    let mut slider = SliderController::new(slides.len(), config);
    let chrome = Chrome::new(slides.len());
    let mut track = Track::new(slides);
    let mut swipe = SwipeTracker::default();
    let mut hovered = rl.is_cursor_on_screen();
    let mut last_index = slider.active_index();

    info!(
        "carousel ready: {} slides, auto-advance {} ({} ms), pause-on-hover {}",
        track.len(),
        if config.auto_slide { "on" } else { "off" },
        config.interval.as_millis(),
        if config.pause_on_hover { "on" } else { "off" },
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        // --- Input ---

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            slider.retreat();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            slider.advance();
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            match chrome.hit_test(point, screen_width, screen_height) {
                Some(Control::Prev) => slider.retreat(),
                Some(Control::Next) => slider.advance(),
                Some(Control::Dot(index)) => slider.jump_to(index),
                // A press outside the controls begins a potential swipe.
                None => swipe.begin(point.x),
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            match swipe.finish(rl.get_mouse_position().x) {
                Some(Swipe::Left) => slider.advance(),
                Some(Swipe::Right) => slider.retreat(),
                None => {}
            }
        }

        // Hover enter/leave edges drive the pause-on-hover behavior.
        let on_screen = rl.is_cursor_on_screen();
        if on_screen != hovered {
            hovered = on_screen;
            if hovered {
                slider.pointer_entered();
            } else {
                slider.pointer_left();
            }
        }

        // --- Update ---

        slider.tick(dt);
        if slider.active_index() != last_index {
            last_index = slider.active_index();
            debug!("active slide: {}/{}", last_index + 1, track.len());
        }
        track.scroll_to(slider.active_index());
        track.update(dt);

        // --- Render ---

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        track.draw(&mut d, screen_width, screen_height);
        chrome.draw(&mut d, slider.active_index(), screen_width, screen_height);
    }

    slider.dispose();
    debug!("carousel disposed");
    Ok(())
}
