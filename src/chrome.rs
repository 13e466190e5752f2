use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Dot(usize),
}

/// Navigation chrome: the previous/next arrow controls and one indicator
/// dot per slide. The dot count is fixed at construction; geometry derives
/// from the current screen size so the layout follows window resizes.
pub struct Chrome {
    dot_count: usize,
}

impl Chrome {
    pub fn new(dot_count: usize) -> Self {
        Self { dot_count }
    }

    fn prev_rect(&self, screen_height: f32) -> Rectangle {
        Rectangle::new(
            ARROW_MARGIN,
            (screen_height - ARROW_HEIGHT) * 0.5,
            ARROW_WIDTH,
            ARROW_HEIGHT,
        )
    }

    fn next_rect(&self, screen_width: f32, screen_height: f32) -> Rectangle {
        Rectangle::new(
            screen_width - ARROW_MARGIN - ARROW_WIDTH,
            (screen_height - ARROW_HEIGHT) * 0.5,
            ARROW_WIDTH,
            ARROW_HEIGHT,
        )
    }

    fn dot_center(&self, index: usize, screen_width: f32, screen_height: f32) -> Vector2 {
        let row_width = self.dot_count.saturating_sub(1) as f32 * DOT_SPACING;
        let first_x = (screen_width - row_width) * 0.5;
        Vector2::new(
            first_x + index as f32 * DOT_SPACING,
            screen_height - DOT_MARGIN_BOTTOM,
        )
    }

    pub fn hit_test(
        &self,
        point: Vector2,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Control> {
        if rect_contains(self.prev_rect(screen_height), point) {
            return Some(Control::Prev);
        }
        if rect_contains(self.next_rect(screen_width, screen_height), point) {
            return Some(Control::Next);
        }
        for index in 0..self.dot_count {
            let center = self.dot_center(index, screen_width, screen_height);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            if dx * dx + dy * dy <= DOT_PICK_RADIUS * DOT_PICK_RADIUS {
                return Some(Control::Dot(index));
            }
        }
        None
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        active_index: usize,
        screen_width: f32,
        screen_height: f32,
    ) {
        draw_arrow(d, self.prev_rect(screen_height), true);
        draw_arrow(d, self.next_rect(screen_width, screen_height), false);

        // Exactly one dot carries the active style.
        for index in 0..self.dot_count {
            let center = self.dot_center(index, screen_width, screen_height);
            let color = if index == active_index {
                Color::RAYWHITE
            } else {
                Color::GRAY
            };
            d.draw_circle_v(center, DOT_RADIUS, color);
        }
    }
}

fn rect_contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

// Vertices in counter-clockwise order, as raylib's triangle fill expects.
fn draw_arrow(d: &mut RaylibDrawHandle, rect: Rectangle, points_left: bool) {
    let mid_y = rect.y + rect.height * 0.5;
    if points_left {
        d.draw_triangle(
            Vector2::new(rect.x, mid_y),
            Vector2::new(rect.x + rect.width, rect.y + rect.height),
            Vector2::new(rect.x + rect.width, rect.y),
            Color::RAYWHITE,
        );
    } else {
        d.draw_triangle(
            Vector2::new(rect.x + rect.width, mid_y),
            Vector2::new(rect.x, rect.y),
            Vector2::new(rect.x, rect.y + rect.height),
            Color::RAYWHITE,
        );
    }
}
