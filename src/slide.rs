use raylib::prelude::*;

pub struct Slide {
    texture: Texture2D,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        Self { texture }
    }

    /// Draw the slide centered in its slot, scaled to fit the viewport.
    /// Images smaller than the viewport are never upscaled.
    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        slot_x: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = (viewport_width / tex_width)
            .min(viewport_height / tex_height)
            .min(1.0);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let draw_pos = Vector2::new(
            slot_x + (viewport_width - scaled_width) * 0.5,
            (viewport_height - scaled_height) * 0.5,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(draw_pos.x, draw_pos.y, scaled_width, scaled_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
