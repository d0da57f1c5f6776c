//! The drawing seam between scenes and whatever host renders them.
//! Coordinates are logical canvas units with y growing downward.

use crate::sprites::Sprite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const YELLOW: Rgb = Rgb(215, 223, 1);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const DIM: Rgb = Rgb(120, 120, 140);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Nominal font size in canvas units.
    pub size: f32,
    pub color: Rgb,
    pub align: Align,
}

impl TextStyle {
    pub fn centered(size: f32, color: Rgb) -> Self {
        TextStyle { size, color, align: Align::Center }
    }

    pub fn left(size: f32, color: Rgb) -> Self {
        TextStyle { size, color, align: Align::Left }
    }
}

pub trait DrawSurface {
    fn clear(&mut self);
    /// `(x, y)` is the top-left corner.
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32);
    /// `(x, y)` is the anchor of the text baseline row.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Sprite { sprite: Sprite, x: f32, y: f32, width: f32, height: f32 },
    Text { text: String, x: f32, y: f32, style: TextStyle },
    Rect { x: f32, y: f32, width: f32, height: f32, color: Rgb },
}

/// Surface that only remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprite_count(&self, wanted: Sprite) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Sprite { sprite, .. } if *sprite == wanted))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Sprite { sprite, x, y, width, height });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.calls.push(DrawCall::Text { text: text.to_string(), x, y, style });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.calls.push(DrawCall::Rect { x, y, width, height, color });
    }
}
