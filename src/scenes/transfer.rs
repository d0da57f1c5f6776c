use super::{Context, GameScene, Scene, SceneKind, Transition};
use crate::config::Settings;
use crate::surface::{DrawSurface, Rgb, TextStyle};

/// "Get ready" banner between levels. The text shrinks and fades one step
/// per tick, then the level starts. Ignores every key.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferScene {
    level: u32,
    font_size: f32,
    font_color: f32,
    font_step: f32,
    color_step: f32,
    min_font_size: f32,
}

impl TransferScene {
    pub fn new(level: u32, settings: &Settings) -> Self {
        TransferScene {
            level,
            font_size: settings.transfer_font_size,
            font_color: settings.transfer_font_color,
            font_step: settings.transfer_font_step,
            color_step: settings.transfer_color_step,
            min_font_size: settings.transfer_min_font_size,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_color(&self) -> u8 {
        self.font_color.round() as u8
    }

    /// Advance the animation one tick; `true` once the text is too small to show.
    fn step(&mut self) -> bool {
        self.font_size -= self.font_step;
        self.font_color = (self.font_color - self.color_step).max(0.0);
        self.font_size < self.min_font_size
    }
}

impl Scene for TransferScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Transfer
    }

    fn update(&mut self, _ctx: &mut Context) -> Transition {
        if self.step() {
            Transition::go_to(GameScene::new(self.level))
        } else {
            Transition::None
        }
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface) {
        let shade = self.font_color();
        surface.draw_text(
            &format!("Get ready for level {}", self.level),
            ctx.boundaries.center_x(),
            ctx.canvas.height / 2.0,
            TextStyle::centered(self.font_size.max(0.0), Rgb(255, shade, shade)),
        );
    }
}
