use super::{Context, Scene, SceneKind, TransferScene, Transition};
use crate::input::Key;
use crate::surface::{DrawSurface, Rgb, TextStyle};

/// Title screen. Fire starts a fresh game.
#[derive(Debug, Default)]
pub struct OpeningScene;

impl OpeningScene {
    pub fn new() -> Self {
        OpeningScene
    }
}

impl Scene for OpeningScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Opening
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface) {
        let x = ctx.boundaries.center_x();
        let y = ctx.canvas.height / 2.0;
        surface.draw_text("UFO HUNTER", x, y - 60.0, TextStyle::centered(80.0, Rgb::WHITE));
        surface.draw_text("Press Space to Start", x, y, TextStyle::centered(30.0, Rgb::YELLOW));
        surface.draw_text(
            "Left/Right or A/D to move, Space to fire, P to pause, M to mute",
            x,
            y + 60.0,
            TextStyle::centered(20.0, Rgb::DIM),
        );
    }

    fn on_key_down(&mut self, ctx: &mut Context, key: Key) -> Transition {
        match key {
            Key::Fire => {
                ctx.progress.reset(ctx.settings);
                Transition::go_to(TransferScene::new(ctx.progress.level, ctx.settings))
            }
            _ => Transition::None,
        }
    }
}
