use super::{Context, GameOverScene, Scene, SceneKind, Transition};
use crate::input::Key;
use crate::surface::{DrawSurface, Rgb, TextStyle};

/// Overlay pushed over a running level. Its `update` does nothing, so the
/// level beneath stays frozen until the overlay is popped.
#[derive(Debug, Default)]
pub struct PauseScene;

impl PauseScene {
    pub fn new() -> Self {
        PauseScene
    }
}

impl Scene for PauseScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Pause
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface) {
        let x = ctx.boundaries.center_x();
        let y = ctx.canvas.height / 2.0;
        let heading = TextStyle::centered(40.0, Rgb::WHITE);
        let hint = TextStyle::centered(36.0, Rgb::YELLOW);

        surface.draw_text("Paused", x, y - 140.0, heading);
        surface.draw_text("ESC: back to the current game", x, y - 100.0, hint);
        surface.draw_text("Enter: quit the current game", x, y - 70.0, hint);

        surface.draw_text("Game controls reminder", x, y - 10.0, heading);
        surface.draw_text("Left Arrow : Move Left", x, y + 30.0, hint);
        surface.draw_text("Right Arrow : Move Right", x, y + 60.0, hint);
        surface.draw_text("Space : Fire", x, y + 90.0, hint);
    }

    fn on_key_down(&mut self, _ctx: &mut Context, key: Key) -> Transition {
        match key {
            Key::Escape | Key::Pause => Transition::Pop,
            Key::Enter => Transition::go_to(GameOverScene::new()),
            _ => Transition::None,
        }
    }
}
