use log::info;

use super::{Context, OpeningScene, Scene, SceneKind, Transition};
use crate::input::Key;
use crate::surface::{DrawSurface, Rgb, TextStyle};

/// Final level and score. Fire wipes progress and returns to the title.
#[derive(Debug, Default)]
pub struct GameOverScene;

impl GameOverScene {
    pub fn new() -> Self {
        GameOverScene
    }

    pub fn summary(level: u32, score: u32) -> String {
        format!("You've reached level {} and your score is {}.", level, score)
    }
}

impl Scene for GameOverScene {
    fn kind(&self) -> SceneKind {
        SceneKind::GameOver
    }

    fn setup(&mut self, ctx: &mut Context) {
        info!(
            "game over at level {} with score {}",
            ctx.progress.level, ctx.progress.score
        );
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface) {
        let x = ctx.boundaries.center_x();
        let y = ctx.canvas.height / 2.0;
        surface.draw_text("Game Over!", x, y - 120.0, TextStyle::centered(40.0, Rgb::WHITE));
        surface.draw_text(
            &GameOverScene::summary(ctx.progress.level, ctx.progress.score),
            x,
            y - 40.0,
            TextStyle::centered(36.0, Rgb::YELLOW),
        );
        surface.draw_text(
            "Press 'Space' to continue.",
            x,
            y + 40.0,
            TextStyle::centered(36.0, Rgb::YELLOW),
        );
    }

    fn on_key_down(&mut self, ctx: &mut Context, key: Key) -> Transition {
        match key {
            Key::Fire => {
                ctx.progress.reset(ctx.settings);
                Transition::go_to(OpeningScene::new())
            }
            _ => Transition::None,
        }
    }
}
