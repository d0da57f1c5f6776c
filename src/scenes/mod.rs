pub mod formation;
pub mod game;
pub mod game_over;
pub mod opening;
pub mod pause;
pub mod stack;
pub mod transfer;

use log::info;
use rand::rngs::StdRng;

use crate::config::Settings;
use crate::input::{InputState, Key};
use crate::math::{Boundaries, Size};
use crate::progress::Progress;
use crate::sound::{Sound, SoundTrigger};
use crate::sprites::SpriteSheet;
use crate::surface::DrawSurface;

pub use game::GameScene;
pub use game_over::GameOverScene;
pub use opening::OpeningScene;
pub use pause::PauseScene;
pub use stack::SceneStack;
pub use transfer::TransferScene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Opening,
    Transfer,
    InGame,
    Pause,
    GameOver,
}

/// What the scene stack should do after a hook returns.
pub enum Transition {
    None,
    /// Tear down the top, clear the stack, set up and push the new scene.
    GoTo(Box<dyn Scene>),
    /// Overlay: set up and push, keeping everything beneath.
    Push(Box<dyn Scene>),
    /// Remove the overlay and resume the scene beneath.
    Pop,
}

impl Transition {
    pub fn go_to(scene: impl Scene + 'static) -> Self {
        Transition::GoTo(Box::new(scene))
    }

    pub fn push(scene: impl Scene + 'static) -> Self {
        Transition::Push(Box::new(scene))
    }
}

/// Everything a scene may read or change during one hook call. Owned by the
/// controller and rebuilt for every call.
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub progress: &'a mut Progress,
    pub input: &'a InputState,
    pub boundaries: Boundaries,
    pub canvas: Size,
    pub sprites: &'a SpriteSheet,
    pub sound: &'a mut dyn SoundTrigger,
    pub rng: &'a mut StdRng,
    /// Simulation clock in seconds.
    pub now: f64,
    pub dt: f32,
}

impl Context<'_> {
    /// Add points, paying out (and announcing) any shield bonus they cross.
    pub fn award(&mut self, points: u32) {
        let bonus = self.progress.add_score(points, self.settings.shield_bonus_every);
        for _ in 0..bonus {
            self.sound.play(Sound::Powerup);
        }
        if bonus > 0 {
            info!(
                "score {} earned {} bonus shield(s), now {}",
                self.progress.score, bonus, self.progress.shields
            );
        }
    }
}

/// One phase of the game. Every hook has a default, so a scene only writes
/// the ones it cares about.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Called once, right before the scene is pushed.
    fn setup(&mut self, _ctx: &mut Context) {}

    /// Called once, when the scene leaves the stack.
    fn teardown(&mut self, _ctx: &mut Context) {}

    fn update(&mut self, _ctx: &mut Context) -> Transition {
        Transition::None
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface);

    fn on_key_down(&mut self, _ctx: &mut Context, _key: Key) -> Transition {
        Transition::None
    }

    /// The play field changed size; pull anything outside back in.
    fn on_resize(&mut self, _boundaries: &Boundaries) {}

    fn as_game(&self) -> Option<&GameScene> {
        None
    }

    fn as_game_mut(&mut self) -> Option<&mut GameScene> {
        None
    }
}
