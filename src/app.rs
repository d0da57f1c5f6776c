use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::error::GameResult;
use crate::input::{InputState, Key};
use crate::math::{Boundaries, Size};
use crate::progress::Progress;
use crate::scenes::{Context, GameScene, OpeningScene, SceneKind, SceneStack};
use crate::sound::SoundTrigger;
use crate::sprites::SpriteSheet;
use crate::surface::DrawSurface;

/// Everything a scene hook may touch, kept apart from the scene stack so both
/// can be borrowed at once.
struct Session {
    settings: Settings,
    progress: Progress,
    input: InputState,
    boundaries: Boundaries,
    canvas: Size,
    sprites: SpriteSheet,
    sound: Box<dyn SoundTrigger>,
    rng: StdRng,
    ticks: u64,
    now: f64,
}

impl Session {
    fn context(&mut self) -> Context<'_> {
        Context {
            settings: &self.settings,
            progress: &mut self.progress,
            input: &self.input,
            boundaries: self.boundaries,
            canvas: self.canvas,
            sprites: &self.sprites,
            sound: self.sound.as_mut(),
            rng: &mut self.rng,
            now: self.now,
            dt: self.settings.dt(),
        }
    }
}

pub struct App {
    pub should_quit: bool,
    scenes: SceneStack,
    session: Session,
}

impl App {
    pub fn new(settings: Settings, sound: Box<dyn SoundTrigger>) -> GameResult<Self> {
        settings.validate()?;
        let sprites = SpriteSheet::from_settings(&settings)?;
        let canvas = Size::new(settings.canvas_width, settings.canvas_height)?;
        let boundaries =
            Boundaries::from_canvas(canvas.width, canvas.height, settings.field_padding)?;
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Session {
            progress: Progress::new(&settings),
            input: InputState::new(None),
            boundaries,
            canvas,
            sprites,
            sound,
            rng,
            ticks: 0,
            now: 0.0,
            settings,
        };
        let mut scenes = SceneStack::new();
        scenes.go_to(Box::new(OpeningScene::new()), &mut session.context());

        Ok(Self {
            should_quit: false,
            scenes,
            session,
        })
    }

    /// Terminals without release events only repeat presses, so held keys
    /// then expire after `key_hold_ticks`.
    pub fn set_release_events(&mut self, enabled: bool) {
        let hold = self.session.settings.key_hold_ticks;
        self.session.input.set_release_events(enabled, hold);
    }

    /// One fixed simulation step on the active scene.
    pub fn tick(&mut self) {
        let session = &mut self.session;
        session.ticks += 1;
        session.now = session.ticks as f64 * session.settings.dt() as f64;
        session.input.set_tick(session.ticks);

        let mut ctx = session.context();
        let Some(scene) = self.scenes.top_mut() else {
            error!("tick with an empty scene stack");
            debug_assert!(false, "tick with an empty scene stack");
            return;
        };
        let transition = scene.update(&mut ctx);
        self.scenes.apply(transition, &mut ctx);
    }

    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();
        let ctx = self.session.context();
        if let Some(scene) = self.scenes.top() {
            scene.draw(&ctx, surface);
        }
    }

    pub fn on_key_down(&mut self, key: Key) {
        self.session.input.press(key);
        match key {
            Key::Mute => {
                self.session.sound.mute();
                info!("sound muted: {}", self.session.sound.is_muted());
                return;
            }
            Key::Quit if self.scene_kind() == Some(SceneKind::Opening) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        let mut ctx = self.session.context();
        if let Some(scene) = self.scenes.top_mut() {
            let transition = scene.on_key_down(&mut ctx, key);
            self.scenes.apply(transition, &mut ctx);
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.session.input.release(key);
    }

    /// Pointer position in canvas units.
    pub fn on_pointer(&mut self, x: f32, y: f32) {
        self.session.input.set_pointer(x, y);
    }

    /// The canvas changed size: rebuild the field and pull every entity of
    /// every scene on the stack back inside it.
    pub fn on_resize(&mut self, width: f32, height: f32) -> GameResult<()> {
        let boundaries =
            Boundaries::from_canvas(width, height, self.session.settings.field_padding)?;
        self.session.canvas = Size::new(width, height)?;
        self.session.boundaries = boundaries;
        self.scenes.resize(&boundaries);
        info!("canvas resized to {:.0}x{:.0}", width, height);
        Ok(())
    }

    /// Raw terminal key. Ctrl+C always quits.
    pub fn on_key(&mut self, event: KeyEvent) {
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        let Some(key) = key_for(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press if self.session.input.is_auto_repeat(key) => {
                self.session.input.press(key)
            }
            KeyEventKind::Press => self.on_key_down(key),
            KeyEventKind::Repeat => self.session.input.press(key),
            KeyEventKind::Release => self.on_key_up(key),
        }
    }

    pub fn progress(&self) -> &Progress {
        &self.session.progress
    }

    pub fn settings(&self) -> &Settings {
        &self.session.settings
    }

    pub fn boundaries(&self) -> Boundaries {
        self.session.boundaries
    }

    pub fn canvas(&self) -> Size {
        self.session.canvas
    }

    pub fn now(&self) -> f64 {
        self.session.now
    }

    pub fn is_muted(&self) -> bool {
        self.session.sound.is_muted()
    }

    pub fn scene_kind(&self) -> Option<SceneKind> {
        self.scenes.top_kind()
    }

    pub fn scenes(&self) -> &SceneStack {
        &self.scenes
    }

    /// The running level, even while paused beneath an overlay.
    pub fn game(&self) -> Option<&GameScene> {
        self.scenes.iter().find_map(|scene| scene.as_game())
    }

    pub fn game_mut(&mut self) -> Option<&mut GameScene> {
        self.scenes.iter_mut().find_map(|scene| scene.as_game_mut())
    }
}

fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Key::Mute),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        _ => None,
    }
}
