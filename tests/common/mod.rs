#![allow(dead_code)]

use ufo_hunter::app::App;
use ufo_hunter::config::Settings;
use ufo_hunter::entity::{Entity, EntityKind};
use ufo_hunter::input::Key;
use ufo_hunter::math::{Size, Vector2};
use ufo_hunter::scenes::SceneKind;
use ufo_hunter::sound::RecordingSounds;

/// Seeded, and no UFO ever drops a bomb unless a test says so.
pub fn quiet_settings() -> Settings {
    Settings {
        seed: Some(42),
        bomb_frequency: 0.0,
        bomb_frequency_per_level: 0.0,
        ..Settings::default()
    }
}

pub fn new_app(settings: Settings) -> (App, RecordingSounds) {
    let sounds = RecordingSounds::new();
    let app = App::new(settings, Box::new(sounds.clone())).expect("valid settings");
    (app, sounds)
}

pub fn tap(app: &mut App, key: Key) {
    app.on_key_down(key);
    app.on_key_up(key);
}

/// Title -> transfer -> first tick of the level.
pub fn start_game(app: &mut App) {
    tap(app, Key::Fire);
    assert_eq!(app.scene_kind(), Some(SceneKind::Transfer));
    for _ in 0..140 {
        app.tick();
    }
    assert_eq!(app.scene_kind(), Some(SceneKind::InGame));
}

pub fn sized(kind: EntityKind, x: f32, y: f32, speed: f32, size: (f32, f32)) -> Entity {
    Entity::new(kind, Vector2::new(x, y), speed)
        .expect("finite spawn")
        .with_size(Size::new(size.0, size.1).expect("valid size"))
}

pub fn ship_position(app: &App) -> Vector2 {
    app.game()
        .and_then(|game| game.ship())
        .map(|ship| ship.position)
        .expect("a ship in play")
}
