mod common;

use common::*;
use ufo_hunter::config::Settings;
use ufo_hunter::entity::EntityKind;
use ufo_hunter::input::Key;
use ufo_hunter::scenes::{GameOverScene, SceneKind};
use ufo_hunter::sound::Sound;
use ufo_hunter::surface::RecordingSurface;

#[test]
fn clearing_the_grid_moves_on_to_the_next_level() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);

    // One bullet parked on every UFO.
    let game = app.game_mut().unwrap();
    let targets: Vec<_> = game.ufos().iter().map(|ufo| ufo.position).collect();
    assert_eq!(targets.len(), 32);
    for at in targets {
        let bullet = sized(EntityKind::Bullet, at.x, at.y, 130.0, (4.0, 12.0));
        game.bullets_mut().push(bullet);
    }
    app.tick();

    assert_eq!(sounds.count(Sound::UfoDeath), 32);
    assert_eq!(app.progress().score, 32 * 25);
    assert_eq!(app.progress().level, 2);
    assert_eq!(app.scene_kind(), Some(SceneKind::Transfer));
    assert!(app.game().is_none());

    for _ in 0..140 {
        app.tick();
    }
    let game = app.game().unwrap();
    assert_eq!(game.level(), 2);
    assert_eq!(game.ufos().len(), 32);
    assert!(game.bullets().is_empty());
}

#[test]
fn one_bullet_takes_out_one_of_two_stacked_ufos() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);

    let game = app.game_mut().unwrap();
    let at = game.ufos()[0].position;
    game.ufos_mut()[1].position = at;
    game.bullets_mut().push(sized(EntityKind::Bullet, at.x, at.y, 130.0, (4.0, 12.0)));
    app.tick();

    let game = app.game().unwrap();
    assert_eq!(game.ufos().len(), 31);
    assert!(game.bullets().is_empty());
    assert_eq!(app.progress().score, 25);
    assert_eq!(sounds.count(Sound::UfoDeath), 1);
}

#[test]
fn two_bullets_on_one_ufo_spend_only_one() {
    let (mut app, _) = new_app(quiet_settings());
    start_game(&mut app);

    let game = app.game_mut().unwrap();
    let at = game.ufos()[0].position;
    for _ in 0..2 {
        game.bullets_mut().push(sized(EntityKind::Bullet, at.x, at.y, 130.0, (4.0, 12.0)));
    }
    app.tick();

    let game = app.game().unwrap();
    assert_eq!(game.ufos().len(), 31);
    assert_eq!(game.bullets().len(), 1);
    assert_eq!(app.progress().score, 25);
}

#[test]
fn bullets_leave_through_the_top_exactly_once() {
    let settings = Settings { field_padding: 0.0, ..quiet_settings() };
    let (mut app, _) = new_app(settings);
    start_game(&mut app);

    // Far left of the formation, 100 units below the top edge.
    let bullet = sized(EntityKind::Bullet, 20.0, 100.0, 130.0, (4.0, 12.0));
    app.game_mut().unwrap().bullets_mut().push(bullet);

    for _ in 0..46 {
        app.tick();
    }
    let game = app.game().unwrap();
    assert_eq!(game.bullets().len(), 1);
    assert!(game.bullets()[0].position.y >= 0.0);

    app.tick();
    assert!(app.game().unwrap().bullets().is_empty());
    for _ in 0..10 {
        app.tick();
    }
    assert!(app.game().unwrap().bullets().is_empty());
}

#[test]
fn holding_fire_respects_the_minimum_interval() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);

    app.on_key_down(Key::Fire);
    app.tick();
    assert_eq!(sounds.count(Sound::Shot), 1);
    assert_eq!(app.game().unwrap().bullets().len(), 1);

    for _ in 0..29 {
        app.tick();
    }
    assert_eq!(sounds.count(Sound::Shot), 1);

    app.tick();
    app.tick();
    assert_eq!(sounds.count(Sound::Shot), 2);
    assert_eq!(app.game().unwrap().bullets().len(), 2);
}

#[test]
fn powerups_widen_the_spread_then_pay_out() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);
    let ship = ship_position(&app);

    for expected in [1, 2, 2] {
        let powerup = sized(EntityKind::Powerup, ship.x, ship.y - 10.0, 60.0, (20.0, 20.0));
        app.game_mut().unwrap().powerups_mut().push(powerup);
        app.tick();
        assert_eq!(app.progress().powerups, expected);
    }
    assert_eq!(app.progress().score, 1_000);
    assert_eq!(sounds.count(Sound::Powerup), 3);
    assert!(app.game().unwrap().powerups().is_empty());

    app.on_key_down(Key::Fire);
    app.tick();
    let xs: Vec<f32> = app.game().unwrap().bullets().iter().map(|b| b.position.x).collect();
    assert_eq!(xs, vec![ship.x - 12.0, ship.x, ship.x + 12.0]);
}

#[test]
fn coins_score_and_can_earn_a_shield() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);
    let ship = ship_position(&app);

    let coin = sized(EntityKind::Coin { points: 10_000 }, ship.x, ship.y - 10.0, 60.0, (20.0, 20.0));
    app.game_mut().unwrap().coins_mut().push(coin);
    app.tick();

    assert_eq!(app.progress().score, 10_000);
    assert_eq!(app.progress().shields, 4);
    assert_eq!(sounds.count(Sound::Coin), 1);
    assert_eq!(sounds.count(Sound::Powerup), 1);
}

#[test]
fn bombs_wear_the_shields_down_to_game_over() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);

    for _ in 0..400 {
        if app.scene_kind() != Some(SceneKind::InGame) {
            break;
        }
        let ship = ship_position(&app);
        let game = app.game_mut().unwrap();
        if game.bombs().is_empty() {
            let bomb = sized(EntityKind::Bomb, ship.x, ship.y - 10.0, 75.0, (12.0, 20.0));
            game.bombs_mut().push(bomb);
        }
        app.tick();
    }

    assert_eq!(app.scene_kind(), Some(SceneKind::GameOver));
    // The hit cooldown lets exactly one bomb per shield through.
    assert_eq!(sounds.count(Sound::Explosion), 3);
    assert_eq!(app.progress().shields, 0);

    let mut surface = RecordingSurface::new();
    app.draw(&mut surface);
    let summary = GameOverScene::summary(1, app.progress().score);
    assert!(surface.texts().contains(&summary.as_str()));

    tap(&mut app, Key::Fire);
    assert_eq!(app.scene_kind(), Some(SceneKind::Opening));
    assert_eq!(app.progress().shields, 3);
    assert_eq!(app.progress().level, 1);
}

#[test]
fn a_ufo_reaching_the_ship_ends_the_game() {
    let (mut app, _) = new_app(quiet_settings());
    start_game(&mut app);
    let ship = ship_position(&app);

    let game = app.game_mut().unwrap();
    let last = game.ufos().len() - 1;
    // Bottom edge lands 6 units past the ship's top edge.
    game.ufos_mut()[last].position.y = ship.y - 12.0 - 10.0;
    app.tick();

    assert_eq!(app.scene_kind(), Some(SceneKind::GameOver));
    assert_eq!(app.progress().shields, 3);
}

#[test]
fn frontline_ufos_bomb_when_the_odds_are_certain() {
    let settings = Settings { bomb_frequency: 60.0, ..quiet_settings() };
    let (mut app, _) = new_app(settings);
    start_game(&mut app);
    app.tick();

    let game = app.game().unwrap();
    assert_eq!(game.bombs().len(), 8);
    let bottom_row: Vec<f32> = game
        .ufos()
        .iter()
        .filter(|ufo| matches!(ufo.kind, EntityKind::Ufo { row: 3, .. }))
        .map(|ufo| ufo.position.x)
        .collect();
    let bomb_xs: Vec<f32> = game.bombs().iter().map(|bomb| bomb.position.x).collect();
    assert_eq!(bomb_xs, bottom_row);
}

#[test]
fn asteroids_take_three_spaced_hits() {
    let settings = Settings { asteroid_min_level: 1, ..quiet_settings() };
    let (mut app, sounds) = new_app(settings);
    start_game(&mut app);
    assert_eq!(app.game().unwrap().asteroids().len(), 1);

    for _ in 0..200 {
        let game = app.game_mut().unwrap();
        let Some(rock) = game.asteroids().first().map(|rock| rock.position) else {
            break;
        };
        let bullet = sized(EntityKind::Bullet, rock.x, rock.y, 130.0, (4.0, 12.0));
        game.bullets_mut().push(bullet);
        app.tick();
    }

    assert!(app.game().unwrap().asteroids().is_empty());
    assert_eq!(sounds.count(Sound::Explosion), 1);
    assert_eq!(app.progress().score, 150);
}

#[test]
fn a_rock_on_the_ship_costs_one_shield_per_cooldown() {
    let settings = Settings { asteroid_min_level: 1, ..quiet_settings() };
    let (mut app, _) = new_app(settings);
    start_game(&mut app);
    let ship = ship_position(&app);

    app.game_mut().unwrap().asteroids_mut()[0].position = ship;
    app.tick();
    assert_eq!(app.progress().shields, 2);
    for _ in 0..10 {
        app.tick();
    }
    assert_eq!(app.progress().shields, 2);
}

#[test]
fn held_keys_steer_the_ship_into_the_wall() {
    let (mut app, _) = new_app(quiet_settings());
    start_game(&mut app);
    let start = ship_position(&app);

    app.on_key_down(Key::Right);
    app.tick();
    let moved = ship_position(&app);
    assert!((moved.x - (start.x + 200.0 / 60.0)).abs() < 1e-3);
    app.on_key_up(Key::Right);

    app.on_key_down(Key::Left);
    for _ in 0..300 {
        app.tick();
    }
    assert_eq!(ship_position(&app).x, app.boundaries().left);
}

#[test]
fn pointer_steering_has_a_dead_zone_and_never_overshoots() {
    let (mut app, _) = new_app(quiet_settings());
    start_game(&mut app);
    let start = ship_position(&app);

    app.on_pointer(start.x + 1.0, 0.0);
    app.tick();
    assert_eq!(ship_position(&app).x, start.x);

    app.on_pointer(start.x + 2.5, 0.0);
    app.tick();
    assert_eq!(ship_position(&app).x, start.x + 2.5);

    app.on_pointer(start.x + 100.0, 0.0);
    app.tick();
    let x = ship_position(&app).x;
    assert!((x - (start.x + 2.5 + 200.0 / 60.0)).abs() < 1e-3);
}

#[test]
fn muting_silences_every_sound() {
    let (mut app, sounds) = new_app(quiet_settings());
    start_game(&mut app);
    tap(&mut app, Key::Mute);
    assert!(app.is_muted());

    app.on_key_down(Key::Fire);
    app.tick();
    assert_eq!(app.game().unwrap().bullets().len(), 1);
    assert!(sounds.played().is_empty());
}
