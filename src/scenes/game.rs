//! One level of play: the ship, the UFO formation and everything they shoot,
//! drop or bump into.

use log::{debug, error, info};
use rand::Rng;

use super::formation::{frontline, Formation};
use super::{Context, GameOverScene, PauseScene, Scene, SceneKind, TransferScene, Transition};
use crate::entity::{Direction, Entity, EntityKind, Padding};
use crate::input::Key;
use crate::math::{distance, Boundaries, Vector2};
use crate::sound::Sound;
use crate::sprites::{Sprite, SpriteSheet};
use crate::surface::{DrawSurface, Rgb, TextStyle};

pub struct GameScene {
    level: u32,
    ship: Option<Entity>,
    bullets: Vec<Entity>,
    ufos: Vec<Entity>,
    bombs: Vec<Entity>,
    coins: Vec<Entity>,
    powerups: Vec<Entity>,
    asteroids: Vec<Entity>,
    formation: Formation,
    last_shot: Option<f64>,
    ufo_speed: f32,
    bomb_speed: f32,
    bomb_frequency: f32,
    defeated: bool,
}

impl GameScene {
    /// An empty level; `setup` spawns the ship and the formation.
    pub fn new(level: u32) -> Self {
        GameScene {
            level,
            ship: None,
            bullets: Vec::new(),
            ufos: Vec::new(),
            bombs: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            asteroids: Vec::new(),
            formation: Formation::new(0.0),
            last_shot: None,
            ufo_speed: 0.0,
            bomb_speed: 0.0,
            bomb_frequency: 0.0,
            defeated: false,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ship(&self) -> Option<&Entity> {
        self.ship.as_ref()
    }

    pub fn ship_mut(&mut self) -> Option<&mut Entity> {
        self.ship.as_mut()
    }

    pub fn bullets(&self) -> &[Entity] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.bullets
    }

    pub fn ufos(&self) -> &[Entity] {
        &self.ufos
    }

    pub fn ufos_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.ufos
    }

    pub fn bombs(&self) -> &[Entity] {
        &self.bombs
    }

    pub fn bombs_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.bombs
    }

    pub fn coins(&self) -> &[Entity] {
        &self.coins
    }

    pub fn coins_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.coins
    }

    pub fn powerups(&self) -> &[Entity] {
        &self.powerups
    }

    pub fn powerups_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.powerups
    }

    pub fn asteroids(&self) -> &[Entity] {
        &self.asteroids
    }

    pub fn asteroids_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.asteroids
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    // ── Spawning ───────────────────────────────────────────────────────

    fn spawn_formation(&mut self, ctx: &mut Context) {
        let settings = ctx.settings;
        let b = ctx.boundaries;
        let variant = (self.level % 2) as u8;
        let start_x = b.center_x() - (settings.ufo_columns as f32 - 1.0) * settings.ufo_h_spacing / 2.0;
        let start_y = b.top + settings.ufo_top_offset;
        for row in 0..settings.ufo_rows {
            for column in 0..settings.ufo_columns {
                let kind = EntityKind::Ufo { row, column, variant };
                let x = start_x + column as f32 * settings.ufo_h_spacing;
                let y = start_y + row as f32 * settings.ufo_v_spacing;
                if let Some(ufo) = spawn(kind, x, y, self.ufo_speed, ctx.sprites) {
                    self.ufos.push(ufo);
                }
            }
        }
    }

    fn spawn_asteroids(&mut self, ctx: &mut Context) {
        let settings = ctx.settings;
        if self.level < settings.asteroid_min_level {
            return;
        }
        let count = (self.level - settings.asteroid_min_level + 1).min(settings.asteroid_max);
        let b = ctx.boundaries;
        let below_formation = b.top
            + settings.ufo_top_offset
            + settings.ufo_rows as f32 * settings.ufo_v_spacing;
        let y = below_formation.min(b.bottom);
        for _ in 0..count {
            let x = ctx.rng.gen_range(b.left..=b.right);
            let heading_x = if ctx.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let kind = EntityKind::Asteroid {
                health: settings.asteroid_health,
                heading: Vector2::new(heading_x, 1.0),
                immune_until: 0.0,
            };
            if let Some(rock) = spawn(kind, x, y, settings.asteroid_speed, ctx.sprites) {
                self.asteroids.push(rock);
            }
        }
        debug!("level {} spawned {} asteroid(s)", self.level, count);
    }

    // ── Per-tick steps ─────────────────────────────────────────────────

    fn resolve_sizes(&mut self, sprites: &SpriteSheet) {
        if let Some(ship) = self.ship.as_mut() {
            ship.resolve_size(sprites);
        }
        for entity in self
            .bullets
            .iter_mut()
            .chain(self.ufos.iter_mut())
            .chain(self.bombs.iter_mut())
            .chain(self.coins.iter_mut())
            .chain(self.powerups.iter_mut())
            .chain(self.asteroids.iter_mut())
        {
            entity.resolve_size(sprites);
        }
    }

    fn move_ship(&mut self, ctx: &Context) {
        let Some(ship) = self.ship.as_mut() else {
            return;
        };
        let left = ctx.input.is_pressed(Key::Left);
        let right = ctx.input.is_pressed(Key::Right);
        if left && !right {
            ship.move_toward(Direction::Left, ctx.dt);
        } else if right && !left {
            ship.move_toward(Direction::Right, ctx.dt);
        } else if !left && !right {
            if let Some(pointer) = ctx.input.pointer().filter(|p| p.active) {
                let gap = distance(pointer.x, ship.position.x);
                if gap > ctx.settings.pointer_dead_zone {
                    let step = (ship.speed * ctx.dt).min(gap);
                    let dx = if pointer.x < ship.position.x { -step } else { step };
                    ship.translate(dx, 0.0);
                }
            }
        }
        ship.keep_in_boundaries(&ctx.boundaries);
    }

    fn fire(&mut self, ctx: &mut Context) {
        if !ctx.input.is_pressed(Key::Fire) {
            return;
        }
        let ready = match self.last_shot {
            None => true,
            Some(at) => ctx.now - at > ctx.settings.bullet_min_interval as f64,
        };
        if !ready {
            return;
        }
        let Some(ship) = self.ship.as_ref() else {
            return;
        };
        let Some(top) = ship.top_edge() else {
            return;
        };
        let spread = ctx.settings.bullet_spread;
        let offsets = match ctx.progress.powerups {
            0 => vec![0.0],
            1 => vec![-spread, spread],
            _ => vec![-spread, 0.0, spread],
        };
        let x = ship.position.x;
        for offset in offsets {
            if let Some(bullet) =
                spawn(EntityKind::Bullet, x + offset, top, ctx.settings.bullet_speed, ctx.sprites)
            {
                self.bullets.push(bullet);
            }
        }
        ctx.sound.play(Sound::Shot);
        self.last_shot = Some(ctx.now);
    }

    fn advance_projectiles(&mut self, ctx: &Context) {
        let b = ctx.boundaries;
        for bullet in self.bullets.iter_mut() {
            bullet.move_toward(Direction::Up, ctx.dt);
        }
        self.bullets.retain(|bullet| bullet.position.y >= b.top);

        for falling in [&mut self.bombs, &mut self.coins, &mut self.powerups] {
            for entity in falling.iter_mut() {
                entity.move_toward(Direction::Down, ctx.dt);
            }
            falling.retain(|entity| entity.position.y <= b.bottom);
        }

        for rock in self.asteroids.iter_mut() {
            rock.bounce(&b, ctx.dt);
        }
    }

    fn drop_bombs(&mut self, ctx: &mut Context) {
        let chance = (self.bomb_frequency * ctx.dt).clamp(0.0, 1.0) as f64;
        for index in frontline(&self.ufos).into_values() {
            if !ctx.rng.gen_bool(chance) {
                continue;
            }
            let at = self.ufos[index].position;
            if let Some(bomb) = spawn(EntityKind::Bomb, at.x, at.y, self.bomb_speed, ctx.sprites) {
                self.bombs.push(bomb);
            }
        }
    }

    fn resolve_collisions(&mut self, ctx: &mut Context) {
        let padding = Padding::uniform(ctx.settings.collision_padding);
        let mut spent = vec![false; self.bullets.len()];

        // Bullets against UFOs; each bullet takes out at most one.
        let mut shot_down = vec![false; self.ufos.len()];
        for (u, ufo) in self.ufos.iter().enumerate() {
            for (b, bullet) in self.bullets.iter().enumerate() {
                if !spent[b] && bullet.is_colliding_with(ufo, padding) {
                    spent[b] = true;
                    shot_down[u] = true;
                    break;
                }
            }
        }
        let wrecks: Vec<Vector2> = self
            .ufos
            .iter()
            .zip(&shot_down)
            .filter(|(_, &hit)| hit)
            .map(|(ufo, _)| ufo.position)
            .collect();
        compact(&mut self.ufos, &shot_down);
        let ufo_points = ctx.settings.ufo_points;
        for at in wrecks {
            ctx.sound.play(Sound::UfoDeath);
            ctx.award(ufo_points);
            self.roll_drops(ctx, at);
        }

        // Bullets against asteroids.
        let mut crushed = vec![false; self.asteroids.len()];
        for (a, rock) in self.asteroids.iter_mut().enumerate() {
            for (b, bullet) in self.bullets.iter().enumerate() {
                if spent[b] || !bullet.is_colliding_with(rock, padding) {
                    continue;
                }
                spent[b] = true;
                if !rock.can_hit(ctx.now) {
                    continue;
                }
                rock.start_hit_cooldown(ctx.now, ctx.settings.asteroid_hit_cooldown);
                if let EntityKind::Asteroid { health, .. } = &mut rock.kind {
                    *health = health.saturating_sub(1);
                    crushed[a] = *health == 0;
                }
            }
        }
        let asteroid_points = ctx.settings.asteroid_points;
        for _ in crushed.iter().filter(|&&gone| gone) {
            ctx.sound.play(Sound::Explosion);
            ctx.award(asteroid_points);
        }
        compact(&mut self.asteroids, &crushed);
        compact(&mut self.bullets, &spent);

        let Some(ship) = self.ship.as_mut() else {
            return;
        };

        // Bombs and asteroids against the ship.
        let mut landed = vec![false; self.bombs.len()];
        for (i, bomb) in self.bombs.iter().enumerate() {
            if bomb.is_colliding_with(ship, padding) {
                landed[i] = true;
                self.defeated |= damage_ship(ship, ctx, 1);
            }
        }
        compact(&mut self.bombs, &landed);
        for rock in &self.asteroids {
            if rock.is_colliding_with(ship, padding) {
                self.defeated |= damage_ship(ship, ctx, 1);
            }
        }

        // Pickups.
        let mut collected = vec![false; self.coins.len()];
        for (i, coin) in self.coins.iter().enumerate() {
            if !coin.is_colliding_with(ship, padding) {
                continue;
            }
            collected[i] = true;
            if let EntityKind::Coin { points } = coin.kind {
                ctx.award(points);
            }
            ctx.sound.play(Sound::Coin);
        }
        compact(&mut self.coins, &collected);

        let mut collected = vec![false; self.powerups.len()];
        for (i, powerup) in self.powerups.iter().enumerate() {
            if !powerup.is_colliding_with(ship, padding) {
                continue;
            }
            collected[i] = true;
            ctx.sound.play(Sound::Powerup);
            let settings = ctx.settings;
            if ctx.progress.add_powerup(settings.max_powerups) {
                info!("power-up collected, spread level {}", ctx.progress.powerups);
            } else {
                ctx.award(settings.powerup_surplus_bonus);
            }
        }
        compact(&mut self.powerups, &collected);
    }

    fn roll_drops(&mut self, ctx: &mut Context, at: Vector2) {
        let settings = ctx.settings;
        if ctx.rng.gen_bool(settings.coin_drop_chance) {
            let kind = EntityKind::Coin { points: settings.coin_points };
            if let Some(coin) = spawn(kind, at.x, at.y, settings.coin_speed, ctx.sprites) {
                self.coins.push(coin);
            }
        }
        if ctx.rng.gen_bool(settings.powerup_drop_chance) {
            if let Some(powerup) =
                spawn(EntityKind::Powerup, at.x, at.y, settings.powerup_speed, ctx.sprites)
            {
                self.powerups.push(powerup);
            }
        }
    }

    /// The line the formation must not reach: the ship's top edge, or the
    /// bottom of the field while the ship has no size yet.
    fn invasion_line(&self, boundaries: &Boundaries) -> f32 {
        self.ship
            .as_ref()
            .and_then(|ship| ship.top_edge())
            .unwrap_or(boundaries.bottom)
    }

    fn outcome(&mut self, ctx: &mut Context) -> Transition {
        if self.defeated {
            return Transition::go_to(GameOverScene::new());
        }
        if self.ufos.is_empty() {
            ctx.progress.level += 1;
            info!("level {} cleared with score {}", self.level, ctx.progress.score);
            return Transition::go_to(TransferScene::new(ctx.progress.level, ctx.settings));
        }
        let line = self.invasion_line(&ctx.boundaries);
        let invaded = frontline(&self.ufos)
            .into_values()
            .filter_map(|index| self.ufos[index].bottom_edge())
            .any(|bottom| bottom >= line);
        if invaded {
            info!("formation reached the ship on level {}", self.level);
            return Transition::go_to(GameOverScene::new());
        }
        Transition::None
    }
}

impl Scene for GameScene {
    fn kind(&self) -> SceneKind {
        SceneKind::InGame
    }

    fn setup(&mut self, ctx: &mut Context) {
        let settings = ctx.settings;
        self.ufo_speed = settings.ufo_speed_for(self.level);
        self.bomb_speed = settings.bomb_speed_for(self.level);
        self.bomb_frequency = settings.bomb_frequency_for(self.level);
        self.formation = Formation::new(settings.ufo_sink_distance);

        let b = ctx.boundaries;
        let ship_kind = EntityKind::Spaceship { immune_until: 0.0 };
        self.ship = spawn(ship_kind, b.center_x(), b.bottom, settings.spaceship_speed, ctx.sprites);
        self.spawn_formation(ctx);
        self.spawn_asteroids(ctx);
        info!(
            "level {} started: {} ufos, ufo speed {:.1}, bomb speed {:.1}",
            self.level,
            self.ufos.len(),
            self.ufo_speed,
            self.bomb_speed
        );
    }

    fn teardown(&mut self, ctx: &mut Context) {
        debug!(
            "leaving level {} with {} ufos left, score {}",
            self.level,
            self.ufos.len(),
            ctx.progress.score
        );
    }

    fn update(&mut self, ctx: &mut Context) -> Transition {
        self.resolve_sizes(ctx.sprites);
        self.move_ship(ctx);
        self.fire(ctx);
        self.advance_projectiles(ctx);
        self.formation.advance(&mut self.ufos, self.ufo_speed, ctx.dt, &ctx.boundaries);
        self.drop_bombs(ctx);
        self.resolve_collisions(ctx);
        self.outcome(ctx)
    }

    fn draw(&self, ctx: &Context, surface: &mut dyn DrawSurface) {
        let b = ctx.boundaries;
        let hud = TextStyle::left(20.0, Rgb::WHITE);
        let progress = &ctx.progress;
        surface.draw_text(&format!("Score: {}", progress.score), b.left, b.top, hud);
        surface.draw_text(&format!("Level: {}", progress.level), b.left + 200.0, b.top, hud);
        surface.draw_text(&format!("Shields: {}", progress.shields), b.left + 360.0, b.top, hud);
        if progress.powerups > 0 {
            surface.draw_text(
                &format!("Power-ups: {}", progress.powerups),
                b.left + 540.0,
                b.top,
                TextStyle::left(20.0, Rgb::YELLOW),
            );
        }

        for entity in self
            .ufos
            .iter()
            .chain(&self.bombs)
            .chain(&self.coins)
            .chain(&self.powerups)
            .chain(&self.asteroids)
        {
            draw_entity(surface, entity);
        }

        for bullet in &self.bullets {
            if let Some(rect) = bullet.bounds(Padding::NONE) {
                surface.fill_rect(
                    rect.left,
                    rect.top,
                    rect.right - rect.left,
                    rect.bottom - rect.top,
                    Rgb::RED,
                );
            }
        }

        if let Some(ship) = &self.ship {
            // Blink while immune.
            let hidden = !ship.can_hit(ctx.now) && (ctx.now * 10.0) as i64 % 2 == 0;
            if !hidden {
                draw_entity(surface, ship);
            }
        }
    }

    fn on_key_down(&mut self, _ctx: &mut Context, key: Key) -> Transition {
        match key {
            Key::Pause | Key::Escape => Transition::push(PauseScene::new()),
            _ => Transition::None,
        }
    }

    fn on_resize(&mut self, boundaries: &Boundaries) {
        for entity in self
            .bullets
            .iter_mut()
            .chain(self.ufos.iter_mut())
            .chain(self.bombs.iter_mut())
            .chain(self.coins.iter_mut())
            .chain(self.powerups.iter_mut())
            .chain(self.asteroids.iter_mut())
        {
            entity.keep_in_boundaries(boundaries);
        }
        if let Some(ship) = self.ship.as_mut() {
            ship.keep_in_boundaries(boundaries);
            ship.position.y = boundaries.bottom;
        }
    }

    fn as_game(&self) -> Option<&GameScene> {
        Some(self)
    }

    fn as_game_mut(&mut self) -> Option<&mut GameScene> {
        Some(self)
    }
}

/// Create an entity and size it from the sheet. Bad coordinates are a bug,
/// so they fail loudly in debug builds and skip the spawn otherwise.
fn spawn(kind: EntityKind, x: f32, y: f32, speed: f32, sprites: &SpriteSheet) -> Option<Entity> {
    match Entity::new(kind, Vector2::new(x, y), speed) {
        Ok(mut entity) => {
            entity.resolve_size(sprites);
            Some(entity)
        }
        Err(e) => {
            error!("spawn rejected: {}", e);
            debug_assert!(false, "spawn rejected: {}", e);
            None
        }
    }
}

/// Returns `true` when that hit took the last shield.
fn damage_ship(ship: &mut Entity, ctx: &mut Context, amount: u32) -> bool {
    if !ship.can_hit(ctx.now) {
        return false;
    }
    ctx.sound.play(Sound::Explosion);
    let destroyed = ctx.progress.lose_shields(amount);
    ship.start_hit_cooldown(ctx.now, ctx.settings.ship_hit_cooldown);
    info!("ship hit, {} shield(s) left", ctx.progress.shields);
    destroyed
}

fn draw_entity(surface: &mut dyn DrawSurface, entity: &Entity) {
    let Some(size) = entity.size() else {
        return;
    };
    let sprite: Sprite = entity.sprite();
    surface.draw_sprite(
        sprite,
        entity.position.x - size.width / 2.0,
        entity.position.y - size.height / 2.0,
        size.width,
        size.height,
    );
}

/// Drop every item whose flag is set, keeping the rest in order.
fn compact(items: &mut Vec<Entity>, removed: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}
