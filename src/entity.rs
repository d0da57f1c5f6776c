//! Every actor on the field is an [`Entity`]: shared geometry plus a tagged
//! [`EntityKind`] carrying whatever state only that kind needs.

use crate::error::{GameError, GameResult};
use crate::math::{clamp, Boundaries, Size, Vector2};
use crate::sprites::{Sprite, SpriteSheet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// Immune to damage until the clock reaches `immune_until`.
    Spaceship { immune_until: f64 },
    Bullet,
    /// Grid slot fixed at spawn; `variant` only changes the look.
    Ufo { row: usize, column: usize, variant: u8 },
    Bomb,
    Coin { points: u32 },
    Powerup,
    /// `heading` components are always +1 or -1.
    Asteroid {
        health: u32,
        heading: Vector2,
        immune_until: f64,
    },
}

/// Shrinks a hit box per edge. Negative values grow it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    pub const NONE: Padding = Padding { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };

    pub fn uniform(amount: f32) -> Self {
        Padding { top: amount, bottom: amount, left: amount, right: amount }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vector2,
    pub speed: f32,
    size: Option<Size>,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Vector2, speed: f32) -> GameResult<Self> {
        let position = Vector2::checked(position.x, position.y)?;
        if !speed.is_finite() || speed < 0.0 {
            return Err(GameError::InvalidSetting { name: "speed", value: speed });
        }
        Ok(Entity { kind, position, speed, size: None })
    }

    /// Fix the size up front instead of waiting for the sprite sheet.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sprite(&self) -> Sprite {
        match self.kind {
            EntityKind::Spaceship { .. } => Sprite::Spaceship,
            EntityKind::Bullet => Sprite::Bullet,
            EntityKind::Ufo { variant, .. } => Sprite::Ufo(variant),
            EntityKind::Bomb => Sprite::Bomb,
            EntityKind::Coin { .. } => Sprite::Coin,
            EntityKind::Powerup => Sprite::Powerup,
            EntityKind::Asteroid { .. } => Sprite::Asteroid,
        }
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }

    /// Pick up the sprite's size once the sheet knows it. Never changes a size
    /// that is already set.
    pub fn resolve_size(&mut self, sheet: &SpriteSheet) {
        if self.size.is_none() {
            self.size = sheet.size_of(self.sprite());
        }
    }

    pub fn move_toward(&mut self, direction: Direction, dt: f32) {
        let step = self.speed * dt;
        match direction {
            Direction::Left => self.translate(-step, 0.0),
            Direction::Right => self.translate(step, 0.0),
            Direction::Up => self.translate(0.0, -step),
            Direction::Down => self.translate(0.0, step),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        if !self.is_ready() {
            return;
        }
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Padded box centred on `position`; `None` until the size is known.
    pub fn bounds(&self, padding: Padding) -> Option<Rect> {
        let size = self.size?;
        let half_w = size.width / 2.0;
        let half_h = size.height / 2.0;
        Some(Rect {
            left: self.position.x - half_w + padding.left,
            right: self.position.x + half_w - padding.right,
            top: self.position.y - half_h + padding.top,
            bottom: self.position.y + half_h - padding.bottom,
        })
    }

    pub fn is_colliding_with(&self, other: &Entity, padding: Padding) -> bool {
        let (Some(a), Some(b)) = (self.bounds(padding), other.bounds(padding)) else {
            return false;
        };
        a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
    }

    pub fn top_edge(&self) -> Option<f32> {
        self.size.map(|s| self.position.y - s.height / 2.0)
    }

    pub fn bottom_edge(&self) -> Option<f32> {
        self.size.map(|s| self.position.y + s.height / 2.0)
    }

    pub fn keep_in_boundaries(&mut self, boundaries: &Boundaries) {
        self.position.x = clamp(self.position.x, boundaries.left, boundaries.right);
        self.position.y = clamp(self.position.y, boundaries.top, boundaries.bottom);
    }

    /// Kinds without a cooldown can always be hit.
    pub fn can_hit(&self, now: f64) -> bool {
        match self.kind {
            EntityKind::Spaceship { immune_until } | EntityKind::Asteroid { immune_until, .. } => {
                now >= immune_until
            }
            _ => true,
        }
    }

    pub fn start_hit_cooldown(&mut self, now: f64, duration: f32) {
        match &mut self.kind {
            EntityKind::Spaceship { immune_until } | EntityKind::Asteroid { immune_until, .. } => {
                *immune_until = now + duration as f64;
            }
            _ => {}
        }
    }

    /// Straight-line travel that reflects off every edge of the field.
    pub fn bounce(&mut self, boundaries: &Boundaries, dt: f32) {
        if !self.is_ready() {
            return;
        }
        let EntityKind::Asteroid { heading, .. } = &mut self.kind else {
            return;
        };
        let step = self.speed * dt;
        self.position.x += heading.x * step;
        self.position.y += heading.y * step;

        if self.position.x <= boundaries.left {
            heading.x = 1.0;
        } else if self.position.x >= boundaries.right {
            heading.x = -1.0;
        }
        if self.position.y <= boundaries.top {
            heading.y = 1.0;
        } else if self.position.y >= boundaries.bottom {
            heading.y = -1.0;
        }
        self.keep_in_boundaries(boundaries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(kind: EntityKind, x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(kind, Vector2::new(x, y), 100.0)
            .unwrap()
            .with_size(Size::new(w, h).unwrap())
    }

    fn field() -> Boundaries {
        Boundaries::new(0.0, 500.0, 0.0, 800.0)
    }

    #[test]
    fn bad_speed_is_reported_as_a_speed() {
        let at = Vector2::new(1.0, 1.0);
        for speed in [-1.0, f32::NAN] {
            let err = Entity::new(EntityKind::Bomb, at, speed).unwrap_err();
            assert!(matches!(err, GameError::InvalidSetting { name: "speed", .. }));
        }
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut e = sized(EntityKind::Bullet, 40.0, 60.0, 2.0, 6.0);
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            e.move_toward(direction, 0.0);
        }
        assert_eq!(e.position, Vector2::new(40.0, 60.0));
    }

    #[test]
    fn screen_y_grows_downward() {
        let mut e = sized(EntityKind::Bomb, 40.0, 60.0, 2.0, 6.0);
        e.move_toward(Direction::Down, 0.5);
        assert_eq!(e.position.y, 110.0);
        e.move_toward(Direction::Up, 0.25);
        assert_eq!(e.position.y, 85.0);
        e.move_toward(Direction::Left, 0.1);
        assert!((e.position.x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn unsized_entity_ignores_moves_and_collisions() {
        let mut ghost = Entity::new(EntityKind::Bomb, Vector2::new(10.0, 10.0), 50.0).unwrap();
        ghost.move_toward(Direction::Down, 1.0);
        assert_eq!(ghost.position, Vector2::new(10.0, 10.0));

        let solid = sized(EntityKind::Bullet, 10.0, 10.0, 20.0, 20.0);
        assert!(!ghost.is_colliding_with(&solid, Padding::NONE));
        assert!(!solid.is_colliding_with(&ghost, Padding::NONE));
    }

    #[test]
    fn resolve_size_fills_once() {
        let mut sheet = SpriteSheet::empty();
        let mut bomb = Entity::new(EntityKind::Bomb, Vector2::new(0.0, 0.0), 1.0).unwrap();
        bomb.resolve_size(&sheet);
        assert!(!bomb.is_ready());

        sheet.insert(Sprite::Bomb, Size::new(6.0, 12.0).unwrap());
        bomb.resolve_size(&sheet);
        assert_eq!(bomb.size(), Some(Size::new(6.0, 12.0).unwrap()));

        sheet.insert(Sprite::Bomb, Size::new(99.0, 99.0).unwrap());
        bomb.resolve_size(&sheet);
        assert_eq!(bomb.size(), Some(Size::new(6.0, 12.0).unwrap()));
    }

    #[test]
    fn rejects_non_finite_spawn() {
        assert!(Entity::new(EntityKind::Bullet, Vector2::new(f32::NAN, 0.0), 1.0).is_err());
        assert!(Entity::new(EntityKind::Bullet, Vector2::new(0.0, 0.0), f32::INFINITY).is_err());
        assert!(Entity::new(EntityKind::Bullet, Vector2::new(0.0, 0.0), -3.0).is_err());
    }

    #[test]
    fn collision_is_symmetric() {
        let cases = [
            ((0.0, 0.0, 10.0, 10.0), (5.0, 5.0, 10.0, 10.0)),
            ((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 10.0, 10.0)),
            ((0.0, 0.0, 4.0, 30.0), (3.0, 14.0, 2.0, 2.0)),
            ((100.0, 100.0, 8.0, 8.0), (0.0, 0.0, 8.0, 8.0)),
            ((-20.0, 7.0, 50.0, 1.0), (4.0, 7.5, 1.0, 1.0)),
        ];
        for ((ax, ay, aw, ah), (bx, by, bw, bh)) in cases {
            let a = sized(EntityKind::Bullet, ax, ay, aw, ah);
            let b = sized(EntityKind::Bomb, bx, by, bw, bh);
            assert_eq!(
                a.is_colliding_with(&b, Padding::NONE),
                b.is_colliding_with(&a, Padding::NONE)
            );
        }
    }

    #[test]
    fn padding_shrinks_hit_boxes() {
        let a = sized(EntityKind::Bullet, 0.0, 0.0, 10.0, 10.0);
        let b = sized(EntityKind::Ufo { row: 0, column: 0, variant: 0 }, 9.0, 0.0, 10.0, 10.0);
        assert!(a.is_colliding_with(&b, Padding::NONE));
        assert!(!a.is_colliding_with(&b, Padding::uniform(1.0)));
    }

    #[test]
    fn keep_in_boundaries_clamps() {
        let b = field();
        let inputs = [(-5.0, 10.0), (900.0, 10.0), (30.0, -1.0), (30.0, 900.0), (-1e6, 1e6)];
        for (x, y) in inputs {
            let mut e = sized(EntityKind::Spaceship { immune_until: 0.0 }, x, y, 10.0, 10.0);
            e.keep_in_boundaries(&b);
            assert!(b.contains(e.position), "{:?} escaped", e.position);
        }

        let mut inside = sized(EntityKind::Spaceship { immune_until: 0.0 }, 123.5, 77.25, 10.0, 10.0);
        inside.keep_in_boundaries(&b);
        assert_eq!(inside.position, Vector2::new(123.5, 77.25));
    }

    #[test]
    fn hit_cooldown_blocks_until_deadline() {
        let mut ship = sized(EntityKind::Spaceship { immune_until: 0.0 }, 0.0, 0.0, 4.0, 4.0);
        assert!(ship.can_hit(0.0));
        ship.start_hit_cooldown(2.0, 1.0);
        assert!(!ship.can_hit(2.5));
        assert!(ship.can_hit(3.0));

        let coin = sized(EntityKind::Coin { points: 5 }, 0.0, 0.0, 4.0, 4.0);
        assert!(coin.can_hit(0.0));
    }

    #[test]
    fn asteroid_reflects_off_edges() {
        let b = field();
        let mut rock = sized(
            EntityKind::Asteroid {
                health: 3,
                heading: Vector2::new(1.0, -1.0),
                immune_until: 0.0,
            },
            795.0,
            3.0,
            10.0,
            10.0,
        );
        rock.bounce(&b, 0.1);
        assert_eq!(rock.position, Vector2::new(800.0, 0.0));
        match rock.kind {
            EntityKind::Asteroid { heading, .. } => assert_eq!(heading, Vector2::new(-1.0, 1.0)),
            _ => unreachable!(),
        }
        rock.bounce(&b, 0.1);
        assert_eq!(rock.position, Vector2::new(790.0, 10.0));
    }
}
