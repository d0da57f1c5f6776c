//! Sprite identities and their pixel dimensions.
//!
//! The sheet plays the role of loaded image metadata: an entity whose sprite
//! has no entry stays unsized, and an unsized entity neither moves nor collides
//! until the entry shows up.

use std::collections::HashMap;

use crate::config::Settings;
use crate::error::GameResult;
use crate::math::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Spaceship,
    Bullet,
    /// Two looks, picked by level parity.
    Ufo(u8),
    Bomb,
    Coin,
    Powerup,
    Asteroid,
}

#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    sizes: HashMap<Sprite, Size>,
}

impl SpriteSheet {
    pub fn empty() -> Self {
        SpriteSheet::default()
    }

    pub fn from_settings(settings: &Settings) -> GameResult<Self> {
        let mut sheet = SpriteSheet::empty();
        let entries = [
            (Sprite::Spaceship, settings.spaceship_size),
            (Sprite::Bullet, settings.bullet_size),
            (Sprite::Ufo(0), settings.ufo_size),
            (Sprite::Ufo(1), settings.ufo_size),
            (Sprite::Bomb, settings.bomb_size),
            (Sprite::Coin, settings.coin_size),
            (Sprite::Powerup, settings.powerup_size),
            (Sprite::Asteroid, settings.asteroid_size),
        ];
        for (sprite, (width, height)) in entries {
            sheet.insert(sprite, Size::new(width, height)?);
        }
        Ok(sheet)
    }

    pub fn insert(&mut self, sprite: Sprite, size: Size) {
        self.sizes.insert(sprite, size);
    }

    pub fn size_of(&self, sprite: Sprite) -> Option<Size> {
        self.sizes.get(&sprite).copied()
    }
}
