//! Runtime configuration loaded from `ufo-hunter.toml`.
//!
//! [`Settings`] mirrors every constant in [`crate::constants`]. The file only
//! needs the keys you want to override; everything else keeps its compiled
//! default. Set `UFO_HUNTER_CONFIG` to point at a different file.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::constants::*;
use crate::error::{GameError, GameResult};

pub const CONFIG_FILE: &str = "ufo-hunter.toml";
pub const CONFIG_ENV: &str = "UFO_HUNTER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Timing ───────────────────────────────────────────────────────────────
    pub ticks_per_second: f32,
    pub key_hold_ticks: u64,

    // ── Canvas ───────────────────────────────────────────────────────────────
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub field_padding: f32,
    pub cell_width: f32,
    pub cell_height: f32,

    // ── Progress ─────────────────────────────────────────────────────────────
    pub initial_level: u32,
    pub initial_shields: u32,
    pub max_powerups: u32,
    pub shield_bonus_every: u32,

    // ── Spaceship ────────────────────────────────────────────────────────────
    pub spaceship_speed: f32,
    pub ship_hit_cooldown: f32,
    pub pointer_dead_zone: f32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_min_interval: f32,
    pub bullet_spread: f32,

    // ── UFO formation ────────────────────────────────────────────────────────
    pub ufo_rows: usize,
    pub ufo_columns: usize,
    pub ufo_speed: f32,
    pub ufo_speed_per_level: f32,
    pub ufo_sink_distance: f32,
    pub ufo_h_spacing: f32,
    pub ufo_v_spacing: f32,
    pub ufo_top_offset: f32,
    pub ufo_points: u32,

    // ── Bombs ────────────────────────────────────────────────────────────────
    pub bomb_speed: f32,
    pub bomb_speed_per_level: f32,
    pub bomb_frequency: f32,
    pub bomb_frequency_per_level: f32,

    // ── Drops ────────────────────────────────────────────────────────────────
    pub coin_speed: f32,
    pub coin_points: u32,
    pub coin_drop_chance: f64,
    pub powerup_speed: f32,
    pub powerup_drop_chance: f64,
    pub powerup_surplus_bonus: u32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_speed: f32,
    pub asteroid_health: u32,
    pub asteroid_hit_cooldown: f32,
    pub asteroid_points: u32,
    pub asteroid_min_level: u32,
    pub asteroid_max: u32,

    // ── Collision & animation ────────────────────────────────────────────────
    pub collision_padding: f32,
    pub transfer_font_size: f32,
    pub transfer_font_step: f32,
    pub transfer_font_color: f32,
    pub transfer_color_step: f32,
    pub transfer_min_font_size: f32,

    // ── Sprite sizes ─────────────────────────────────────────────────────────
    pub spaceship_size: (f32, f32),
    pub ufo_size: (f32, f32),
    pub bullet_size: (f32, f32),
    pub bomb_size: (f32, f32),
    pub coin_size: (f32, f32),
    pub powerup_size: (f32, f32),
    pub asteroid_size: (f32, f32),

    // ── Host ─────────────────────────────────────────────────────────────────
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub log_file: String,
    pub log_level: String,
    /// Ring the terminal bell on explosions.
    pub bell: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,
            key_hold_ticks: KEY_HOLD_TICKS,
            canvas_width: INITIAL_CANVAS_WIDTH,
            canvas_height: INITIAL_CANVAS_HEIGHT,
            field_padding: FIELD_PADDING,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            initial_level: INITIAL_LEVEL,
            initial_shields: INITIAL_SHIELDS,
            max_powerups: MAX_POWERUPS,
            shield_bonus_every: SHIELD_BONUS_EVERY,
            spaceship_speed: SPACESHIP_SPEED,
            ship_hit_cooldown: SHIP_HIT_COOLDOWN,
            pointer_dead_zone: POINTER_DEAD_ZONE,
            bullet_speed: BULLET_SPEED,
            bullet_min_interval: BULLET_MIN_INTERVAL,
            bullet_spread: BULLET_SPREAD,
            ufo_rows: UFO_ROWS,
            ufo_columns: UFO_COLUMNS,
            ufo_speed: UFO_SPEED,
            ufo_speed_per_level: UFO_SPEED_PER_LEVEL,
            ufo_sink_distance: UFO_SINK_DISTANCE,
            ufo_h_spacing: UFO_H_SPACING,
            ufo_v_spacing: UFO_V_SPACING,
            ufo_top_offset: UFO_TOP_OFFSET,
            ufo_points: UFO_POINTS,
            bomb_speed: BOMB_SPEED,
            bomb_speed_per_level: BOMB_SPEED_PER_LEVEL,
            bomb_frequency: BOMB_FREQUENCY,
            bomb_frequency_per_level: BOMB_FREQUENCY_PER_LEVEL,
            coin_speed: COIN_SPEED,
            coin_points: COIN_POINTS,
            coin_drop_chance: COIN_DROP_CHANCE,
            powerup_speed: POWERUP_SPEED,
            powerup_drop_chance: POWERUP_DROP_CHANCE,
            powerup_surplus_bonus: POWERUP_SURPLUS_BONUS,
            asteroid_speed: ASTEROID_SPEED,
            asteroid_health: ASTEROID_HEALTH,
            asteroid_hit_cooldown: ASTEROID_HIT_COOLDOWN,
            asteroid_points: ASTEROID_POINTS,
            asteroid_min_level: ASTEROID_MIN_LEVEL,
            asteroid_max: ASTEROID_MAX,
            collision_padding: COLLISION_PADDING,
            transfer_font_size: TRANSFER_FONT_SIZE,
            transfer_font_step: TRANSFER_FONT_STEP,
            transfer_font_color: TRANSFER_FONT_COLOR,
            transfer_color_step: TRANSFER_COLOR_STEP,
            transfer_min_font_size: TRANSFER_MIN_FONT_SIZE,
            spaceship_size: SPACESHIP_SIZE,
            ufo_size: UFO_SIZE,
            bullet_size: BULLET_SIZE,
            bomb_size: BOMB_SIZE,
            coin_size: COIN_SIZE,
            powerup_size: POWERUP_SIZE,
            asteroid_size: ASTEROID_SIZE,
            seed: None,
            log_file: LOG_FILE.to_string(),
            log_level: LOG_LEVEL.to_string(),
            bell: false,
        }
    }
}

impl Settings {
    /// `UFO_HUNTER_CONFIG` if set, otherwise `ufo-hunter.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Parse a TOML document over the defaults and validate the result.
    pub fn from_toml(contents: &str) -> GameResult<Self> {
        let settings: Settings = toml::from_str(contents).map_err(|e| GameError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// `Ok(None)` when the file does not exist; that is not an error.
    pub fn load_from(path: &Path) -> GameResult<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GameError::Config {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };
        Settings::from_toml(&contents)
            .map(Some)
            .map_err(|e| match e {
                GameError::Config { message, .. } => GameError::Config {
                    path: path.display().to_string(),
                    message,
                },
                other => other,
            })
    }

    pub fn validate(&self) -> GameResult<()> {
        let positive = [
            ("ticks_per_second", self.ticks_per_second),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("spaceship_speed", self.spaceship_speed),
            ("bullet_speed", self.bullet_speed),
            ("ufo_speed", self.ufo_speed),
            ("ufo_sink_distance", self.ufo_sink_distance),
            ("bomb_speed", self.bomb_speed),
            ("coin_speed", self.coin_speed),
            ("powerup_speed", self.powerup_speed),
            ("asteroid_speed", self.asteroid_speed),
            ("transfer_font_step", self.transfer_font_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidSetting { name, value });
            }
        }
        let non_negative = [
            ("field_padding", self.field_padding),
            ("ship_hit_cooldown", self.ship_hit_cooldown),
            ("pointer_dead_zone", self.pointer_dead_zone),
            ("bullet_min_interval", self.bullet_min_interval),
            ("bomb_frequency", self.bomb_frequency),
            ("asteroid_hit_cooldown", self.asteroid_hit_cooldown),
            ("collision_padding", self.collision_padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidSetting { name, value });
            }
        }
        let chances = [
            ("coin_drop_chance", self.coin_drop_chance),
            ("powerup_drop_chance", self.powerup_drop_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(GameError::InvalidSetting { name, value: value as f32 });
            }
        }
        if self.shield_bonus_every == 0 {
            return Err(GameError::InvalidSetting { name: "shield_bonus_every", value: 0.0 });
        }
        Ok(())
    }

    /// Fixed simulation step in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.ticks_per_second
    }

    pub fn ufo_speed_for(&self, level: u32) -> f32 {
        self.ufo_speed + level as f32 * self.ufo_speed_per_level
    }

    pub fn bomb_speed_for(&self, level: u32) -> f32 {
        self.bomb_speed + level as f32 * self.bomb_speed_per_level
    }

    pub fn bomb_frequency_for(&self, level: u32) -> f32 {
        self.bomb_frequency + level as f32 * self.bomb_frequency_per_level
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
