// Compiled defaults for every tunable in `config::Settings`.
// Distances are logical canvas units, speeds are units per second, times are seconds.

// --- Timing ---
pub const TICKS_PER_SECOND: f32 = 60.0;
pub const KEY_HOLD_TICKS: u64 = 8; // ~133 ms; refreshed by OS key-repeat on classic terminals

// --- Canvas ---
pub const INITIAL_CANVAS_WIDTH: f32 = 900.0;
pub const INITIAL_CANVAS_HEIGHT: f32 = 750.0;
pub const FIELD_PADDING: f32 = 16.0;
pub const CELL_WIDTH: f32 = 8.0;
pub const CELL_HEIGHT: f32 = 16.0;

// --- Progress ---
pub const INITIAL_LEVEL: u32 = 1;
pub const INITIAL_SHIELDS: u32 = 3;
pub const MAX_POWERUPS: u32 = 2;
pub const SHIELD_BONUS_EVERY: u32 = 10_000;

// --- Spaceship ---
pub const SPACESHIP_SPEED: f32 = 200.0;
pub const SHIP_HIT_COOLDOWN: f32 = 1.0;
pub const POINTER_DEAD_ZONE: f32 = 2.0;

// --- Bullets ---
pub const BULLET_SPEED: f32 = 130.0;
pub const BULLET_MIN_INTERVAL: f32 = 0.5;
pub const BULLET_SPREAD: f32 = 12.0;

// --- UFO formation ---
pub const UFO_ROWS: usize = 4;
pub const UFO_COLUMNS: usize = 8;
pub const UFO_SPEED: f32 = 35.0;
pub const UFO_SPEED_PER_LEVEL: f32 = 7.0;
pub const UFO_SINK_DISTANCE: f32 = 30.0;
pub const UFO_H_SPACING: f32 = 60.0;
pub const UFO_V_SPACING: f32 = 44.0;
pub const UFO_TOP_OFFSET: f32 = 48.0;
pub const UFO_POINTS: u32 = 25;

// --- Bombs ---
pub const BOMB_SPEED: f32 = 75.0;
pub const BOMB_SPEED_PER_LEVEL: f32 = 10.0;
pub const BOMB_FREQUENCY: f32 = 0.05;
pub const BOMB_FREQUENCY_PER_LEVEL: f32 = 0.05;

// --- Drops ---
pub const COIN_SPEED: f32 = 60.0;
pub const COIN_POINTS: u32 = 50;
pub const COIN_DROP_CHANCE: f64 = 0.3;
pub const POWERUP_SPEED: f32 = 60.0;
pub const POWERUP_DROP_CHANCE: f64 = 0.05;
pub const POWERUP_SURPLUS_BONUS: u32 = 1_000;

// --- Asteroids ---
pub const ASTEROID_SPEED: f32 = 90.0;
pub const ASTEROID_HEALTH: u32 = 3;
pub const ASTEROID_HIT_COOLDOWN: f32 = 0.25;
pub const ASTEROID_POINTS: u32 = 150;
pub const ASTEROID_MIN_LEVEL: u32 = 3;
pub const ASTEROID_MAX: u32 = 3;

// --- Collision ---
pub const COLLISION_PADDING: f32 = 2.0; // shrinks every hit box per edge

// --- Transfer animation ---
pub const TRANSFER_FONT_SIZE: f32 = 140.0;
pub const TRANSFER_FONT_STEP: f32 = 1.0;
pub const TRANSFER_FONT_COLOR: f32 = 255.0;
pub const TRANSFER_COLOR_STEP: f32 = 1.5;
pub const TRANSFER_MIN_FONT_SIZE: f32 = 1.0;

// --- Sprite sizes (width, height) ---
pub const SPACESHIP_SIZE: (f32, f32) = (44.0, 24.0);
pub const UFO_SIZE: (f32, f32) = (44.0, 32.0);
pub const BULLET_SIZE: (f32, f32) = (4.0, 12.0);
pub const BOMB_SIZE: (f32, f32) = (12.0, 20.0);
pub const COIN_SIZE: (f32, f32) = (20.0, 20.0);
pub const POWERUP_SIZE: (f32, f32) = (20.0, 20.0);
pub const ASTEROID_SIZE: (f32, f32) = (32.0, 28.0);

// --- Host ---
pub const LOG_FILE: &str = "ufo-hunter.log";
pub const LOG_LEVEL: &str = "info";
