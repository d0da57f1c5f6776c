//! Error types for the simulation core.
//!
//! Every failure here is a programmer or configuration error: the simulation
//! has no I/O of its own. Constructors reject malformed values up front so a
//! tick never has to deal with a NaN position or a negative size.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A size was negative or not finite.
    InvalidDimensions { width: f32, height: f32 },

    /// A position (or speed) was NaN or infinite.
    NonFinitePosition { x: f32, y: f32 },

    /// Canvas too small to hold a play field after padding.
    InvalidBoundaries {
        width: f32,
        height: f32,
        padding: f32,
    },

    /// A sound cue name that no `Sound` variant answers to.
    UnknownSound(String),

    /// A settings value outside its usable range.
    InvalidSetting { name: &'static str, value: f32 },

    /// The configuration file could not be read or parsed.
    Config { path: String, message: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {}x{}", width, height)
            }
            GameError::NonFinitePosition { x, y } => {
                write!(f, "non-finite position ({}, {})", x, y)
            }
            GameError::InvalidBoundaries {
                width,
                height,
                padding,
            } => write!(
                f,
                "canvas {}x{} leaves no play field with padding {}",
                width, height, padding
            ),
            GameError::UnknownSound(name) => write!(f, "unknown sound cue '{}'", name),
            GameError::InvalidSetting { name, value } => {
                write!(f, "setting '{}' = {} is out of range", name, value)
            }
            GameError::Config { path, message } => {
                write!(f, "failed to load config {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type GameResult<T> = Result<T, GameError>;
