//! UFO Hunter: a terminal arcade shooter.
//!
//! The game core (scenes, entities, simulation) only talks to the outside
//! through [`surface::DrawSurface`], [`input::InputState`] and
//! [`sound::SoundTrigger`]; [`ui`], [`event`] and the binary are the terminal
//! host built on ratatui and crossterm.

pub mod app;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod event;
pub mod input;
pub mod math;
pub mod progress;
pub mod scenes;
pub mod sound;
pub mod sprites;
pub mod surface;
pub mod ui;
