//! Fire-and-forget sound cues.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Shot,
    Explosion,
    UfoDeath,
    Coin,
    Powerup,
}

impl Sound {
    pub fn all() -> &'static [Sound] {
        &[Sound::Shot, Sound::Explosion, Sound::UfoDeath, Sound::Coin, Sound::Powerup]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sound::Shot => "shot",
            Sound::Explosion => "explosion",
            Sound::UfoDeath => "ufoDeath",
            Sound::Coin => "coin",
            Sound::Powerup => "powerup",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sound {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Sound::all()
            .iter()
            .copied()
            .find(|sound| sound.name() == name)
            .ok_or_else(|| GameError::UnknownSound(name.to_string()))
    }
}

pub trait SoundTrigger {
    fn play(&mut self, sound: Sound);
    /// Toggles muting.
    fn mute(&mut self);
    fn is_muted(&self) -> bool;
}

/// Terminal stand-in for an audio backend: cues go to the log, and with
/// `bell` enabled explosions ring the terminal bell.
pub struct TerminalSounds {
    muted: bool,
    bell: bool,
}

impl TerminalSounds {
    pub fn new(bell: bool) -> Self {
        TerminalSounds { muted: false, bell }
    }
}

impl SoundTrigger for TerminalSounds {
    fn play(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        debug!("sound cue: {}", sound);
        if self.bell && sound == Sound::Explosion {
            let mut out = std::io::stdout();
            if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
                warn!("terminal bell failed: {}", e);
            }
        }
    }

    fn mute(&mut self) {
        self.muted = !self.muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Keeps every cue it is asked to play. Muted cues are dropped.
///
/// Clones share one log, so a test can hand a clone to `App` and still
/// read what was played.
#[derive(Clone, Debug, Default)]
pub struct RecordingSounds {
    played: Rc<RefCell<Vec<Sound>>>,
    muted: bool,
}

impl RecordingSounds {
    pub fn new() -> Self {
        RecordingSounds::default()
    }

    pub fn played(&self) -> Vec<Sound> {
        self.played.borrow().clone()
    }

    pub fn count(&self, sound: Sound) -> usize {
        self.played.borrow().iter().filter(|&&s| s == sound).count()
    }
}

impl SoundTrigger for RecordingSounds {
    fn play(&mut self, sound: Sound) {
        if !self.muted {
            self.played.borrow_mut().push(sound);
        }
    }

    fn mute(&mut self) {
        self.muted = !self.muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &sound in Sound::all() {
            assert_eq!(sound.name().parse::<Sound>(), Ok(sound));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "laser".parse::<Sound>(),
            Err(GameError::UnknownSound("laser".to_string()))
        );
    }

    #[test]
    fn clones_share_the_log() {
        let sounds = RecordingSounds::new();
        let mut handle = sounds.clone();
        handle.play(Sound::Explosion);
        assert_eq!(sounds.count(Sound::Explosion), 1);
    }

    #[test]
    fn mute_toggles_and_silences() {
        let mut sounds = RecordingSounds::new();
        sounds.play(Sound::Coin);
        sounds.mute();
        assert!(sounds.is_muted());
        sounds.play(Sound::Coin);
        sounds.mute();
        assert!(!sounds.is_muted());
        sounds.play(Sound::Shot);
        assert_eq!(sounds.played(), vec![Sound::Coin, Sound::Shot]);
    }
}
