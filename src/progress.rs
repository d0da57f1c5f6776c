use crate::config::Settings;

/// Score, shields, level and power-ups for one play session. Survives scene
/// transitions; only a new game resets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub level: u32,
    pub score: u32,
    pub shields: u32,
    pub powerups: u32,
}

impl Progress {
    pub fn new(settings: &Settings) -> Self {
        Progress {
            level: settings.initial_level,
            score: 0,
            shields: settings.initial_shields,
            powerups: 0,
        }
    }

    pub fn reset(&mut self, settings: &Settings) {
        *self = Progress::new(settings);
    }

    /// Adds `points` and returns how many bonus shields that earned: one for
    /// every multiple of `bonus_every` the score passed on the way.
    pub fn add_score(&mut self, points: u32, bonus_every: u32) -> u32 {
        let before = self.score;
        self.score = self.score.saturating_add(points);
        if bonus_every == 0 {
            return 0;
        }
        let bonus = self.score / bonus_every - before / bonus_every;
        self.shields += bonus;
        bonus
    }

    /// `false` when already at `max`; the caller pays out the surplus instead.
    pub fn add_powerup(&mut self, max: u32) -> bool {
        if self.powerups < max {
            self.powerups += 1;
            true
        } else {
            false
        }
    }

    /// Drop shields by `amount`; returns `true` when none are left.
    pub fn lose_shields(&mut self, amount: u32) -> bool {
        self.shields = self.shields.saturating_sub(amount);
        self.shields == 0
    }
}
