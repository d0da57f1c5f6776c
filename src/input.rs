//! Point-in-time input snapshot read by the simulation at the start of a tick.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Pause,
    Escape,
    Enter,
    Mute,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub active: bool,
    pub x: f32,
    pub y: f32,
}

/// Held keys keyed to the tick they were last pressed or repeated.
///
/// Terminals that report key releases clear keys on release. Classic
/// terminals only send presses (OS key-repeat shows up as more presses), so
/// there a key counts as held for `hold_ticks` after its last press.
#[derive(Clone, Debug)]
pub struct InputState {
    held: HashMap<Key, u64>,
    pointer: Option<Pointer>,
    tick: u64,
    hold_ticks: Option<u64>,
}

impl InputState {
    pub fn new(hold_ticks: Option<u64>) -> Self {
        InputState {
            held: HashMap::new(),
            pointer: None,
            tick: 0,
            hold_ticks,
        }
    }

    /// `true` when releases are reported and held keys never expire on their own.
    pub fn set_release_events(&mut self, enabled: bool, hold_ticks: u64) {
        self.hold_ticks = if enabled { None } else { Some(hold_ticks) };
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key, self.tick);
        if matches!(key, Key::Left | Key::Right) {
            self.deactivate_pointer();
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Without release events, OS key-repeat shows up as fresh presses of a
    /// key that is still held.
    pub fn is_auto_repeat(&self, key: Key) -> bool {
        self.hold_ticks.is_some() && self.is_pressed(key)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match (self.held.get(&key), self.hold_ticks) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(&last), Some(window)) => self.tick.saturating_sub(last) <= window,
        }
    }

    pub fn pointer(&self) -> Option<Pointer> {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Some(Pointer { active: true, x, y });
        }
    }

    pub fn deactivate_pointer(&mut self) {
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_clears_key() {
        let mut input = InputState::new(None);
        input.press(Key::Fire);
        assert!(input.is_pressed(Key::Fire));
        input.set_tick(1_000);
        assert!(input.is_pressed(Key::Fire));
        input.release(Key::Fire);
        assert!(!input.is_pressed(Key::Fire));
    }

    #[test]
    fn held_key_expires_without_repeats() {
        let mut input = InputState::new(Some(4));
        input.set_tick(10);
        input.press(Key::Left);
        input.set_tick(14);
        assert!(input.is_pressed(Key::Left));
        input.set_tick(15);
        assert!(!input.is_pressed(Key::Left));

        input.press(Key::Left);
        assert!(input.is_pressed(Key::Left));
    }

    #[test]
    fn repeats_only_show_up_without_release_events() {
        let mut hold = InputState::new(Some(4));
        assert!(!hold.is_auto_repeat(Key::Fire));
        hold.press(Key::Fire);
        assert!(hold.is_auto_repeat(Key::Fire));
        hold.set_tick(5);
        assert!(!hold.is_auto_repeat(Key::Fire));

        let mut release = InputState::new(None);
        release.press(Key::Fire);
        assert!(!release.is_auto_repeat(Key::Fire));
    }

    #[test]
    fn keyboard_movement_deactivates_pointer() {
        let mut input = InputState::new(None);
        input.set_pointer(120.0, 40.0);
        assert_eq!(input.pointer(), Some(Pointer { active: true, x: 120.0, y: 40.0 }));
        input.press(Key::Right);
        assert_eq!(input.pointer().map(|p| p.active), Some(false));
        input.press(Key::Fire);
        input.set_pointer(f32::NAN, 1.0);
        assert_eq!(input.pointer().map(|p| p.x), Some(120.0));
    }
}
