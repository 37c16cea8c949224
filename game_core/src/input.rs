//! Keyboard model: logical keys, held-key snapshot and discrete events

use std::collections::{HashMap, HashSet};

use crate::map::Side;

/// Logical key identity, independent of the platform's key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Left,
    Right,
    Up,
    Down,
    Q,
    R,
}

/// Pair of keys driving one paddle along its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Moves toward the start of the axis (left or up)
    pub decrease: Key,
    /// Moves toward the end of the axis (right or down)
    pub increase: Key,
}

impl KeyBinding {
    pub fn new(decrease: Key, increase: Key) -> Self {
        Self { decrease, increase }
    }

    /// Default layout: WASD guards top and left, arrows guard bottom and right
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Top => Self::new(Key::A, Key::D),
            Side::Left => Self::new(Key::W, Key::S),
            Side::Bottom => Self::new(Key::Left, Key::Right),
            Side::Right => Self::new(Key::Up, Key::Down),
        }
    }
}

/// Snapshot of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Forget everything, e.g. when the page loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl FromIterator<Key> for InputState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Discrete input event, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or page hidden for good
    Quit,
    KeyDown(Key),
}

/// Game-level command produced from input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ResetScore,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Q => Some(Command::Quit),
            Key::R => Some(Command::ResetScore),
            _ => None,
        }
    }
}

/// Drops key-down pulses that repeat faster than the configured interval
#[derive(Debug, Clone, Default)]
pub struct KeyPulses {
    interval: f64,
    last: HashMap<Key, f64>,
}

impl KeyPulses {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last: HashMap::new(),
        }
    }

    /// Returns true if a pulse of `key` at `now_ms` should be acted on
    pub fn accept(&mut self, key: Key, now_ms: f64) -> bool {
        match self.last.get(&key) {
            Some(&prev) if now_ms - prev < self.interval => false,
            _ => {
                self.last.insert(key, now_ms);
                true
            }
        }
    }
}
