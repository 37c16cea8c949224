//! Keyboard input handling

use game_core::{InputEvent, InputState, Key};

/// Map a `KeyboardEvent.key` value to a game key
pub fn key_from_str(key: &str) -> Option<Key> {
    match key {
        "a" | "A" => Some(Key::A),
        "d" | "D" => Some(Key::D),
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "q" | "Q" => Some(Key::Q),
        "r" | "R" => Some(Key::R),
        _ => None,
    }
}

/// Keyboard state between frames: held keys and the queued key-down pulses
#[derive(Debug, Default)]
pub struct Controls {
    pub held: InputState,
    pending: Vec<InputEvent>,
    closed: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key is bound. Nothing is queued once closed.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = key_from_str(key) else {
            return false;
        };
        if !self.closed {
            self.held.press(key);
            self.pending.push(InputEvent::KeyDown(key));
        }
        true
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = key_from_str(key) {
            self.held.release(key);
        }
    }

    /// Key-up events will not arrive while the window is unfocused
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn quit(&mut self) {
        if !self.closed {
            self.pending.push(InputEvent::Quit);
        }
    }

    /// Events queued since the last frame, oldest first
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Stop queueing for good
    pub fn close(&mut self) {
        self.closed = true;
        self.pending.clear();
        self.held.clear();
    }
}
