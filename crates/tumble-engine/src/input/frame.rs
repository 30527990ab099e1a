use super::types::{Key, KeyEvent, KeyState};

/// Keyboard transitions collected between two frames.
///
/// Auto-repeat presses are dropped: holding a toggle key flips it once.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame, in arrival order.
    pub keys_pressed: Vec<Key>,

    /// Keys released this frame, in arrival order.
    pub keys_released: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn push(&mut self, ev: KeyEvent) {
        match ev.state {
            KeyState::Pressed if !ev.repeat => self.keys_pressed.push(ev.key),
            KeyState::Pressed => {}
            KeyState::Released => self.keys_released.push(ev.key),
        }
    }

    /// Number of presses of `key` this frame.
    pub fn presses(&self, key: Key) -> usize {
        self.keys_pressed.iter().filter(|&&k| k == key).count()
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
