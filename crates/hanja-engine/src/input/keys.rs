//! Held-key tracking for the keys gameplay reads.

/// Keys the engine tracks. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a DOM keyCode.
    pub fn from_code(key_code: u32) -> Option<Self> {
        match key_code {
            37 => Some(Key::ArrowLeft),
            39 => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Held status of each tracked key. Written by key-down/key-up handling,
/// read by gameplay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    left: bool,
    right: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::ArrowLeft => self.left = held,
            Key::ArrowRight => self.right = held,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => self.left,
            Key::ArrowRight => self.right,
        }
    }

    /// Release everything (focus loss, scene change).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arrow_codes_are_tracked() {
        assert_eq!(Key::from_code(37), Some(Key::ArrowLeft));
        assert_eq!(Key::from_code(39), Some(Key::ArrowRight));
        assert_eq!(Key::from_code(32), None);
    }

    #[test]
    fn press_and_release() {
        let mut keys = KeyState::new();
        keys.press(Key::ArrowRight);
        assert!(keys.is_held(Key::ArrowRight));
        assert!(!keys.is_held(Key::ArrowLeft));
        keys.release(Key::ArrowRight);
        assert!(!keys.is_held(Key::ArrowRight));
    }

    #[test]
    fn clear_releases_all() {
        let mut keys = KeyState::new();
        keys.press(Key::ArrowLeft);
        keys.press(Key::ArrowRight);
        keys.clear();
        assert_eq!(keys, KeyState::default());
    }
}
