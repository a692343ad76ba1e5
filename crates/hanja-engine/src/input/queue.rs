/// Input event types the engine understands.
/// No game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at page coordinates (x, y).
    /// `pointer` is the stable touch identifier (0 for the mouse).
    PointerDown { pointer: u32, x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { pointer: u32, x: f32, y: f32 },
    /// A touch/cursor moved.
    PointerMove { pointer: u32, x: f32, y: f32 },
    /// The browser cancelled a touch (e.g. it turned into a scroll).
    PointerCancel { pointer: u32 },
    /// A key was pressed. `key_code` is the DOM keyCode.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the page (buttons, overlays).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// A payload-free custom event.
    pub fn custom(kind: u32) -> Self {
        InputEvent::Custom { kind, a: 0.0, b: 0.0, c: 0.0 }
    }
}

/// A queue of input events.
/// JS pushes events as they arrive; the game reads them each tick and the
/// runner drains the queue after the frame's ticks.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { pointer: 0, x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 39 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_helper_has_no_payload() {
        assert_eq!(
            InputEvent::custom(2),
            InputEvent::Custom { kind: 2, a: 0.0, b: 0.0, c: 0.0 }
        );
    }
}
