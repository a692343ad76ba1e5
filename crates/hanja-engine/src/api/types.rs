use serde::Serialize;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the page script.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GameEvent {
    pub kind: u32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: u32) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_a(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}
