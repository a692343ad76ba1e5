//! Declarative view snapshot handed to the page each frame.
//!
//! The page owns layout and styling; Rust only says what is visible, what
//! text is shown, which sprite image each entity uses and where it sits.
//! The snapshot is serialized to JSON and read once per animation frame.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::types::{EntityId, GameEvent};
use crate::components::layer::RenderLayer;

/// One visible sprite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub id: EntityId,
    pub tag: String,
    pub image: String,
    pub layer: RenderLayer,
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
}

/// The dialogue box contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DialogueView {
    /// Text revealed so far for the current line.
    pub text: String,
    /// Whether the "next" indicator is shown (line fully revealed).
    pub indicator: bool,
    /// Index of the current line in its set.
    pub line: usize,
}

/// Everything the page needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneView {
    /// Game-defined phase name (e.g. "intro", "village").
    pub phase: String,
    /// Named panel visibility toggles (e.g. "start-screen" → false).
    pub panels: BTreeMap<String, bool>,
    /// Named text slots (e.g. "auth-message").
    pub texts: BTreeMap<String, String>,
    /// Named pixel offsets for page-positioned widgets (e.g. "joystick-knob").
    pub offsets: BTreeMap<String, [f32; 2]>,
    /// Dialogue box, present only while a dialogue is showing.
    pub dialogue: Option<DialogueView>,
    /// Sprites in back-to-front order.
    pub sprites: Vec<SpriteView>,
    /// Events emitted since the previous frame.
    pub events: Vec<GameEvent>,
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new frame, keeping allocations.
    pub fn clear(&mut self) {
        self.phase.clear();
        self.panels.clear();
        self.texts.clear();
        self.offsets.clear();
        self.dialogue = None;
        self.sprites.clear();
        self.events.clear();
    }

    pub fn set_panel(&mut self, name: &str, visible: bool) {
        self.panels.insert(name.to_string(), visible);
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        self.texts.insert(name.to_string(), text.into());
    }

    pub fn set_offset(&mut self, name: &str, x: f32, y: f32) {
        self.offsets.insert(name.to_string(), [x, y]);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
