//! On-screen touch controls: one virtual joystick plus two momentary
//! action buttons (attack, jump).
//!
//! The widget does not draw anything. The page lays the controls out and
//! forwards pointer events here; the widget answers with [`TouchAction`]s
//! and exposes the knob offset so the page can position the knob.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Normalized joystick direction. Each component is in `[-1, 1]` and is
/// exactly zero inside the dead-zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TouchDirection {
    pub x: f32,
    pub y: f32,
}

impl TouchDirection {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Widget sizing, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// Diameter of the joystick base (default: 120).
    pub joystick_size: f32,
    /// Diameter of the knob (default: 50).
    pub knob_size: f32,
    /// Per-axis dead-zone as a fraction of full deflection (default: 0.1).
    pub deadzone: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            joystick_size: 120.0,
            knob_size: 50.0,
            deadzone: 0.1,
        }
    }
}

impl TouchConfig {
    /// Maximum knob travel from the center.
    pub fn travel_radius(&self) -> f32 {
        self.joystick_size / 2.0 - self.knob_size / 4.0
    }
}

/// Axis-aligned hit box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { min: origin, max: origin + size }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Where the page placed the controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchLayout {
    pub joystick_center: Vec2,
    pub attack_button: Rect,
    pub jump_button: Rect,
}

/// What the widget reports back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchAction {
    Move(TouchDirection),
    Attack,
    Jump,
}

/// Clamp a raw pointer delta to the knob's travel circle and normalize it.
///
/// Returns the clamped knob offset (pixels) and the dead-zoned direction.
pub fn normalize_stick(delta: Vec2, radius: f32, deadzone: f32) -> (Vec2, TouchDirection) {
    if radius <= 0.0 {
        return (Vec2::ZERO, TouchDirection::ZERO);
    }

    let dist = delta.length();
    let offset = if dist > radius { delta / dist * radius } else { delta };

    let n = offset / radius;
    let axis = |v: f32| if v.abs() > deadzone { v.clamp(-1.0, 1.0) } else { 0.0 };

    (offset, TouchDirection { x: axis(n.x), y: axis(n.y) })
}

#[derive(Debug, Clone, Copy, Default)]
struct Button {
    /// Pointer currently holding the button down.
    held_by: Option<u32>,
}

/// Virtual joystick + attack/jump buttons.
#[derive(Debug, Clone)]
pub struct TouchControls {
    config: TouchConfig,
    layout: TouchLayout,
    /// Pointer driving the joystick; other pointers are ignored until it lifts.
    stick_pointer: Option<u32>,
    knob_offset: Vec2,
    direction: TouchDirection,
    attack: Button,
    jump: Button,
    destroyed: bool,
}

impl TouchControls {
    pub fn new(config: TouchConfig, layout: TouchLayout) -> Self {
        Self {
            config,
            layout,
            stick_pointer: None,
            knob_offset: Vec2::ZERO,
            direction: TouchDirection::ZERO,
            attack: Button::default(),
            jump: Button::default(),
            destroyed: false,
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Copy of the current direction.
    pub fn direction(&self) -> TouchDirection {
        self.direction
    }

    /// Knob offset from the joystick center, in pixels.
    pub fn knob_offset(&self) -> Vec2 {
        self.knob_offset
    }

    pub fn is_stick_active(&self) -> bool {
        self.stick_pointer.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn pointer_down(&mut self, pointer: u32, pos: Vec2, out: &mut Vec<TouchAction>) {
        if self.destroyed {
            return;
        }

        if self.layout.attack_button.contains(pos) {
            if self.attack.held_by.is_none() {
                self.attack.held_by = Some(pointer);
                out.push(TouchAction::Attack);
            }
            return;
        }
        if self.layout.jump_button.contains(pos) {
            if self.jump.held_by.is_none() {
                self.jump.held_by = Some(pointer);
                out.push(TouchAction::Jump);
            }
            return;
        }

        let on_base = pos.distance(self.layout.joystick_center) <= self.config.joystick_size / 2.0;
        if on_base && self.stick_pointer.is_none() {
            self.stick_pointer = Some(pointer);
            self.update_knob(pos, out);
        }
    }

    pub fn pointer_move(&mut self, pointer: u32, pos: Vec2, out: &mut Vec<TouchAction>) {
        if self.destroyed || self.stick_pointer != Some(pointer) {
            return;
        }
        self.update_knob(pos, out);
    }

    /// A pointer lifted. Also used for cancel.
    pub fn pointer_up(&mut self, pointer: u32, out: &mut Vec<TouchAction>) {
        if self.destroyed {
            return;
        }
        if self.attack.held_by == Some(pointer) {
            self.attack.held_by = None;
        }
        if self.jump.held_by == Some(pointer) {
            self.jump.held_by = None;
        }
        if self.stick_pointer == Some(pointer) {
            self.stick_pointer = None;
            self.reset_knob(out);
        }
    }

    /// Detach from input. Later events are ignored; calling twice is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.stick_pointer = None;
        self.knob_offset = Vec2::ZERO;
        self.direction = TouchDirection::ZERO;
        self.attack = Button::default();
        self.jump = Button::default();
        log::debug!("touch controls destroyed");
    }

    fn update_knob(&mut self, pos: Vec2, out: &mut Vec<TouchAction>) {
        let delta = pos - self.layout.joystick_center;
        let (offset, direction) =
            normalize_stick(delta, self.config.travel_radius(), self.config.deadzone);
        self.knob_offset = offset;
        self.direction = direction;
        out.push(TouchAction::Move(direction));
    }

    fn reset_knob(&mut self, out: &mut Vec<TouchAction>) {
        self.knob_offset = Vec2::ZERO;
        self.direction = TouchDirection::ZERO;
        out.push(TouchAction::Move(TouchDirection::ZERO));
    }
}
