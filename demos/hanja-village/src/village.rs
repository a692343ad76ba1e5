//! Village walk: one player on a horizontal strip, walking toward Bori.
//!
//! Ticked once per logic step while the village is on screen. The player
//! position is clamped to the strip, and once the player passes Bori's
//! spot the scene locks them there for good and reports it exactly once.

use hanja_engine::{Key, KeyState};
use serde::Deserialize;

/// Number of frames in a walk cycle. Frames are numbered 1..=WALK_FRAMES.
pub const WALK_FRAMES: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct VillageConfig {
    /// Where the player appears (default: 50).
    pub start_x: f32,
    pub min_x: f32,
    pub max_x: f32,
    /// Walking past this point starts Bori's dialogue (default: 325).
    pub trigger_x: f32,
    /// Pixels per tick (default: 4).
    pub speed: f32,
    /// Milliseconds per walk frame (default: 150).
    pub frame_interval_ms: f64,
}

impl Default for VillageConfig {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            min_x: 0.0,
            max_x: 560.0,
            trigger_x: 325.0,
            speed: 4.0,
            frame_interval_ms: 150.0,
        }
    }
}

impl VillageConfig {
    /// Reject strips the walk loop cannot clamp to.
    pub fn validate(&self) -> Result<(), InvalidVillage> {
        let all_finite = [self.start_x, self.min_x, self.max_x, self.trigger_x, self.speed]
            .iter()
            .all(|v| v.is_finite())
            && self.frame_interval_ms.is_finite();
        if !all_finite {
            return Err(InvalidVillage::NotFinite);
        }
        if self.min_x > self.max_x {
            return Err(InvalidVillage::EmptyStrip { min_x: self.min_x, max_x: self.max_x });
        }
        if !(self.min_x..=self.max_x).contains(&self.trigger_x) {
            return Err(InvalidVillage::TriggerOutside(self.trigger_x));
        }
        if self.speed < 0.0 || self.frame_interval_ms < 0.0 {
            return Err(InvalidVillage::Negative);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidVillage {
    #[error("village values must be finite numbers")]
    NotFinite,
    #[error("village min_x {min_x} is past max_x {max_x}")]
    EmptyStrip { min_x: f32, max_x: f32 },
    #[error("village trigger_x {0} is outside the strip")]
    TriggerOutside(f32),
    #[error("village speed and frame interval cannot be negative")]
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }
}

/// Reported by [`VillageState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillageSignal {
    /// The player reached Bori. Sent once per village visit.
    BoriReached,
}

#[derive(Debug, Clone)]
pub struct VillageState {
    config: VillageConfig,
    pub player_x: f32,
    pub direction: Direction,
    pub is_moving: bool,
    /// Current walk frame, in 1..=WALK_FRAMES.
    pub frame_index: u8,
    pub last_frame_ms: f64,
    /// One-way gate: never goes back to false during a visit.
    pub bori_triggered: bool,
}

impl VillageState {
    pub fn new(config: VillageConfig, now_ms: f64) -> Self {
        Self {
            config,
            player_x: config.start_x.clamp(config.min_x, config.max_x),
            direction: Direction::Right,
            is_moving: false,
            frame_index: 1,
            last_frame_ms: now_ms,
            bori_triggered: false,
        }
    }

    pub fn config(&self) -> &VillageConfig {
        &self.config
    }

    /// One step of the walk loop.
    ///
    /// While `frozen` (a dialogue is up) nothing moves or animates; the
    /// caller keeps ticking so the scene resumes cleanly afterwards.
    pub fn tick(&mut self, now_ms: f64, keys: &KeyState, frozen: bool) -> Option<VillageSignal> {
        if frozen {
            return None;
        }

        self.apply_keys(keys);
        let signal = self.clamp_position();
        self.animate(now_ms);
        signal
    }

    /// Sprite name for the current pose, e.g. `player_left_2`.
    pub fn sprite_key(&self) -> String {
        sprite_key(self.direction, self.frame_index)
    }

    fn apply_keys(&mut self, keys: &KeyState) {
        let right = keys.is_held(Key::ArrowRight);
        let left = keys.is_held(Key::ArrowLeft);

        // Right is checked first, so holding both walks right.
        if right {
            self.direction = Direction::Right;
            self.player_x += self.config.speed;
            self.is_moving = true;
        } else if left {
            self.direction = Direction::Left;
            self.player_x -= self.config.speed;
            self.is_moving = true;
        } else {
            self.is_moving = false;
        }
    }

    fn clamp_position(&mut self) -> Option<VillageSignal> {
        self.player_x = self.player_x.clamp(self.config.min_x, self.config.max_x);

        if self.player_x > self.config.trigger_x || self.bori_triggered {
            self.player_x = self.player_x.min(self.config.trigger_x);
            if !self.bori_triggered {
                self.bori_triggered = true;
                return Some(VillageSignal::BoriReached);
            }
        }
        None
    }

    fn animate(&mut self, now_ms: f64) {
        if !self.is_moving {
            self.frame_index = 1;
            self.last_frame_ms = now_ms;
            return;
        }

        let elapsed = now_ms - self.last_frame_ms;
        if elapsed < 0.0 {
            // Clock went backwards; restart the frame timer from here.
            self.last_frame_ms = now_ms;
            return;
        }
        if elapsed >= self.config.frame_interval_ms {
            self.frame_index = self.frame_index % WALK_FRAMES + 1;
            self.last_frame_ms = now_ms;
        }
    }
}

pub fn sprite_key(direction: Direction, frame: u8) -> String {
    format!("player_{}_{}", direction.as_str(), frame)
}

/// Every walk sprite name the village can ask for.
pub fn all_sprite_keys() -> Vec<String> {
    [Direction::Right, Direction::Left]
        .into_iter()
        .flat_map(|d| (1..=WALK_FRAMES).map(move |f| sprite_key(d, f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_MS: f64 = 1000.0 / 60.0;

    fn holding(key: Key) -> KeyState {
        let mut keys = KeyState::new();
        keys.press(key);
        keys
    }

    #[test]
    fn walking_right_stops_at_bori_and_triggers_once() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowRight);
        let mut signals = 0;
        let mut now = 0.0;

        for _ in 0..300 {
            now += TICK_MS;
            if village.tick(now, &keys, false).is_some() {
                signals += 1;
            }
            assert!(village.player_x <= 325.0);
        }

        assert_eq!(signals, 1);
        assert!(village.bori_triggered);
        assert_eq!(village.player_x, 325.0);
    }

    #[test]
    fn before_trigger_position_is_start_plus_speed() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowRight);
        for _ in 0..10 {
            village.tick(0.0, &keys, false);
        }
        assert_eq!(village.player_x, 90.0);
        assert!(!village.bori_triggered);
    }

    #[test]
    fn max_x_bounds_walk_without_trigger_region() {
        let config = VillageConfig {
            trigger_x: f32::MAX,
            ..VillageConfig::default()
        };
        let mut village = VillageState::new(config, 0.0);
        let keys = holding(Key::ArrowRight);
        for _ in 0..500 {
            village.tick(0.0, &keys, false);
        }
        assert_eq!(village.player_x, 560.0);
    }

    #[test]
    fn left_walk_stops_at_min_x() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowLeft);
        for _ in 0..50 {
            village.tick(0.0, &keys, false);
        }
        assert_eq!(village.player_x, 0.0);
        assert_eq!(village.direction, Direction::Left);
    }

    #[test]
    fn both_keys_walk_right() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let mut keys = holding(Key::ArrowLeft);
        keys.press(Key::ArrowRight);
        village.tick(0.0, &keys, false);
        assert_eq!(village.player_x, 54.0);
        assert_eq!(village.direction, Direction::Right);
        assert!(village.is_moving);
    }

    #[test]
    fn releasing_keeps_direction_and_idles() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        village.tick(0.0, &holding(Key::ArrowLeft), false);
        village.tick(200.0, &holding(Key::ArrowLeft), false);
        assert_eq!(village.frame_index, 2);

        village.tick(400.0, &KeyState::new(), false);
        assert_eq!(village.direction, Direction::Left);
        assert!(!village.is_moving);
        assert_eq!(village.frame_index, 1);
        assert_eq!(village.sprite_key(), "player_left_1");
    }

    #[test]
    fn frames_advance_by_elapsed_time_not_ticks() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowRight);

        // Many ticks inside one interval: no frame change.
        for _ in 0..8 {
            village.tick(100.0, &keys, false);
        }
        assert_eq!(village.frame_index, 1);

        village.tick(150.0, &keys, false);
        assert_eq!(village.frame_index, 2);
        village.tick(300.0, &keys, false);
        assert_eq!(village.frame_index, 3);
        village.tick(450.0, &keys, false);
        assert_eq!(village.frame_index, 1);
    }

    #[test]
    fn walking_after_a_pause_starts_a_full_frame() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowRight);
        village.tick(0.0, &keys, false);
        village.tick(1000.0, &KeyState::new(), false);
        assert_eq!(village.frame_index, 1);

        village.tick(1010.0, &keys, false);
        assert_eq!(village.frame_index, 1);
        village.tick(1160.0, &keys, false);
        assert_eq!(village.frame_index, 2);
    }

    #[test]
    fn backwards_clock_is_tolerated() {
        let mut village = VillageState::new(VillageConfig::default(), 1000.0);
        let keys = holding(Key::ArrowRight);
        village.tick(500.0, &keys, false);
        assert_eq!(village.frame_index, 1);
        assert_eq!(village.last_frame_ms, 500.0);
        village.tick(650.0, &keys, false);
        assert_eq!(village.frame_index, 2);
    }

    #[test]
    fn frozen_ignores_keys() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        let keys = holding(Key::ArrowRight);
        for _ in 0..100 {
            assert!(village.tick(0.0, &keys, true).is_none());
        }
        assert_eq!(village.player_x, 50.0);
    }

    #[test]
    fn gate_holds_after_trigger() {
        let mut village = VillageState::new(VillageConfig::default(), 0.0);
        village.player_x = 324.0;
        assert_eq!(
            village.tick(0.0, &holding(Key::ArrowRight), false),
            Some(VillageSignal::BoriReached)
        );
        for _ in 0..20 {
            assert!(village.tick(0.0, &holding(Key::ArrowRight), false).is_none());
        }
        assert_eq!(village.player_x, 325.0);
        assert!(village.bori_triggered);
    }

    #[test]
    fn six_walk_sprites() {
        let keys = all_sprite_keys();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&"player_right_3".to_string()));
        assert!(keys.contains(&"player_left_1".to_string()));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(VillageConfig::default().validate(), Ok(()));
    }

    #[test]
    fn unclampable_configs_are_rejected() {
        let base = VillageConfig::default();
        let inverted = VillageConfig { min_x: 600.0, ..base };
        assert!(matches!(inverted.validate(), Err(InvalidVillage::EmptyStrip { .. })));

        let nan = VillageConfig { max_x: f32::NAN, ..base };
        assert_eq!(nan.validate(), Err(InvalidVillage::NotFinite));

        let slow_frames = VillageConfig { frame_interval_ms: f64::INFINITY, ..base };
        assert_eq!(slow_frames.validate(), Err(InvalidVillage::NotFinite));

        let far_trigger = VillageConfig { trigger_x: 700.0, ..base };
        assert_eq!(far_trigger.validate(), Err(InvalidVillage::TriggerOutside(700.0)));

        let backwards = VillageConfig { speed: -4.0, ..base };
        assert_eq!(backwards.validate(), Err(InvalidVillage::Negative));
    }
}
