use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::AssetManifest;
use crate::bridge::view::SceneView;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Stage width in CSS pixels.
    pub world_width: f32,
    /// Stage height in CSS pixels.
    pub world_height: f32,
    /// Maximum number of game events kept per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed logic tick. Read input, advance timers, change phase.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass describing what the page should show.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Receive the asset manifest once the page has fetched it.
    fn load_manifest(&mut self, _manifest: &AssetManifest) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
    max_events: usize,
    /// Seconds covered by the current tick.
    dt: f32,
    /// Logic clock at the start of the current tick, in milliseconds.
    now_ms: f64,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            dt: config.fixed_dt,
            now_ms: 0.0,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the page.
    /// Events past `max_events` in one frame are dropped with a warning.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full, dropping event kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Set the clock for the tick about to run. Called by the runner.
    pub fn begin_step(&mut self, dt: f32, now_ms: f64) {
        self.dt = dt;
        self.now_ms = now_ms;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the read-only view pass.
pub struct RenderContext<'a> {
    pub view: &'a mut SceneView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn events_are_capped_per_frame() {
        let config = GameConfig {
            max_events: 2,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::with_config(&config);
        for kind in 0..5 {
            ctx.emit_event(GameEvent::new(kind));
        }
        assert_eq!(ctx.events.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn begin_step_sets_clock() {
        let mut ctx = EngineContext::new();
        ctx.begin_step(0.02, 1500.0);
        assert_eq!(ctx.dt(), 0.02);
        assert_eq!(ctx.now_ms(), 1500.0);
    }
}
