use hanja_engine::{
    build_sprite_views, AssetManifest, EngineContext, FixedTimestep, Game, GameConfig,
    InputEvent, InputQueue, RenderContext, SceneView,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    view: SceneView,
    /// Last serialized view, handed to JS by reference.
    view_json: String,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = EngineContext::with_config(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            timestep,
            config,
            view: SceneView::new(),
            view_json: String::from("{}"),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_view();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Parse an asset manifest and hand it to the game.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => self.game.load_manifest(&manifest),
            Err(err) => log::warn!("asset manifest rejected: {err}"),
        }
    }

    /// Run one display frame: fixed logic ticks, then the view pass.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let start_ms = self.timestep.elapsed_ms();
        let steps = self.timestep.accumulate(dt);
        let step_ms = self.timestep.dt() as f64 * 1000.0;
        for i in 0..steps {
            self.ctx.begin_step(self.timestep.dt(), start_ms + (i + 1) as f64 * step_ms);
            self.game.update(&mut self.ctx, &self.input);
            // Each input event is seen by exactly one tick.
            self.input.drain();
        }

        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        self.view.clear();
        build_sprite_views(self.ctx.scene.iter(), &mut self.view.sprites);
        {
            let mut render_ctx = RenderContext { view: &mut self.view };
            self.game.render(&mut render_ctx);
        }
        self.view.events.extend_from_slice(&self.ctx.events);

        match self.view.to_json() {
            Ok(json) => self.view_json = json,
            Err(err) => log::warn!("view serialization failed: {err}"),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable access for exports that carry strings (forms and the like).
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn view(&self) -> &SceneView {
        &self.view
    }

    pub fn view_json(&self) -> &str {
        &self.view_json
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
