use glam::Vec2;
use hanja_engine::input::touch::Rect;
use hanja_engine::*;
use hanja_web::{HtmlAudio, LocalStorage};

use crate::auth::{AuthError, AuthGate, User};
use crate::script::Script;
use crate::settings::{GameSettings, SettingsError};
use crate::village::{self, VillageSignal, VillageState};

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 600.0;

/// Baseline the characters stand on.
const GROUND_Y: f32 = 380.0;
/// Bori waits just past the trigger point.
const BORI_OFFSET_X: f32 = 60.0;

// Custom event kinds (page → Rust)
pub const CUSTOM_BEGIN: u32 = 1;
pub const CUSTOM_ADVANCE: u32 = 2;
pub const CUSTOM_SKIP: u32 = 3;

// Game event kinds (Rust → page)
/// a = new phase code.
pub const EVENT_PHASE: u32 = 1;
/// a = index of the line that started typing.
pub const EVENT_LINE: u32 = 2;
pub const EVENT_ATTACK: u32 = 3;
pub const EVENT_JUMP: u32 = 4;

const KEY_ENTER: u32 = 13;
const KEY_SPACE: u32 = 32;

const TAG_BACKGROUND: &str = "village-bg";
const TAG_PLAYER: &str = "player";
const TAG_BORI: &str = "bori";

/// Scene state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    IntroDialogue,
    Auth,
    Village,
    NpcDialogue,
    /// Terminal here; the stage itself is loaded elsewhere.
    NextStage,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::IntroDialogue => "intro",
            Phase::Auth => "auth",
            Phase::Village => "village",
            Phase::NpcDialogue => "npc",
            Phase::NextStage => "next-stage",
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Phase::Start => 0,
            Phase::IntroDialogue => 1,
            Phase::Auth => 2,
            Phase::Village => 3,
            Phase::NpcDialogue => 4,
            Phase::NextStage => 5,
        }
    }

    fn shows_village(self) -> bool {
        matches!(self, Phase::Village | Phase::NpcDialogue)
    }
}

/// Where the page puts the touch widget on the stage.
fn touch_layout() -> TouchLayout {
    TouchLayout {
        joystick_center: Vec2::new(100.0, WORLD_H - 100.0),
        attack_button: Rect::from_origin_size(Vec2::new(WORLD_W - 190.0, WORLD_H - 130.0), Vec2::splat(70.0)),
        jump_button: Rect::from_origin_size(Vec2::new(WORLD_W - 100.0, WORLD_H - 130.0), Vec2::splat(70.0)),
    }
}

/// The intro-to-village front end: one controller owning every piece of
/// game state, driven by the runner one fixed tick at a time.
pub struct HanjaVillage<S = LocalStorage, A = HtmlAudio> {
    settings: GameSettings,
    phase: Phase,
    /// Set outside a tick (log-in), applied at the start of the next one.
    pending_phase: Option<Phase>,
    session: DialogueSession,
    dialogue_events: Vec<DialogueEvent>,
    audio: A,
    auth: AuthGate<S>,
    user: Option<User>,
    /// Last auth outcome shown on the auth panel.
    auth_message: Option<String>,
    village: Option<VillageState>,
    /// Keyboard arrows.
    keys: KeyState,
    touch: TouchControls,
    touch_actions: Vec<TouchAction>,
    sprites: SpriteRegistry,
}

impl HanjaVillage {
    pub fn new() -> Self {
        Self::with_backends(LocalStorage::new(), HtmlAudio::new())
    }
}

impl<S: StorageProvider, A: AudioBackend> HanjaVillage<S, A> {
    pub fn with_backends(storage: S, audio: A) -> Self {
        let settings = GameSettings::default();
        Self {
            session: DialogueSession::new(settings.typewriter.interval_secs()),
            touch: TouchControls::new(settings.touch, touch_layout()),
            settings,
            phase: Phase::Start,
            pending_phase: None,
            dialogue_events: Vec::new(),
            audio,
            auth: AuthGate::new(storage),
            user: None,
            auth_message: None,
            village: None,
            keys: KeyState::new(),
            touch_actions: Vec::new(),
            sprites: SpriteRegistry::new(),
        }
    }

    /// Replace the tunables. Dialogue speed applies from the next line,
    /// village numbers from the next village entry. Invalid settings are
    /// refused and the current ones stay.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<(), SettingsError> {
        if let Err(err) = settings.validate() {
            log::warn!("settings refused: {err}");
            return Err(err);
        }
        self.session.set_interval(settings.typewriter.interval_secs());
        if !self.touch.is_destroyed() {
            self.touch = TouchControls::new(settings.touch, touch_layout());
        }
        self.settings = settings;
        log::info!("settings applied");
        Ok(())
    }

    /// Register a new player. Does not sign them in.
    pub fn signup(&mut self, id: &str, password: &str) -> Result<User, AuthError> {
        match self.auth.signup(id, password) {
            Ok(user) => {
                self.auth_message = Some(format!("{} 님, 가입을 환영해요! 로그인해 주세요.", user.id));
                Ok(user)
            }
            Err(err) => {
                self.auth_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Sign in. On the auth screen this moves the game on to the village.
    pub fn login(&mut self, id: &str, password: &str) -> Result<User, AuthError> {
        let user = match self.auth.login(id, password) {
            Ok(user) => user,
            Err(err) => {
                self.auth_message = Some(err.to_string());
                return Err(err);
            }
        };

        self.auth_message = None;
        self.user = Some(user.clone());
        if self.phase == Phase::Auth {
            self.pending_phase = Some(Phase::Village);
        } else {
            log::debug!("login outside the auth screen; staying in {}", self.phase.name());
        }
        Ok(user)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn session(&self) -> &DialogueSession {
        &self.session
    }

    pub fn village(&self) -> Option<&VillageState> {
        self.village.as_ref()
    }

    pub fn touch(&self) -> &TouchControls {
        &self.touch
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn enter(&mut self, ctx: &mut EngineContext, phase: Phase) {
        if self.phase == phase {
            return;
        }
        log::info!("phase: {} -> {}", self.phase.name(), phase.name());
        self.phase = phase;
        ctx.emit_event(GameEvent::new(EVENT_PHASE).with_a(phase.code() as f32));

        match phase {
            Phase::Start | Phase::Auth => {}
            Phase::IntroDialogue => self.open_script(ctx, Script::Intro),
            Phase::Village => self.show_village(ctx),
            Phase::NpcDialogue => {
                self.keys.clear();
                self.open_script(ctx, Script::Bori);
            }
            Phase::NextStage => {
                self.keys.clear();
                self.touch.destroy();
            }
        }
    }

    fn open_script(&mut self, ctx: &mut EngineContext, script: Script) {
        if let Err(err) = self.session.open(script.line_set(), &mut self.audio, &mut self.dialogue_events) {
            log::warn!("'{}' not opened: {err}", script.name());
            return;
        }
        self.drain_dialogue(ctx);
    }

    fn advance(&mut self, ctx: &mut EngineContext) {
        self.session.advance(&mut self.audio, &mut self.dialogue_events);
        self.drain_dialogue(ctx);
    }

    fn skip(&mut self, ctx: &mut EngineContext) {
        if matches!(self.phase, Phase::IntroDialogue | Phase::NpcDialogue) {
            self.session.skip(&mut self.audio, &mut self.dialogue_events);
            self.drain_dialogue(ctx);
        }
    }

    fn drain_dialogue(&mut self, ctx: &mut EngineContext) {
        for event in std::mem::take(&mut self.dialogue_events) {
            match event {
                DialogueEvent::LineStarted { index, .. } => {
                    ctx.emit_event(GameEvent::new(EVENT_LINE).with_a(index as f32));
                }
                DialogueEvent::LineRevealed { .. } => {}
                DialogueEvent::Finished { set } => match Script::from_name(&set) {
                    Some(Script::Intro) => self.enter(ctx, Phase::Auth),
                    Some(Script::Bori) => self.enter(ctx, Phase::NextStage),
                    None => log::warn!("finished unknown dialogue '{set}'"),
                },
            }
        }
    }

    fn show_village(&mut self, ctx: &mut EngineContext) {
        let config = self.settings.village;
        let state = VillageState::new(config, ctx.now_ms());

        if let Some(bg) = ctx.scene.find_by_tag_mut(TAG_BACKGROUND) {
            bg.active = true;
        }
        if let Some(bori) = ctx.scene.find_by_tag_mut(TAG_BORI) {
            bori.pos = Vec2::new(config.trigger_x + BORI_OFFSET_X, GROUND_Y);
            bori.active = true;
        }
        if let Some(player) = ctx.scene.find_by_tag_mut(TAG_PLAYER) {
            player.pos = Vec2::new(state.player_x, GROUND_Y);
            player.set_image(&state.sprite_key());
            player.active = true;
        }

        self.keys.clear();
        self.village = Some(state);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // The click that started the game must not also advance line 0.
        let mut begun = false;

        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind: CUSTOM_BEGIN, .. } => {
                    if self.phase == Phase::Start {
                        self.enter(ctx, Phase::IntroDialogue);
                        begun = true;
                    }
                }
                InputEvent::Custom { kind: CUSTOM_ADVANCE, .. } => {
                    if !begun {
                        self.advance(ctx);
                    }
                }
                InputEvent::Custom { kind: CUSTOM_SKIP, .. } => self.skip(ctx),
                InputEvent::KeyDown { key_code } => match Key::from_code(key_code) {
                    Some(key) => self.keys.press(key),
                    None if key_code == KEY_ENTER || key_code == KEY_SPACE => self.advance(ctx),
                    None => {}
                },
                InputEvent::KeyUp { key_code } => {
                    if let Some(key) = Key::from_code(key_code) {
                        self.keys.release(key);
                    }
                }
                InputEvent::PointerDown { pointer, x, y } => {
                    if self.session.is_active() {
                        if !begun {
                            self.advance(ctx);
                        }
                    } else if self.phase == Phase::Village {
                        self.touch.pointer_down(pointer, Vec2::new(x, y), &mut self.touch_actions);
                    }
                }
                InputEvent::PointerMove { pointer, x, y } => {
                    self.touch.pointer_move(pointer, Vec2::new(x, y), &mut self.touch_actions);
                }
                InputEvent::PointerUp { pointer, .. } | InputEvent::PointerCancel { pointer } => {
                    self.touch.pointer_up(pointer, &mut self.touch_actions);
                }
                InputEvent::Custom { kind, .. } => log::debug!("ignored custom event {kind}"),
            }
        }

        for action in self.touch_actions.drain(..) {
            match action {
                // Direction is read back from the widget when walking.
                TouchAction::Move(_) => {}
                TouchAction::Attack => ctx.emit_event(GameEvent::new(EVENT_ATTACK)),
                TouchAction::Jump => ctx.emit_event(GameEvent::new(EVENT_JUMP)),
            }
        }
    }

    /// Keyboard arrows merged with the joystick's horizontal direction.
    fn held_keys(&self) -> KeyState {
        let mut held = self.keys;
        let stick = self.touch.direction();
        if stick.x > 0.0 {
            held.press(Key::ArrowRight);
        } else if stick.x < 0.0 {
            held.press(Key::ArrowLeft);
        }
        held
    }

    fn walk(&mut self, ctx: &mut EngineContext) {
        if !self.phase.shows_village() {
            return;
        }
        let held = self.held_keys();
        let frozen = self.session.is_active();
        let Some(village) = self.village.as_mut() else {
            return;
        };

        let signal = village.tick(ctx.now_ms(), &held, frozen);
        let (x, sprite) = (village.player_x, village.sprite_key());

        if let Some(player) = ctx.scene.find_by_tag_mut(TAG_PLAYER) {
            player.pos.x = x;
            player.set_image(&sprite);
        }

        if signal == Some(VillageSignal::BoriReached) {
            log::info!("player reached Bori at x={x}");
            self.enter(ctx, Phase::NpcDialogue);
        }
    }
}

impl<S: StorageProvider, A: AudioBackend> Game for HanjaVillage<S, A> {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let bg = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bg)
                .with_tag(TAG_BACKGROUND)
                .with_sprite(SpriteComponent::new(TAG_BACKGROUND).with_layer(RenderLayer::Background)),
        );
        let bori = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(bori)
                .with_tag(TAG_BORI)
                .with_sprite(SpriteComponent::new(TAG_BORI).with_layer(RenderLayer::Characters)),
        );
        let player = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(player)
                .with_tag(TAG_PLAYER)
                .with_sprite(
                    SpriteComponent::new(village::sprite_key(village::Direction::Right, 1))
                        .with_layer(RenderLayer::Characters),
                ),
        );

        // Hidden until the village shows.
        for tag in [TAG_BACKGROUND, TAG_BORI, TAG_PLAYER] {
            ctx.scene.set_active_by_tag(tag, false);
        }
        log::info!("HanjaVillage initialized");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if let Some(phase) = self.pending_phase.take() {
            self.enter(ctx, phase);
        }

        // Reveal before reading input, so a line opened this tick shows its
        // first character one interval later.
        self.session.tick(ctx.dt(), &mut self.dialogue_events);
        self.drain_dialogue(ctx);

        self.handle_input(ctx, input);
        self.walk(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        let view = &mut *ctx.view;
        view.phase.push_str(self.phase.name());

        view.set_panel("start-screen", self.phase == Phase::Start);
        view.set_panel("dialogue-box", self.session.is_active());
        view.set_panel("auth", self.phase == Phase::Auth);
        view.set_panel("village", self.phase.shows_village());
        view.set_panel("touch-controls", self.phase == Phase::Village && !self.touch.is_destroyed());
        view.set_panel("next-stage", self.phase == Phase::NextStage);

        if self.session.is_active() {
            view.dialogue = Some(DialogueView {
                text: self.session.displayed_text().to_string(),
                indicator: !self.session.is_typing(),
                line: self.session.current_index(),
            });
        }

        if let Some(message) = &self.auth_message {
            view.set_text("auth-message", message.as_str());
        }
        if let Some(user) = &self.user {
            view.set_text("user-id", user.id.as_str());
            view.set_text("user-level", user.level.to_string());
        }

        let knob = self.touch.knob_offset();
        view.set_offset("joystick-knob", knob.x, knob.y);
    }

    fn load_manifest(&mut self, manifest: &AssetManifest) {
        self.audio.load_manifest(manifest);
        self.sprites = SpriteRegistry::from_manifest(manifest);

        let mut wanted = village::all_sprite_keys();
        wanted.push(TAG_BACKGROUND.to_string());
        wanted.push(TAG_BORI.to_string());
        let missing = self.sprites.missing(wanted.iter().map(String::as_str));
        if !missing.is_empty() {
            log::warn!("manifest is missing sprites: {}", missing.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanja_web::GameRunner;

    const STEP: f32 = 1.0 / 60.0;

    type TestGame = HanjaVillage<MemoryStorage, RecordingAudio>;

    fn runner() -> GameRunner<TestGame> {
        let mut r = GameRunner::new(HanjaVillage::with_backends(MemoryStorage::new(), RecordingAudio::new()));
        r.init();
        r
    }

    fn step(r: &mut GameRunner<TestGame>) {
        r.tick(STEP + 0.0001);
    }

    fn custom(r: &mut GameRunner<TestGame>, kind: u32) {
        r.push_input(InputEvent::custom(kind));
        step(r);
    }

    fn view(r: &GameRunner<TestGame>) -> serde_json::Value {
        serde_json::from_str(r.view_json()).unwrap()
    }

    fn to_auth(r: &mut GameRunner<TestGame>) {
        custom(r, CUSTOM_BEGIN);
        custom(r, CUSTOM_SKIP);
        assert_eq!(r.game().phase(), Phase::Auth);
    }

    fn to_village(r: &mut GameRunner<TestGame>) {
        to_auth(r);
        r.game_mut().signup("a", "b").unwrap();
        r.game_mut().login("a", "b").unwrap();
        step(r);
        assert_eq!(r.game().phase(), Phase::Village);
    }

    #[test]
    fn starts_on_start_screen_with_village_hidden() {
        let r = runner();
        let v = view(&r);
        assert_eq!(v["phase"], "start");
        assert_eq!(v["panels"]["start-screen"], true);
        assert_eq!(v["panels"]["dialogue-box"], false);
        assert_eq!(v["sprites"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn begin_opens_intro_once() {
        let mut r = runner();
        custom(&mut r, CUSTOM_BEGIN);
        assert_eq!(r.game().phase(), Phase::IntroDialogue);
        assert_eq!(r.game().audio().playing(), ["intro_1"]);

        step(&mut r);
        custom(&mut r, CUSTOM_BEGIN);
        assert_eq!(r.game().phase(), Phase::IntroDialogue);
        assert_eq!(r.game().session().current_index(), 0);
        assert_eq!(r.game().audio().played.len(), 1);
    }

    #[test]
    fn begin_click_does_not_advance() {
        let mut r = runner();
        r.push_input(InputEvent::custom(CUSTOM_BEGIN));
        r.push_input(InputEvent::PointerDown { pointer: 0, x: 400.0, y: 300.0 });
        step(&mut r);
        assert!(r.game().session().is_typing());
        assert_eq!(r.game().session().displayed_text(), "");
    }

    #[test]
    fn intro_types_then_click_completes_then_moves_on() {
        let mut r = runner();
        custom(&mut r, CUSTOM_BEGIN);

        // 50 ms per character at 60 ticks/s: the first shows within four ticks.
        for _ in 0..4 {
            step(&mut r);
        }
        let v = view(&r);
        assert_eq!(v["dialogue"]["text"], "하");
        assert_eq!(v["dialogue"]["indicator"], false);

        r.push_input(InputEvent::PointerDown { pointer: 0, x: 1.0, y: 1.0 });
        step(&mut r);
        let v = view(&r);
        assert_eq!(v["dialogue"]["text"], "하...");
        assert_eq!(v["dialogue"]["indicator"], true);

        custom(&mut r, CUSTOM_ADVANCE);
        let v = view(&r);
        assert_eq!(v["dialogue"]["line"], 1);
        assert_eq!(v["dialogue"]["text"], "");
        assert_eq!(r.game().audio().playing(), ["intro_2"]);
        assert!(v["events"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["kind"] == EVENT_LINE && e["a"] == 1.0));
    }

    #[test]
    fn finishing_intro_reaches_auth() {
        let mut r = runner();
        custom(&mut r, CUSTOM_BEGIN);
        // Each line: one press completes it, one press moves on.
        for _ in 0..14 {
            r.push_input(InputEvent::KeyDown { key_code: KEY_ENTER });
            step(&mut r);
        }
        assert_eq!(r.game().phase(), Phase::Auth);
        assert!(r.game().audio().playing().is_empty());
        let v = view(&r);
        assert_eq!(v["panels"]["auth"], true);
        assert_eq!(v["panels"]["dialogue-box"], false);
    }

    #[test]
    fn skip_jumps_to_auth_and_silences_narration() {
        let mut r = runner();
        to_auth(&mut r);
        assert!(!r.game().session().is_active());
        assert!(r.game().audio().playing().is_empty());
    }

    #[test]
    fn skip_outside_dialogue_is_ignored() {
        let mut r = runner();
        custom(&mut r, CUSTOM_SKIP);
        assert_eq!(r.game().phase(), Phase::Start);
    }

    #[test]
    fn failed_login_stays_on_auth_with_message() {
        let mut r = runner();
        to_auth(&mut r);
        r.game_mut().signup("a", "b").unwrap();
        assert!(matches!(r.game_mut().login("a", "nope"), Err(AuthError::InvalidCredentials)));
        step(&mut r);
        assert_eq!(r.game().phase(), Phase::Auth);
        assert_eq!(view(&r)["texts"]["auth-message"], "아이디 또는 비밀번호가 맞지 않아요.");
    }

    #[test]
    fn login_before_auth_does_not_skip_intro() {
        let mut r = runner();
        r.game_mut().signup("a", "b").unwrap();
        r.game_mut().login("a", "b").unwrap();
        step(&mut r);
        assert_eq!(r.game().phase(), Phase::Start);
    }

    #[test]
    fn login_shows_village() {
        let mut r = runner();
        to_village(&mut r);
        let v = view(&r);
        assert_eq!(v["panels"]["village"], true);
        assert_eq!(v["panels"]["touch-controls"], true);
        assert_eq!(v["texts"]["user-level"], "1");
        let tags: Vec<_> = v["sprites"].as_array().unwrap().iter().map(|s| s["tag"].clone()).collect();
        assert_eq!(tags, ["village-bg", "bori", "player"]);
        assert_eq!(r.game().village().unwrap().player_x, 50.0);
    }

    #[test]
    fn walking_right_reaches_bori_and_opens_her_dialogue() {
        let mut r = runner();
        to_village(&mut r);
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        for _ in 0..200 {
            step(&mut r);
        }
        let game = r.game();
        assert_eq!(game.phase(), Phase::NpcDialogue);
        assert_eq!(game.session().active_set(), Some("bori"));
        assert_eq!(game.village().unwrap().player_x, 325.0);
        // Bori is unvoiced.
        assert!(game.audio().playing().is_empty());
    }

    #[test]
    fn player_is_frozen_during_bori_dialogue() {
        let mut r = runner();
        to_village(&mut r);
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        for _ in 0..100 {
            step(&mut r);
        }
        assert_eq!(r.game().phase(), Phase::NpcDialogue);

        r.push_input(InputEvent::KeyDown { key_code: 37 });
        for _ in 0..20 {
            step(&mut r);
        }
        assert_eq!(r.game().village().unwrap().player_x, 325.0);
    }

    #[test]
    fn bori_dialogue_end_is_next_stage() {
        let mut r = runner();
        to_village(&mut r);
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        for _ in 0..100 {
            step(&mut r);
        }
        for _ in 0..8 {
            custom(&mut r, CUSTOM_ADVANCE);
        }
        assert_eq!(r.game().phase(), Phase::NextStage);
        assert!(r.game().touch().is_destroyed());
        let v = view(&r);
        assert_eq!(v["panels"]["next-stage"], true);
        assert_eq!(v["panels"]["touch-controls"], false);
    }

    #[test]
    fn skip_during_bori_dialogue_reaches_next_stage() {
        let mut r = runner();
        to_village(&mut r);
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        for _ in 0..100 {
            step(&mut r);
        }
        assert_eq!(r.game().phase(), Phase::NpcDialogue);

        custom(&mut r, CUSTOM_SKIP);
        assert_eq!(r.game().phase(), Phase::NextStage);
        assert!(!r.game().session().is_active());
        assert!(r.game().touch().is_destroyed());
    }

    #[test]
    fn joystick_walks_like_arrow_keys() {
        let mut r = runner();
        to_village(&mut r);
        let center = touch_layout().joystick_center;
        r.push_input(InputEvent::PointerDown { pointer: 7, x: center.x - 50.0, y: center.y });
        step(&mut r);
        assert_eq!(r.game().village().unwrap().player_x, 46.0);
        assert_eq!(r.game().village().unwrap().direction, village::Direction::Left);
        assert!(view(&r)["offsets"]["joystick-knob"][0].as_f64().unwrap() < 0.0);

        r.push_input(InputEvent::PointerUp { pointer: 7, x: 0.0, y: 0.0 });
        step(&mut r);
        step(&mut r);
        assert_eq!(r.game().village().unwrap().player_x, 46.0);
    }

    #[test]
    fn touch_buttons_emit_events() {
        let mut r = runner();
        to_village(&mut r);
        let layout = touch_layout();
        let attack = layout.attack_button.min + Vec2::splat(10.0);
        r.push_input(InputEvent::PointerDown { pointer: 1, x: attack.x, y: attack.y });
        step(&mut r);
        let events = view(&r)["events"].clone();
        assert!(events.as_array().unwrap().iter().any(|e| e["kind"] == EVENT_ATTACK));
    }

    #[test]
    fn settings_change_typing_speed() {
        let mut r = runner();
        let settings = GameSettings::from_json(r#"{ "typewriter": { "interval_ms": 10 } }"#).unwrap();
        r.game_mut().apply_settings(settings).unwrap();
        custom(&mut r, CUSTOM_BEGIN);
        step(&mut r);
        // 16.7 ms of reveal at 10 ms per character.
        assert_eq!(r.game().session().displayed_text(), "하");
    }

    #[test]
    fn invalid_village_settings_are_refused() {
        let mut r = runner();
        let settings = GameSettings {
            village: village::VillageConfig { min_x: 600.0, ..Default::default() },
            ..GameSettings::default()
        };
        assert!(matches!(
            r.game_mut().apply_settings(settings),
            Err(SettingsError::Village(_))
        ));

        to_village(&mut r);
        r.push_input(InputEvent::KeyDown { key_code: 39 });
        step(&mut r);
        assert_eq!(r.game().village().unwrap().player_x, 54.0);
    }

    #[test]
    fn partial_manifest_still_plays_narration() {
        let mut r = runner();
        r.load_manifest(r#"{ "sounds": { "intro_1": { "path": "audio/intro_1.mp3" } } }"#);
        custom(&mut r, CUSTOM_BEGIN);
        assert_eq!(r.game().audio().playing(), ["intro_1"]);
    }
}
