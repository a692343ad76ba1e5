pub mod audio;
pub mod platform;
pub mod runner;
pub mod storage;

pub use audio::HtmlAudio;
pub use platform::{is_mobile_device, DeviceSignals};
pub use runner::GameRunner;
pub use storage::LocalStorage;

/// Generate the `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function, usable by the game's own extra exports
/// - exports for init, tick, pointer/key/custom input, the asset manifest and
///   the view snapshot
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use hanja_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// hanja_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `hanja_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(pointer: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { pointer, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(pointer: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { pointer, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(pointer: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { pointer, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_cancel(pointer: u32) {
            with_runner(|r| r.push_input(InputEvent::PointerCancel { pointer }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_view_json() -> String {
            with_runner(|r| r.view_json().to_string())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
