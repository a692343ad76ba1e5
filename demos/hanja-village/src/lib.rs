use wasm_bindgen::prelude::*;
use hanja_engine::*;

mod auth;
mod game;
mod script;
mod settings;
mod village;
use game::HanjaVillage;
use settings::GameSettings;

hanja_web::export_game!(HanjaVillage, "hanja-village");

/// Create an account. Returns the new player's level; the error is the
/// message for the auth panel.
#[wasm_bindgen]
pub fn game_signup(id: &str, password: &str) -> Result<u32, JsValue> {
    with_runner(|r| r.game_mut().signup(id, password))
        .map(|user| user.level)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Sign in; on the auth screen the village opens on the next tick.
#[wasm_bindgen]
pub fn game_login(id: &str, password: &str) -> Result<u32, JsValue> {
    with_runner(|r| r.game_mut().login(id, password))
        .map(|user| user.level)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Apply a partial settings document. Unparsable or out-of-range settings
/// are refused and the current ones stay.
#[wasm_bindgen]
pub fn game_load_settings(json: &str) -> Result<(), JsValue> {
    let settings = GameSettings::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    with_runner(|r| r.game_mut().apply_settings(settings))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Whether the page should show the touch controls.
#[wasm_bindgen]
pub fn is_mobile() -> bool {
    hanja_web::is_mobile_device(&hanja_web::DeviceSignals::from_browser())
}
