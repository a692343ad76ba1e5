//! Device sniffing for choosing the touch layout.

use wasm_bindgen::JsValue;

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Largest viewport width still treated as a handheld when touch is present.
pub const SMALL_SCREEN_MAX_WIDTH: f64 = 1024.0;

/// What the browser tells us about the device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSignals {
    pub user_agent: String,
    pub has_touch: bool,
    pub viewport_width: f64,
}

impl DeviceSignals {
    /// Read the signals from `window`. Missing pieces read as desktop.
    pub fn from_browser() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let navigator = window.navigator();
        let user_agent = navigator.user_agent().unwrap_or_default();
        let touch_handler = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(f64::MAX);

        Self {
            user_agent,
            has_touch: touch_handler || navigator.max_touch_points() > 0,
            viewport_width,
        }
    }
}

/// A known handheld user agent, or a touch device with a small viewport.
pub fn is_mobile_device(signals: &DeviceSignals) -> bool {
    let agent = signals.user_agent.to_ascii_lowercase();
    let known_agent = MOBILE_AGENTS.iter().any(|m| agent.contains(m));
    known_agent || (signals.has_touch && signals.viewport_width <= SMALL_SCREEN_MAX_WIDTH)
}
