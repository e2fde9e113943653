use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{DISABLE_FLAGS, REDUCED_MOTION_QUERY};

/// True when the host page set either process-wide disable flag.
pub fn opt_out(window: &web::Window) -> bool {
    DISABLE_FLAGS.iter().any(|flag| {
        js_sys::Reflect::get(window, &JsValue::from_str(flag))
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    })
}

/// Read once at startup; the media query is not watched continuously.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn performance_now(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}
