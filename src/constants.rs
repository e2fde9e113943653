// Contract with the host page.

/// Canvas element the effect paints onto; absent means the effect stays off.
pub const CANVAS_ID: &str = "bgCanvas";

/// Either global being truthy on `window` fully disables the engine
/// (shared across sibling sites that may want the background off).
pub const DISABLE_FLAGS: [&str; 2] = ["SITE_DISABLE_BG", "HD_DISABLE_BG"];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Cap on devicePixelRatio to bound backing-store memory and fill cost.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
