// Palette and tuning constants for the background effect.

// Hue bases (degrees): steel/cyan pools plus warm amber headlights
pub const HUE_STEEL: f64 = 210.0;
pub const HUE_CYAN: f64 = 195.0;
pub const HUE_AMBER: f64 = 40.0;

// Frame pacing
pub const MAX_FRAME_DT_MS: f64 = 50.0; // clamp after tab backgrounding
pub const PHASE_PERIOD_MS: f64 = 6500.0; // divided by intensity

// Trail fade painted before everything else each frame
pub const FADE_ALPHA: f64 = 0.05;

// Glow pools
pub const POOL_RADIUS_MIN_FRAC: f64 = 0.30; // of min viewport dimension
pub const POOL_RADIUS_MAX_FRAC: f64 = 0.50;
pub const POOL_SPEED_X_MIN: f64 = 0.10;
pub const POOL_SPEED_X_MAX: f64 = 0.26;
pub const POOL_SPEED_Y_MIN: f64 = 0.08;
pub const POOL_SPEED_Y_MAX: f64 = 0.22;
pub const POOL_ORBIT_FRAC: f64 = 0.27; // orbit radius as fraction of viewport
pub const POOL_TIME_SCALE: f64 = 7.5;
pub const POOL_SATURATION: f64 = 85.0;
pub const POOL_LIGHTNESS: f64 = 60.0;
pub const STEEL_BAND_OFFSET: f64 = 10.0; // steel band is [steel-10, steel+2)
pub const STEEL_BAND_SPAN: f64 = 12.0;

// Headlight streaks
pub const STREAKS_PER_INTENSITY: f64 = 120.0;
pub const STREAK_SPEED_MIN: f64 = 0.9;
pub const STREAK_SPEED_MAX: f64 = 2.3;
pub const STREAK_WIDTH_MIN: f64 = 0.8;
pub const STREAK_WIDTH_MAX: f64 = 2.8;
pub const STREAK_LIFE_MIN: i32 = 80; // ticks
pub const STREAK_LIFE_MAX: i32 = 200;
pub const WARM_PROBABILITY: f64 = 0.22;
pub const STREAK_STEP_SCALE: f64 = 0.09; // displacement = v * dt * scale
pub const STREAK_MARGIN_PX: f64 = 160.0; // respawn once past this margin
pub const HUE_DRIFT_STEP: f64 = 0.15; // per frame, cool streaks only
pub const WARM_SATURATION: f64 = 95.0;
pub const WARM_LIGHTNESS: f64 = 58.0;
pub const WARM_ALPHA: f64 = 0.22;
pub const COOL_SATURATION: f64 = 85.0;
pub const COOL_LIGHTNESS: f64 = 62.0;
pub const COOL_ALPHA: f64 = 0.18;

// Motion field
pub const FIELD_SCALE: f64 = 0.00125; // spatial smoothing
pub const FIELD_CROSS_SCALE: f64 = 1.1;
pub const FIELD_PHASE_FWD: f64 = 0.7;
pub const FIELD_PHASE_BWD: f64 = 0.35;
