use rand::prelude::*;
use std::f64::consts::TAU;

use super::config::Config;
use super::constants::*;

/// A soft radial-gradient disc orbiting the viewport center.
///
/// Radius, hue, speeds, and phases are fixed at creation; the orbital center
/// is derived from the global phase each frame rather than stored.
#[derive(Clone, Debug)]
pub struct GlowPool {
    pub radius: f64,
    pub hue: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub phase_x: f64,
    pub phase_y: f64,
}

impl GlowPool {
    pub fn center(&self, t: f64, view_w: f64, view_h: f64) -> (f64, f64) {
        let time = t * POOL_TIME_SCALE;
        let cx = view_w * 0.5 + (time * self.speed_x + self.phase_x).cos() * (view_w * POOL_ORBIT_FRAC);
        let cy = view_h * 0.5 + (time * self.speed_y + self.phase_y).sin() * (view_h * POOL_ORBIT_FRAC);
        (cx, cy)
    }
}

pub fn create_glow_pools<R: Rng>(
    config: &Config,
    view_w: f64,
    view_h: f64,
    rng: &mut R,
) -> Vec<GlowPool> {
    (0..config.blob_count)
        .map(|_| {
            let hue = if rng.gen_bool(config.cool_bias.clamp(0.0, 1.0)) {
                rng.gen_range(HUE_CYAN..HUE_STEEL)
            } else {
                let steel_lo = HUE_STEEL - STEEL_BAND_OFFSET;
                rng.gen_range(steel_lo..steel_lo + STEEL_BAND_SPAN)
            };
            GlowPool {
                radius: view_w.min(view_h)
                    * rng.gen_range(POOL_RADIUS_MIN_FRAC..POOL_RADIUS_MAX_FRAC),
                hue,
                speed_x: rng.gen_range(POOL_SPEED_X_MIN..POOL_SPEED_X_MAX) * config.intensity,
                speed_y: rng.gen_range(POOL_SPEED_Y_MIN..POOL_SPEED_Y_MAX) * config.intensity,
                phase_x: rng.gen_range(0.0..TAU),
                phase_y: rng.gen_range(0.0..TAU),
            }
        })
        .collect()
}

/// A thin fast-moving line segment advected along the motion field.
#[derive(Clone, Debug)]
pub struct StreakParticle {
    pub x: f64,
    pub y: f64,
    /// Speed magnitude, already scaled by intensity.
    pub v: f64,
    /// Stroke width.
    pub w: f64,
    /// Remaining ticks; decremented once per processed frame.
    pub life: i32,
    pub warm: bool,
    pub hue: f64,
}

impl StreakParticle {
    pub fn spawn<R: Rng>(rng: &mut R, view_w: f64, view_h: f64, intensity: f64) -> Self {
        let (warm, hue) = pick_tint(rng);
        Self {
            // Degenerate viewports clamp to a 1px band instead of panicking.
            x: rng.gen_range(0.0..view_w.max(1.0)),
            y: rng.gen_range(0.0..view_h.max(1.0)),
            v: rng.gen_range(STREAK_SPEED_MIN..STREAK_SPEED_MAX) * intensity,
            w: rng.gen_range(STREAK_WIDTH_MIN..STREAK_WIDTH_MAX),
            life: rng.gen_range(STREAK_LIFE_MIN..STREAK_LIFE_MAX),
            warm,
            hue,
        }
    }

    /// Reset in place once life or bounds are exceeded. Speed and width are
    /// kept; the particle object itself is never deallocated.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, view_w: f64, view_h: f64) {
        self.x = rng.gen_range(0.0..view_w.max(1.0));
        self.y = rng.gen_range(0.0..view_h.max(1.0));
        self.life = rng.gen_range(STREAK_LIFE_MIN..STREAK_LIFE_MAX);
        let (warm, hue) = pick_tint(rng);
        self.warm = warm;
        self.hue = hue;
    }

    /// Cool streaks breathe from cyan toward steel, wrapping back to cyan.
    pub fn drift_hue(&mut self) {
        if !self.warm {
            self.hue += HUE_DRIFT_STEP;
            if self.hue > HUE_STEEL {
                self.hue = HUE_CYAN;
            }
        }
    }

    pub fn out_of_bounds(&self, view_w: f64, view_h: f64) -> bool {
        self.x < -STREAK_MARGIN_PX
            || self.x > view_w + STREAK_MARGIN_PX
            || self.y < -STREAK_MARGIN_PX
            || self.y > view_h + STREAK_MARGIN_PX
    }
}

fn pick_tint<R: Rng>(rng: &mut R) -> (bool, f64) {
    let warm = rng.gen_bool(WARM_PROBABILITY);
    let hue = if warm {
        HUE_AMBER
    } else {
        rng.gen_range(HUE_CYAN..HUE_STEEL)
    };
    (warm, hue)
}

pub fn create_streaks<R: Rng>(
    config: &Config,
    view_w: f64,
    view_h: f64,
    rng: &mut R,
) -> Vec<StreakParticle> {
    if !config.streaks || config.intensity <= 0.0 {
        return Vec::new();
    }
    let count = (STREAKS_PER_INTENSITY * config.intensity).round() as usize;
    (0..count)
        .map(|_| StreakParticle::spawn(rng, view_w, view_h, config.intensity))
        .collect()
}
