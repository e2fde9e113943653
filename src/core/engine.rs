use rand::prelude::*;

use super::config::Config;
use super::constants::*;
use super::field::field;
use super::particles::{create_glow_pools, create_streaks, GlowPool, StreakParticle};

/// Canvas-style compositing modes the renderer switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    Screen,
    Lighter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn white(alpha: f64) -> Self {
        Self::new(0.0, 0.0, 100.0, alpha)
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn to_css(self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Minimal drawing capability the engine needs. Implemented by the real 2D
/// canvas on wasm and by a recording surface in host tests.
pub trait Surface {
    fn set_composite(&mut self, mode: Composite);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla);
    /// Fill a disc with a radial gradient from `color` at the center to fully
    /// transparent at `radius`.
    fn fill_glow(&mut self, cx: f64, cy: f64, radius: f64, color: Hsla);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Hsla);
}

/// One engine instance per page. Owns all mutable animation state so the
/// frame and visibility handlers can share it by exclusive borrow.
pub struct Engine {
    pub config: Config,
    pub pools: Vec<GlowPool>,
    pub streaks: Vec<StreakParticle>,
    view_w: f64,
    view_h: f64,
    t: f64,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: Config, view_w: f64, view_h: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let pools = create_glow_pools(&config, view_w, view_h, &mut rng);
        let streaks = create_streaks(&config, view_w, view_h, &mut rng);
        Self {
            config,
            pools,
            streaks,
            view_w,
            view_h,
            t: 0.0,
            rng,
        }
    }

    /// Track the CSS-pixel viewport. Particles are not regenerated; pool
    /// radii keep their creation-time sizing.
    pub fn set_viewport(&mut self, view_w: f64, view_h: f64) {
        self.view_w = view_w;
        self.view_h = view_h;
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.view_w, self.view_h)
    }

    /// Global motion-field phase.
    pub fn phase(&self) -> f64 {
        self.t
    }

    /// Advance one frame and paint it. `raw_dt_ms` is the uncorrected gap
    /// between frame timestamps; it is clamped here so a backgrounded tab
    /// resumes with a small step instead of one huge one.
    pub fn frame(&mut self, raw_dt_ms: f64, surface: &mut impl Surface) {
        let dt = raw_dt_ms.min(MAX_FRAME_DT_MS);
        self.t += dt / (PHASE_PERIOD_MS / self.config.intensity);

        // Fade toward white first so older content trails off.
        surface.set_composite(Composite::SourceOver);
        surface.fill_rect(0.0, 0.0, self.view_w, self.view_h, Hsla::white(FADE_ALPHA));

        if !self.pools.is_empty() {
            surface.set_composite(Composite::Screen);
            for pool in &self.pools {
                let (cx, cy) = pool.center(self.t, self.view_w, self.view_h);
                let color = Hsla::new(
                    pool.hue,
                    POOL_SATURATION,
                    POOL_LIGHTNESS,
                    self.config.blob_alpha,
                );
                surface.fill_glow(cx, cy, pool.radius, color);
            }
        }

        if !self.streaks.is_empty() {
            surface.set_composite(Composite::Lighter);
            for streak in &mut self.streaks {
                let angle = field(streak.x, streak.y, self.t);
                let (x0, y0) = (streak.x, streak.y);
                streak.x += angle.cos() * streak.v * dt * STREAK_STEP_SCALE;
                streak.y += angle.sin() * streak.v * dt * STREAK_STEP_SCALE;
                surface.stroke_line(x0, y0, streak.x, streak.y, streak.w, streak_color(streak));

                streak.drift_hue();
                streak.life -= 1;
                if streak.life < 0 || streak.out_of_bounds(self.view_w, self.view_h) {
                    streak.respawn(&mut self.rng, self.view_w, self.view_h);
                }
            }
        }
    }
}

fn streak_color(streak: &StreakParticle) -> Hsla {
    if streak.warm {
        Hsla::new(streak.hue, WARM_SATURATION, WARM_LIGHTNESS, WARM_ALPHA)
    } else {
        Hsla::new(streak.hue, COOL_SATURATION, COOL_LIGHTNESS, COOL_ALPHA)
    }
}
