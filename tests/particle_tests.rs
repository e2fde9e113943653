// Host-side tests for particle generation and respawn.
// The crate itself is wasm-only, so the pure core modules are included directly.

#![allow(dead_code)]
mod bg {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use bg::config::Config;
use bg::constants::*;
use bg::particles::{create_glow_pools, create_streaks, StreakParticle};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEW_W: f64 = 1280.0;
const VIEW_H: f64 = 720.0;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn glow_pool_count_matches_config() {
    let config = Config::default();
    let pools = create_glow_pools(&config, VIEW_W, VIEW_H, &mut rng(1));
    assert_eq!(pools.len(), 5);

    let none = Config {
        blob_count: 0,
        ..Config::default()
    };
    assert!(create_glow_pools(&none, VIEW_W, VIEW_H, &mut rng(1)).is_empty());
}

#[test]
fn glow_pool_fields_are_in_range() {
    let config = Config::default();
    for seed in 0..50 {
        for pool in create_glow_pools(&config, VIEW_W, VIEW_H, &mut rng(seed)) {
            let min_dim = VIEW_W.min(VIEW_H);
            assert!(pool.radius >= min_dim * POOL_RADIUS_MIN_FRAC);
            assert!(pool.radius < min_dim * POOL_RADIUS_MAX_FRAC);
            assert!(pool.speed_x >= POOL_SPEED_X_MIN * config.intensity);
            assert!(pool.speed_x < POOL_SPEED_X_MAX * config.intensity);
            assert!(pool.speed_y >= POOL_SPEED_Y_MIN * config.intensity);
            assert!(pool.speed_y < POOL_SPEED_Y_MAX * config.intensity);
            // Union of the cool band [195, 210) and the steel band [200, 212).
            let steel_hi = HUE_STEEL - STEEL_BAND_OFFSET + STEEL_BAND_SPAN;
            assert!(pool.hue >= HUE_CYAN && pool.hue < steel_hi);
        }
    }
}

#[test]
fn cool_bias_extremes_pin_the_hue_bands() {
    let all_cool = Config {
        cool_bias: 1.0,
        ..Config::default()
    };
    for pool in create_glow_pools(&all_cool, VIEW_W, VIEW_H, &mut rng(7)) {
        assert!(pool.hue >= HUE_CYAN && pool.hue < HUE_STEEL);
    }

    let all_steel = Config {
        cool_bias: 0.0,
        ..Config::default()
    };
    for pool in create_glow_pools(&all_steel, VIEW_W, VIEW_H, &mut rng(7)) {
        assert!(pool.hue >= HUE_STEEL - STEEL_BAND_OFFSET);
        assert!(pool.hue < HUE_STEEL - STEEL_BAND_OFFSET + STEEL_BAND_SPAN);
    }
}

#[test]
fn cool_bias_mixture_is_roughly_seventy_thirty() {
    // Hues below 200 can only come from the cool band: P = 0.7 * (5/15).
    let config = Config::default();
    let mut below_200 = 0usize;
    let mut total = 0usize;
    for seed in 0..400 {
        for pool in create_glow_pools(&config, VIEW_W, VIEW_H, &mut rng(seed)) {
            if pool.hue < HUE_STEEL - STEEL_BAND_OFFSET {
                below_200 += 1;
            }
            total += 1;
        }
    }
    let frac = below_200 as f64 / total as f64;
    let expected = config.cool_bias * (5.0 / 15.0);
    assert!(
        (frac - expected).abs() < 0.06,
        "band mixture off: {frac} vs {expected}"
    );
}

#[test]
fn streak_count_scales_with_intensity() {
    let config = Config::default();
    let streaks = create_streaks(&config, VIEW_W, VIEW_H, &mut rng(2));
    assert_eq!(streaks.len(), 162); // round(120 * 1.35)
}

#[test]
fn streaks_disabled_or_zero_intensity_yield_empty_population() {
    let off = Config {
        streaks: false,
        ..Config::default()
    };
    assert!(create_streaks(&off, VIEW_W, VIEW_H, &mut rng(3)).is_empty());

    let flat = Config {
        intensity: 0.0,
        ..Config::default()
    };
    assert!(create_streaks(&flat, VIEW_W, VIEW_H, &mut rng(3)).is_empty());

    let negative = Config {
        intensity: -1.0,
        ..Config::default()
    };
    assert!(create_streaks(&negative, VIEW_W, VIEW_H, &mut rng(3)).is_empty());
}

#[test]
fn streak_fields_are_in_range() {
    let config = Config::default();
    for seed in 0..20 {
        for s in create_streaks(&config, VIEW_W, VIEW_H, &mut rng(seed)) {
            assert!(s.x >= 0.0 && s.x < VIEW_W);
            assert!(s.y >= 0.0 && s.y < VIEW_H);
            assert!(s.v >= STREAK_SPEED_MIN * config.intensity);
            assert!(s.v < STREAK_SPEED_MAX * config.intensity);
            assert!(s.w >= STREAK_WIDTH_MIN && s.w < STREAK_WIDTH_MAX);
            assert!((STREAK_LIFE_MIN..STREAK_LIFE_MAX).contains(&s.life));
            if s.warm {
                assert_eq!(s.hue, HUE_AMBER);
            } else {
                assert!(s.hue >= HUE_CYAN && s.hue < HUE_STEEL);
            }
        }
    }
}

#[test]
fn warm_fraction_is_near_probability() {
    let config = Config::default();
    let mut warm = 0usize;
    let mut total = 0usize;
    for seed in 0..50 {
        for s in create_streaks(&config, VIEW_W, VIEW_H, &mut rng(seed)) {
            if s.warm {
                warm += 1;
            }
            total += 1;
        }
    }
    let frac = warm as f64 / total as f64;
    assert!(
        (frac - WARM_PROBABILITY).abs() < 0.03,
        "warm fraction off: {frac}"
    );
}

#[test]
fn respawn_resets_position_life_and_tint_in_place() {
    let mut r = rng(11);
    let mut s = StreakParticle::spawn(&mut r, VIEW_W, VIEW_H, 1.35);
    let (v, w) = (s.v, s.w);
    s.x = -500.0;
    s.life = -1;
    s.respawn(&mut r, VIEW_W, VIEW_H);
    assert!(s.x >= 0.0 && s.x < VIEW_W);
    assert!(s.y >= 0.0 && s.y < VIEW_H);
    assert!((STREAK_LIFE_MIN..STREAK_LIFE_MAX).contains(&s.life));
    // Speed and stroke width survive a respawn.
    assert_eq!(s.v, v);
    assert_eq!(s.w, w);
}

#[test]
fn hue_drift_wraps_from_steel_back_to_cyan() {
    let mut r = rng(12);
    let mut s = StreakParticle::spawn(&mut r, VIEW_W, VIEW_H, 1.35);
    s.warm = false;
    s.hue = HUE_STEEL - 0.01;
    s.drift_hue();
    assert_eq!(s.hue, HUE_CYAN);

    s.hue = HUE_CYAN;
    s.drift_hue();
    assert!((s.hue - (HUE_CYAN + HUE_DRIFT_STEP)).abs() < 1e-12);

    // Warm streaks keep their amber hue.
    s.warm = true;
    s.hue = HUE_AMBER;
    s.drift_hue();
    assert_eq!(s.hue, HUE_AMBER);
}

#[test]
fn out_of_bounds_uses_the_extended_margin() {
    let mut r = rng(13);
    let mut s = StreakParticle::spawn(&mut r, VIEW_W, VIEW_H, 1.35);
    s.x = -STREAK_MARGIN_PX + 1.0;
    s.y = VIEW_H * 0.5;
    assert!(!s.out_of_bounds(VIEW_W, VIEW_H));
    s.x = -STREAK_MARGIN_PX - 1.0;
    assert!(s.out_of_bounds(VIEW_W, VIEW_H));
    s.x = VIEW_W + STREAK_MARGIN_PX + 1.0;
    assert!(s.out_of_bounds(VIEW_W, VIEW_H));
    s.x = VIEW_W * 0.5;
    s.y = VIEW_H + STREAK_MARGIN_PX + 1.0;
    assert!(s.out_of_bounds(VIEW_W, VIEW_H));
}

#[test]
fn degenerate_viewport_does_not_panic() {
    let config = Config::default();
    let streaks = create_streaks(&config, 0.0, 0.0, &mut rng(14));
    assert_eq!(streaks.len(), 162);
    for s in &streaks {
        assert!(s.x >= 0.0 && s.x < 1.0);
        assert!(s.y >= 0.0 && s.y < 1.0);
    }
}
