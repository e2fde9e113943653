use super::constants::*;

/// Scalar flow field over viewport space and the global phase `t`.
///
/// Deterministic and total; all randomness lives in particle initialization.
/// The result is read as an angle in radians when advecting streaks, giving
/// spatially coherent motion without storing a discretized grid.
pub fn field(x: f64, y: f64, t: f64) -> f64 {
    ((x + y) * FIELD_SCALE + t * FIELD_PHASE_FWD).sin()
        + ((x - y) * FIELD_SCALE * FIELD_CROSS_SCALE - t * FIELD_PHASE_BWD).cos()
}
