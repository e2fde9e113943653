/// Tunables for the background effect. Immutable once the engine is built.
#[derive(Clone, Debug)]
pub struct Config {
    /// Overall energy; scales particle speed, count, and phase rate.
    pub intensity: f64,
    /// Number of glowing steel/teal pools.
    pub blob_count: usize,
    /// Alpha of a glow pool at its center.
    pub blob_alpha: f64,
    /// Probability that a pool draws its hue from the cool cyan band
    /// rather than the narrow steel-adjacent band. In [0, 1].
    pub cool_bias: f64,
    /// Headlight streak particles on/off.
    pub streaks: bool,
    /// When set, honor the OS prefers-reduced-motion preference at startup.
    pub respect_reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intensity: 1.35,
            blob_count: 5,
            blob_alpha: 0.52,
            cool_bias: 0.7,
            streaks: true,
            // Shipped default: the preference is read but not honored.
            respect_reduced_motion: false,
        }
    }
}
