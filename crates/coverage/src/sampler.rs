use std::f64::consts::TAU;

/// Evenly spaced angles covering a full turn, dense enough that two
/// consecutive samples on the largest radius are less than a pixel apart.
///
/// The sequence includes both `0` and `2π`.
#[derive(Clone, Debug)]
pub struct AngularSampler {
    step: f64,
    step_count: usize,
}

impl AngularSampler {
    /// Creates a sampler for an ellipse whose larger semi-axis is `max_radius`.
    ///
    /// `max_radius` must be strictly positive.
    #[must_use]
    pub fn new(max_radius: f64) -> Self {
        debug_assert!(max_radius > 0.0, "degenerate ellipse reached the sampler");

        // half a pixel of arc at the outermost radius
        let step = (1.0 / max_radius).atan() * 0.5;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step_count = (TAU / step).ceil() as usize;

        Self {
            step: TAU / step_count as f64,
            step_count,
        }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The number of steps in a full turn. One more angle than this is
    /// produced by [`AngularSampler::angles`].
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.step_count).map(|i| i as f64 * self.step)
    }
}
