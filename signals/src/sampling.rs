use thiserror::Error;

/// Sampling parameters for one run: `steps` evenly spaced samples covering
/// the symmetric window `[-time_bound, time_bound]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
    pub time_bound: f64,
    pub steps: usize,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("time bound must be positive and finite (got {0})")]
    BadTimeBound(f64),
    #[error("at least two samples are required (got {0})")]
    TooFewSteps(usize),
}

impl Default for SamplingConfig {
    fn default() -> SamplingConfig {
        SamplingConfig {
            time_bound: 10.0,
            steps: 100_000,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_bound.is_finite() || self.time_bound <= 0.0 {
            return Err(ConfigError::BadTimeBound(self.time_bound));
        }
        if self.steps < 2 {
            return Err(ConfigError::TooFewSteps(self.steps));
        }
        Ok(())
    }

    /// The sampling interval the frequency axis is scaled by. Defined as
    /// `time_bound / steps`, which is NOT the spacing of the inclusive
    /// grid (that is [`grid_spacing`](SamplingConfig::grid_spacing)); the
    /// mismatch is kept so the frequency axis comes out bit-identical to
    /// the historical behaviour.
    pub fn time_step(&self) -> f64 {
        self.time_bound / self.steps as f64
    }

    /// Distance between adjacent grid points: `2·time_bound / (steps − 1)`.
    pub fn grid_spacing(&self) -> f64 {
        2.0 * self.time_bound / (self.steps - 1) as f64
    }

    pub fn grid(&self) -> TimeGrid {
        TimeGrid::new(*self)
    }
}

/// A uniform time grid over `[-time_bound, time_bound]`, both endpoints
/// included. Built once per run and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    values: Vec<f64>,
}

impl TimeGrid {
    fn new(config: SamplingConfig) -> TimeGrid {
        let step = config.grid_spacing();
        let mut values: Vec<f64> = (0..config.steps)
            .map(|i| -config.time_bound + step * i as f64)
            .collect();
        // Pin the upper endpoint exactly; accumulated rounding in
        // -time_bound + step*i can leave it a few ulps short.
        if let Some(last) = values.last_mut() {
            *last = config.time_bound;
        }
        TimeGrid { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
