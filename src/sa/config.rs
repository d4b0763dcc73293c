//! SA configuration.

use crate::error::{KnapsackError, Result};

/// Seed used when [`SaConfig::seed`] is `None`.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for Simulated Annealing.
///
/// Temperature follows geometric cooling: `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use u_knapsack::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.95)
///     .with_iterations_per_temperature(200)
///     .with_patience_temps(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The algorithm stops once T drops to this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of trials at each temperature level.
    pub iterations_per_temperature: usize,

    /// Number of top-ranked outside items considered per move.
    pub top_k: usize,

    /// Consecutive temperature levels without any accepted move before
    /// stopping early.
    pub patience_temps: usize,

    /// Maximum total trials (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed (None for [`DEFAULT_SEED`]).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            min_temperature: 1e-3,
            cooling_rate: 0.97,
            iterations_per_temperature: 120,
            top_k: 40,
            patience_temps: 3,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the temperature at which the run stops.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the number of trials per temperature level.
    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    /// Sets how many top-ranked outside items each trial considers.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Sets the idle-level limit for early stopping.
    pub fn with_patience_temps(mut self, n: usize) -> Self {
        self.patience_temps = n;
        self
    }

    /// Sets the hard trial budget (0 = no limit).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(KnapsackError::InvalidConfig(msg)) };

        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return invalid("initial_temperature must be positive".into());
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return invalid("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.top_k == 0 {
            return invalid("top_k must be positive".into());
        }
        Ok(())
    }
}
