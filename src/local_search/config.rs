//! Local Search configuration.

use crate::error::{KnapsackError, Result};
use crate::ranking::{DEFAULT_ALPHA, DEFAULT_LAMBDA_W};

/// Seed used when [`LocalSearchConfig::seed`] is `None`.
pub const DEFAULT_SEED: u64 = 0;

/// Configuration parameters for first-improvement Local Search.
///
/// # Examples
///
/// ```
/// use u_knapsack::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_no_improve(5)
///     .with_top_out(25)
///     .with_seed(7);
/// assert_eq!(config.max_no_improve, 5);
/// assert_eq!(config.top_out, 25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Exponent of the penalized ratio used to rank candidates.
    pub alpha: f64,

    /// Additive weight offset of the penalized ratio.
    pub lambda_w: f64,

    /// Consecutive rounds without any applied move before stopping.
    pub max_no_improve: usize,

    /// Cap on the ranked outside-candidate list scanned per step.
    pub top_out: usize,

    /// Random seed (None for [`DEFAULT_SEED`]).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            lambda_w: DEFAULT_LAMBDA_W,
            max_no_improve: 3,
            top_out: 40,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the penalized-ratio exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the penalized-ratio weight offset.
    pub fn with_lambda_w(mut self, lambda_w: f64) -> Self {
        self.lambda_w = lambda_w;
        self
    }

    /// Sets the number of stalled rounds that ends the search.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the outside-candidate cap.
    pub fn with_top_out(mut self, n: usize) -> Self {
        self.top_out = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_ratio(self.alpha, self.lambda_w)?;
        if self.top_out == 0 {
            return Err(KnapsackError::InvalidConfig("top_out must be positive".into()));
        }
        Ok(())
    }
}

/// Shared check for the penalized-ratio parameters.
pub(crate) fn validate_ratio(alpha: f64, lambda_w: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(KnapsackError::InvalidConfig(format!(
            "alpha must be finite and non-negative, got {alpha}"
        )));
    }
    if !lambda_w.is_finite() || lambda_w < 0.0 {
        return Err(KnapsackError::InvalidConfig(format!(
            "lambda_w must be finite and non-negative, got {lambda_w}"
        )));
    }
    Ok(())
}
