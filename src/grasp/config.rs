//! GRASP configuration.

use crate::error::{KnapsackError, Result};
use crate::local_search::{validate_ratio, LocalSearchConfig};
use crate::ranking::{DEFAULT_ALPHA, DEFAULT_LAMBDA_W};

/// Seed used when [`GraspConfig::seed`] is `None`.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration parameters for GRASP.
///
/// # Examples
///
/// ```
/// use u_knapsack::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_iterations(100)
///     .with_rcl_size(25)
///     .with_seed(3);
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.rcl_size, 25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct-and-refine rounds.
    pub iterations: usize,

    /// Size of the restricted candidate list.
    pub rcl_size: usize,

    /// Exponent of the penalized ratio (construction and refinement).
    pub alpha: f64,

    /// Additive weight offset of the penalized ratio.
    pub lambda_w: f64,

    /// Stalled rounds allowed in each Local Search refinement.
    pub ls_improve: usize,

    /// Outside-candidate cap of each Local Search refinement.
    pub top_out: usize,

    /// Run rounds on independent per-round generators.
    ///
    /// Per-round seeds are drawn from the master generator first, so the
    /// result does not depend on scheduling. Rounds execute on the rayon
    /// pool when the `parallel` feature is enabled and serially otherwise.
    pub parallel: bool,

    /// Random seed (None for [`DEFAULT_SEED`]).
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            rcl_size: 20,
            alpha: DEFAULT_ALPHA,
            lambda_w: DEFAULT_LAMBDA_W,
            ls_improve: 2,
            top_out: 40,
            parallel: false,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the number of rounds.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the restricted candidate list size.
    pub fn with_rcl_size(mut self, n: usize) -> Self {
        self.rcl_size = n;
        self
    }

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

    /// Sets the refinement's stall limit.
    pub fn with_ls_improve(mut self, n: usize) -> Self {
        self.ls_improve = n;
        self
    }

    /// Sets the refinement's outside-candidate cap.
    pub fn with_top_out(mut self, n: usize) -> Self {
        self.top_out = n;
        self
    }

    /// Enables per-round generators.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
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
        if self.rcl_size == 0 {
            return Err(KnapsackError::InvalidConfig("rcl_size must be positive".into()));
        }
        self.local_search().validate()
    }

    /// Local Search parameters used for the refinement phase.
    pub fn local_search(&self) -> LocalSearchConfig {
        LocalSearchConfig::default()
            .with_alpha(self.alpha)
            .with_lambda_w(self.lambda_w)
            .with_max_no_improve(self.ls_improve)
            .with_top_out(self.top_out)
    }
}
