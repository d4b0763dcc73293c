//! Ranking rules and the ratio heuristics behind them.

/// Default exponent penalizing heavy items in [`penalized_ratio`].
pub const DEFAULT_ALPHA: f64 = 0.9;

/// Default additive weight offset in [`penalized_ratio`].
pub const DEFAULT_LAMBDA_W: f64 = 0.5;

/// Weight-penalized benefit ratio:
/// `score / (max(weight, 1) + lambda_w) ^ alpha`.
///
/// `alpha` penalizes heavy items super-linearly; `lambda_w` keeps very light
/// items from always dominating.
///
/// # Examples
///
/// ```
/// use u_knapsack::ranking::penalized_ratio;
///
/// let r = penalized_ratio(6.0, 3, 1.0, 0.0);
/// assert!((r - 2.0).abs() < 1e-12);
/// ```
pub fn penalized_ratio(score: f64, weight: u64, alpha: f64, lambda_w: f64) -> f64 {
    score / (weight.max(1) as f64 + lambda_w).powf(alpha)
}

/// Plain benefit ratio `score / max(weight, 1)`.
pub fn plain_ratio(score: f64, weight: u64) -> f64 {
    score / weight.max(1) as f64
}

/// A rule assigning a ranking key to an item.
///
/// Keys follow the engine convention: **lower is higher priority**. Rules
/// that rank "larger is better" quantities negate them.
pub trait RankingRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the ranking key of an item from its score and weight.
    fn key(&self, score: f64, weight: u64) -> f64;
}

/// Penalized ratio, highest first.
#[derive(Debug, Clone, Copy)]
pub struct PenalizedRatio {
    /// Exponent on the offset weight.
    pub alpha: f64,
    /// Additive weight offset.
    pub lambda_w: f64,
}

impl PenalizedRatio {
    pub fn new(alpha: f64, lambda_w: f64) -> Self {
        Self { alpha, lambda_w }
    }
}

impl Default for PenalizedRatio {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_LAMBDA_W)
    }
}

impl RankingRule for PenalizedRatio {
    fn name(&self) -> &str {
        "PenalizedRatio"
    }

    fn key(&self, score: f64, weight: u64) -> f64 {
        -penalized_ratio(score, weight, self.alpha, self.lambda_w)
    }
}

/// Plain ratio, highest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRatio;

impl RankingRule for PlainRatio {
    fn name(&self) -> &str {
        "PlainRatio"
    }

    fn key(&self, score: f64, weight: u64) -> f64 {
        -plain_ratio(score, weight)
    }
}

/// Score, highest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HigherScore;

impl RankingRule for HigherScore {
    fn name(&self) -> &str {
        "HigherScore"
    }

    fn key(&self, score: f64, _weight: u64) -> f64 {
        -score
    }
}

/// Weight, lightest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LighterWeight;

impl RankingRule for LighterWeight {
    fn name(&self) -> &str {
        "LighterWeight"
    }

    fn key(&self, _score: f64, weight: u64) -> f64 {
        weight as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ratio_floors_weight() {
        assert!((plain_ratio(5.0, 2) - 2.5).abs() < 1e-12);
        assert!((plain_ratio(3.0, 0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_penalized_ratio_defaults() {
        // 5 / 2.5^0.9
        let expected = 5.0 / 2.5f64.powf(0.9);
        let got = penalized_ratio(5.0, 2, DEFAULT_ALPHA, DEFAULT_LAMBDA_W);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_penalty_prefers_light_items_less_than_plain() {
        // Same plain ratio; the penalty with lambda_w favors the heavier item.
        let light = penalized_ratio(1.0, 1, 1.0, 0.5);
        let heavy = penalized_ratio(10.0, 10, 1.0, 0.5);
        assert!(heavy > light);
    }

    #[test]
    fn test_rule_keys_are_lower_is_better() {
        assert!(PlainRatio.key(6.0, 2) < PlainRatio.key(5.0, 2));
        assert!(HigherScore.key(6.0, 9) < HigherScore.key(5.0, 1));
        assert!(LighterWeight.key(0.0, 1) < LighterWeight.key(0.0, 2));
        let rule = PenalizedRatio::default();
        assert!(rule.key(6.0, 2) < rule.key(5.0, 2));
        assert_eq!(rule.name(), "PenalizedRatio");
    }
}
