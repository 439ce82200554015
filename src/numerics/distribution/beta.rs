use std::ops::RangeInclusive;

use statrs::distribution::Beta as StatrsBeta;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Beta {
    pub α: f64,
    pub β: f64,
}

impl Beta {
    pub const ALPHA: ParameterSpec<f64> = ParameterSpec {
        label: "Alpha (α)",
        range: 0.1..=5.0,
        default: 2.0,
    };
    pub const BETA: ParameterSpec<f64> = ParameterSpec {
        label: "Beta (β)",
        range: 0.1..=5.0,
        default: 2.0,
    };
}

impl Default for Beta {
    fn default() -> Self {
        Self {
            α: Self::ALPHA.default,
            β: Self::BETA.default,
        }
    }
}

impl Parameters for Beta {
    const FAMILY: Family = Family::Beta;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::ALPHA.check(Self::FAMILY, self.α)?;
        Self::BETA.check(Self::FAMILY, self.β)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            α: Self::ALPHA.clamp(self.α),
            β: Self::BETA.clamp(self.β),
        }
    }
}

impl ContinuousFamily for Beta {
    type Model = StatrsBeta;

    fn model(&self) -> Result<StatrsBeta, StatsError> {
        StatrsBeta::new(self.α, self.β)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        0.0..=1.0
    }

    fn mean(&self) -> f64 {
        self.α / (self.α + self.β)
    }
}

#[cfg(test)]
mod tests {
    use super::Beta;
    use crate::numerics::distribution::{Distribution, SAMPLES};

    #[test]
    fn symmetric_shape() {
        let curve = Distribution::from(Beta { α: 2.0, β: 2.0 }).evaluate().unwrap();
        // 6x(1 - x) vanishes at both ends.
        approx::assert_abs_diff_eq!(curve.pdf[0], 0.0);
        approx::assert_abs_diff_eq!(curve.pdf[SAMPLES - 1], 0.0, epsilon = 1e-12);
        for (x, pdf, _) in curve.rows() {
            approx::assert_abs_diff_eq!(pdf, 6.0 * x * (1.0 - x), epsilon = 1e-9);
        }
        approx::assert_abs_diff_eq!(curve.cdf[SAMPLES - 1], 1.0);
        approx::assert_abs_diff_eq!(curve.mean, 0.5);
    }

    #[test]
    fn divergent_endpoints_stay_finite() {
        let curve = Distribution::from(Beta { α: 0.1, β: 0.1 }).evaluate().unwrap();
        assert!(curve.pdf.iter().all(|p| p.is_finite()));
        assert_eq!(curve.pdf[0], curve.pdf[1]);
        assert_eq!(curve.pdf[SAMPLES - 1], curve.pdf[SAMPLES - 2]);
        approx::assert_abs_diff_eq!(curve.mean, 0.5);
    }
}
