use std::ops::RangeInclusive;

use statrs::distribution::Bernoulli as StatrsBernoulli;
use statrs::StatsError;

use super::{DiscreteFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bernoulli {
    /// Probability of success.
    pub p: f64,
}

impl Bernoulli {
    pub const PROBABILITY: ParameterSpec<f64> = ParameterSpec {
        label: "Probability of Success (p)",
        range: 0.0..=1.0,
        default: 0.5,
    };
}

impl Default for Bernoulli {
    fn default() -> Self {
        Self {
            p: Self::PROBABILITY.default,
        }
    }
}

impl Parameters for Bernoulli {
    const FAMILY: Family = Family::Bernoulli;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::PROBABILITY.check(Self::FAMILY, self.p)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            p: Self::PROBABILITY.clamp(self.p),
        }
    }
}

impl DiscreteFamily for Bernoulli {
    type Model = StatrsBernoulli;

    fn model(&self) -> Result<StatrsBernoulli, StatsError> {
        StatrsBernoulli::new(self.p)
    }

    fn support(&self) -> RangeInclusive<u64> {
        0..=1
    }

    fn mean(&self) -> f64 {
        self.p
    }
}

#[cfg(test)]
mod tests {
    use super::Bernoulli;
    use crate::numerics::distribution::Distribution;

    #[test]
    fn fair_coin() {
        let curve = Distribution::from(Bernoulli { p: 0.5 }).evaluate().unwrap();
        assert_eq!(curve.x, [0.0, 1.0]);
        approx::assert_abs_diff_eq!(curve.pdf[..], [0.5, 0.5][..], epsilon = 1e-12);
        approx::assert_abs_diff_eq!(curve.cdf[..], [0.5, 1.0][..], epsilon = 1e-12);
        approx::assert_abs_diff_eq!(curve.mean, 0.5);
    }

    #[test]
    fn mass_sums_to_one() {
        for p in [0.0, 0.2, 0.75, 1.0] {
            let curve = Distribution::from(Bernoulli { p }).evaluate().unwrap();
            approx::assert_abs_diff_eq!(curve.pdf.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(curve.pdf[1], p, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(curve.cdf[1], 1.0, epsilon = 1e-12);
        }
    }
}
