use std::ops::RangeInclusive;

use statrs::distribution::Binomial as StatrsBinomial;
use statrs::StatsError;

use super::{DiscreteFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Binomial {
    /// Number of trials.
    pub n: u32,
    /// Probability of success of each trial.
    pub p: f64,
}

impl Binomial {
    pub const TRIALS: ParameterSpec<u32> = ParameterSpec {
        label: "Number of Trials (n)",
        range: 1..=100,
        default: 10,
    };
    pub const PROBABILITY: ParameterSpec<f64> = ParameterSpec {
        label: "Probability of Success (p)",
        range: 0.0..=1.0,
        default: 0.5,
    };
}

impl Default for Binomial {
    fn default() -> Self {
        Self {
            n: Self::TRIALS.default,
            p: Self::PROBABILITY.default,
        }
    }
}

impl Parameters for Binomial {
    const FAMILY: Family = Family::Binomial;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::TRIALS.check(Self::FAMILY, self.n)?;
        Self::PROBABILITY.check(Self::FAMILY, self.p)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            n: Self::TRIALS.clamp(self.n),
            p: Self::PROBABILITY.clamp(self.p),
        }
    }
}

impl DiscreteFamily for Binomial {
    type Model = StatrsBinomial;

    fn model(&self) -> Result<StatrsBinomial, StatsError> {
        // The mass is evaluated in log space, so large `n` with extreme `p` doesn't overflow.
        StatrsBinomial::new(self.p, u64::from(self.n))
    }

    fn support(&self) -> RangeInclusive<u64> {
        0..=u64::from(self.n)
    }

    fn mean(&self) -> f64 {
        f64::from(self.n) * self.p
    }
}

#[cfg(test)]
mod tests {
    use super::Binomial;
    use crate::numerics::distribution::Distribution;

    #[test]
    fn ten_fair_trials() {
        let curve = Distribution::from(Binomial { n: 10, p: 0.5 })
            .evaluate()
            .unwrap();
        assert_eq!(curve.len(), 11);
        approx::assert_abs_diff_eq!(curve.pdf[5], 0.2461, epsilon = 1e-4);
        approx::assert_abs_diff_eq!(curve.pdf[5], 252.0 / 1024.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(curve.mean, 5.0);
        approx::assert_abs_diff_eq!(curve.cdf[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn mass_sums_to_one() {
        for (n, p) in [(1, 0.3), (17, 0.5), (100, 0.01), (100, 0.999)] {
            let curve = Distribution::from(Binomial { n, p }).evaluate().unwrap();
            approx::assert_abs_diff_eq!(curve.pdf.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn extreme_probabilities_stay_finite() {
        for p in [0.0, 1e-9, 1.0 - 1e-9, 1.0] {
            let curve = Distribution::from(Binomial { n: 100, p }).evaluate().unwrap();
            assert!(curve.pdf.iter().all(|m| m.is_finite() && (0.0..=1.0).contains(m)));
            approx::assert_abs_diff_eq!(curve.mean, 100.0 * p);
        }

        let certain = Distribution::from(Binomial { n: 100, p: 1.0 })
            .evaluate()
            .unwrap();
        approx::assert_abs_diff_eq!(certain.pdf[100], 1.0);
        approx::assert_abs_diff_eq!(certain.cdf[99], 0.0);
    }
}
