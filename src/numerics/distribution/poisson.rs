use std::ops::RangeInclusive;

use statrs::distribution::Poisson as StatrsPoisson;
use statrs::StatsError;

use super::{DiscreteFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Poisson {
    /// Rate.
    pub λ: f64,
}

impl Poisson {
    pub const RATE: ParameterSpec<f64> = ParameterSpec {
        label: "Lambda (λ)",
        range: 0.1..=10.0,
        default: 2.0,
    };

    /// Last plotted count. The support is truncated here regardless of `λ`.
    pub const SUPPORT_END: u64 = 19;
}

impl Default for Poisson {
    fn default() -> Self {
        Self {
            λ: Self::RATE.default,
        }
    }
}

impl Parameters for Poisson {
    const FAMILY: Family = Family::Poisson;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::RATE.check(Self::FAMILY, self.λ)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            λ: Self::RATE.clamp(self.λ),
        }
    }
}

impl DiscreteFamily for Poisson {
    type Model = StatrsPoisson;

    fn model(&self) -> Result<StatrsPoisson, StatsError> {
        StatrsPoisson::new(self.λ)
    }

    fn support(&self) -> RangeInclusive<u64> {
        0..=Self::SUPPORT_END
    }

    fn mean(&self) -> f64 {
        self.λ
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Poisson;
    use crate::numerics::distribution::Distribution;

    fn truncated_mass(λ: f64) -> f64 {
        Distribution::from(Poisson { λ })
            .evaluate()
            .unwrap()
            .pdf
            .iter()
            .sum()
    }

    #[test]
    fn fixed_support() {
        let curve = Distribution::from(Poisson { λ: 2.0 }).evaluate().unwrap();
        assert_eq!(curve.x, (0..=19).map(f64::from).collect_vec());
        approx::assert_abs_diff_eq!(curve.pdf[0], (-2.0_f64).exp(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(curve.pdf[3], 8.0 / 6.0 * (-2.0_f64).exp(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(curve.mean, 2.0);
    }

    #[test]
    fn truncated_mass_shrinks_with_rate() {
        let masses = [0.5, 2.0, 6.0, 10.0].map(truncated_mass);
        for &mass in &masses {
            assert!(mass <= 1.0 + 1e-12);
        }
        approx::assert_abs_diff_eq!(masses[0], 1.0, epsilon = 1e-12);
        // Mass past the truncation point grows as λ approaches it.
        assert!(masses.iter().tuple_windows().all(|(a, b)| a >= b));
        assert!(masses[3] < 0.999);
    }
}
