use std::ops::RangeInclusive;

use statrs::distribution::Laplace;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
/// The Laplace (double exponential) distribution.
pub struct Laplacian {
    pub μ: f64,
    /// Scale.
    pub b: f64,
}

impl Laplacian {
    pub const MEAN: ParameterSpec<f64> = ParameterSpec {
        label: "Mean (μ)",
        range: -10.0..=10.0,
        default: 0.0,
    };
    pub const SCALE: ParameterSpec<f64> = ParameterSpec {
        label: "Scale (b)",
        range: 0.1..=5.0,
        default: 1.0,
    };

    /// Half-width of the plotted domain, in units of scale.
    const EXTENT: f64 = 10.0;
}

impl Default for Laplacian {
    fn default() -> Self {
        Self {
            μ: Self::MEAN.default,
            b: Self::SCALE.default,
        }
    }
}

impl Parameters for Laplacian {
    const FAMILY: Family = Family::Laplacian;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::MEAN.check(Self::FAMILY, self.μ)?;
        Self::SCALE.check(Self::FAMILY, self.b)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            μ: Self::MEAN.clamp(self.μ),
            b: Self::SCALE.clamp(self.b),
        }
    }
}

impl ContinuousFamily for Laplacian {
    type Model = Laplace;

    fn model(&self) -> Result<Laplace, StatsError> {
        Laplace::new(self.μ, self.b)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        (self.μ - Self::EXTENT * self.b)..=(self.μ + Self::EXTENT * self.b)
    }

    fn mean(&self) -> f64 {
        self.μ
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::Laplacian;
    use crate::numerics::distribution::{Distribution, SAMPLES};

    #[test]
    fn closed_form() {
        let (μ, b) = (1.0, 2.0);
        let curve = Distribution::from(Laplacian { μ, b }).evaluate().unwrap();
        approx::assert_abs_diff_eq!(curve.x[0], -19.0);
        approx::assert_abs_diff_eq!(curve.x[SAMPLES - 1], 21.0);
        for (x, pdf, cdf) in curve.rows().collect_vec() {
            let z = (x - μ) / b;
            approx::assert_abs_diff_eq!(pdf, (-z.abs()).exp() / (2.0 * b), epsilon = 1e-12);
            let expected = if x < μ {
                0.5 * z.exp()
            } else {
                1.0 - 0.5 * (-z).exp()
            };
            approx::assert_abs_diff_eq!(cdf, expected, epsilon = 1e-12);
        }
        approx::assert_abs_diff_eq!(curve.mean, μ);
    }
}
