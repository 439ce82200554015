use std::ops::RangeInclusive;

use statrs::distribution::Uniform as StatrsUniform;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
/// The continuous uniform distribution on `[a, b]`.
pub struct Uniform {
    pub a: f64,
    pub b: f64,
}

impl Uniform {
    pub const LOWER: ParameterSpec<f64> = ParameterSpec {
        label: "Lower Bound (a)",
        range: -10.0..=0.0,
        default: -5.0,
    };
    pub const UPPER: ParameterSpec<f64> = ParameterSpec {
        label: "Upper Bound (b)",
        range: 0.0..=10.0,
        default: 5.0,
    };

    /// Narrowest interval clamping will produce. Both bounds may sit at 0 on their sliders.
    pub const MIN_WIDTH: f64 = 0.1;
}

impl Default for Uniform {
    fn default() -> Self {
        Self {
            a: Self::LOWER.default,
            b: Self::UPPER.default,
        }
    }
}

impl Parameters for Uniform {
    const FAMILY: Family = Family::Uniform;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::LOWER.check(Self::FAMILY, self.a)?;
        Self::UPPER.check(Self::FAMILY, self.b)?;
        if self.a < self.b {
            Ok(())
        } else {
            Err(EvaluationError::EmptyInterval {
                lower: self.a,
                upper: self.b,
            })
        }
    }

    fn clamped(self) -> Self {
        let a = Self::LOWER.clamp(self.a);
        let b = Self::UPPER.clamp(self.b);
        // `a <= 0 <= b`, so widening upwards stays inside the upper range.
        Self {
            a,
            b: if b - a < Self::MIN_WIDTH {
                a + Self::MIN_WIDTH
            } else {
                b
            },
        }
    }
}

impl ContinuousFamily for Uniform {
    type Model = StatrsUniform;

    fn model(&self) -> Result<StatrsUniform, StatsError> {
        StatrsUniform::new(self.a, self.b)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        self.a..=self.b
    }

    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::Uniform;
    use crate::numerics::distribution::{
        Distribution, EvaluationError, Parameters, SAMPLES,
    };

    #[test]
    fn symmetric_interval() {
        let curve = Distribution::from(Uniform { a: -5.0, b: 5.0 })
            .evaluate()
            .unwrap();
        assert_eq!(curve.x[0], -5.0);
        assert_eq!(curve.x[SAMPLES - 1], 5.0);
        for &pdf in &curve.pdf {
            approx::assert_abs_diff_eq!(pdf, 0.1, epsilon = 1e-12);
        }
        approx::assert_abs_diff_eq!(curve.cdf[0], 0.0);
        approx::assert_abs_diff_eq!(curve.cdf[SAMPLES - 1], 1.0);
        approx::assert_abs_diff_eq!(curve.mean, 0.0);
    }

    #[test]
    fn empty_interval_is_rejected() {
        let degenerate = Uniform { a: 0.0, b: 0.0 };
        assert!(matches!(
            degenerate.validate(),
            Err(EvaluationError::EmptyInterval { .. })
        ));
    }

    #[test]
    fn clamping_widens_empty_interval() {
        let clamped = Uniform { a: 0.0, b: 0.0 }.clamped();
        approx::assert_abs_diff_eq!(clamped.b - clamped.a, Uniform::MIN_WIDTH);
        clamped.validate().unwrap();

        let curve = Distribution::from(clamped).evaluate().unwrap();
        assert!(curve.pdf.iter().all(|p| p.is_finite()));
        approx::assert_abs_diff_eq!(curve.pdf[0], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn clamping_keeps_wide_intervals() {
        let wide = Uniform { a: -12.0, b: 3.0 }.clamped();
        assert_eq!(wide, Uniform { a: -10.0, b: 3.0 });
    }
}
