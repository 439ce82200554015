use std::ops::RangeInclusive;

use statrs::distribution::Exp;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Exponential {
    /// Rate.
    pub λ: f64,
}

impl Exponential {
    pub const RATE: ParameterSpec<f64> = ParameterSpec {
        label: "Lambda (λ)",
        range: 0.1..=5.0,
        default: 1.0,
    };
}

impl Default for Exponential {
    fn default() -> Self {
        Self {
            λ: Self::RATE.default,
        }
    }
}

impl Parameters for Exponential {
    const FAMILY: Family = Family::Exponential;

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

impl ContinuousFamily for Exponential {
    type Model = Exp;

    fn model(&self) -> Result<Exp, StatsError> {
        Exp::new(self.λ)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        0.0..=10.0
    }

    fn mean(&self) -> f64 {
        self.λ.recip()
    }
}
