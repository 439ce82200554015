use std::ops::RangeInclusive;

use statrs::distribution::Gamma as StatrsGamma;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
/// The gamma distribution in shape/scale form.
pub struct Gamma {
    /// Shape.
    pub k: f64,
    /// Scale.
    pub θ: f64,
}

impl Gamma {
    pub const SHAPE: ParameterSpec<f64> = ParameterSpec {
        label: "Shape (k)",
        range: 0.1..=10.0,
        default: 2.0,
    };
    pub const SCALE: ParameterSpec<f64> = ParameterSpec {
        label: "Scale (θ)",
        range: 0.1..=5.0,
        default: 1.0,
    };
}

impl Default for Gamma {
    fn default() -> Self {
        Self {
            k: Self::SHAPE.default,
            θ: Self::SCALE.default,
        }
    }
}

impl Parameters for Gamma {
    const FAMILY: Family = Family::Gamma;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::SHAPE.check(Self::FAMILY, self.k)?;
        Self::SCALE.check(Self::FAMILY, self.θ)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            k: Self::SHAPE.clamp(self.k),
            θ: Self::SCALE.clamp(self.θ),
        }
    }
}

impl ContinuousFamily for Gamma {
    type Model = StatrsGamma;

    fn model(&self) -> Result<StatrsGamma, StatsError> {
        // statrs parameterizes by rate.
        StatrsGamma::new(self.k, self.θ.recip())
    }

    fn domain(&self) -> RangeInclusive<f64> {
        0.0..=20.0
    }

    fn mean(&self) -> f64 {
        self.k * self.θ
    }
}
