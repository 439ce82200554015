use std::ops::RangeInclusive;

use statrs::distribution::LogNormal as StatrsLogNormal;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
/// A distribution whose logarithm is normal with mean `μ` and standard deviation `σ`.
pub struct LogNormal {
    pub μ: f64,
    pub σ: f64,
}

impl LogNormal {
    pub const LOG_MEAN: ParameterSpec<f64> = ParameterSpec {
        label: "Mean (μ)",
        range: 0.1..=5.0,
        default: 1.0,
    };
    pub const LOG_STD_DEV: ParameterSpec<f64> = ParameterSpec {
        label: "Sigma (σ)",
        range: 0.1..=2.0,
        default: 0.5,
    };
}

impl Default for LogNormal {
    fn default() -> Self {
        Self {
            μ: Self::LOG_MEAN.default,
            σ: Self::LOG_STD_DEV.default,
        }
    }
}

impl Parameters for LogNormal {
    const FAMILY: Family = Family::LogNormal;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::LOG_MEAN.check(Self::FAMILY, self.μ)?;
        Self::LOG_STD_DEV.check(Self::FAMILY, self.σ)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            μ: Self::LOG_MEAN.clamp(self.μ),
            σ: Self::LOG_STD_DEV.clamp(self.σ),
        }
    }
}

impl ContinuousFamily for LogNormal {
    type Model = StatrsLogNormal;

    fn model(&self) -> Result<StatrsLogNormal, StatsError> {
        StatrsLogNormal::new(self.μ, self.σ)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        0.0..=10.0
    }

    fn mean(&self) -> f64 {
        (self.μ + self.σ * self.σ / 2.0).exp()
    }
}
