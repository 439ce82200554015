use std::ops::RangeInclusive;

use statrs::distribution::Normal as StatrsNormal;
use statrs::StatsError;

use super::{ContinuousFamily, EvaluationError, Family, ParameterSpec, Parameters};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Normal {
    pub μ: f64,
    pub σ: f64,
}

impl Normal {
    pub const MEAN: ParameterSpec<f64> = ParameterSpec {
        label: "Mean (μ)",
        range: -10.0..=10.0,
        default: 0.0,
    };
    pub const STD_DEV: ParameterSpec<f64> = ParameterSpec {
        label: "Standard Deviation (σ)",
        range: 0.1..=5.0,
        default: 1.0,
    };

    /// Half-width of the plotted domain, in standard deviations.
    const EXTENT: f64 = 4.0;
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            μ: Self::MEAN.default,
            σ: Self::STD_DEV.default,
        }
    }
}

impl Parameters for Normal {
    const FAMILY: Family = Family::Normal;

    fn validate(&self) -> Result<(), EvaluationError> {
        Self::MEAN.check(Self::FAMILY, self.μ)?;
        Self::STD_DEV.check(Self::FAMILY, self.σ)?;
        Ok(())
    }

    fn clamped(self) -> Self {
        Self {
            μ: Self::MEAN.clamp(self.μ),
            σ: Self::STD_DEV.clamp(self.σ),
        }
    }
}

impl ContinuousFamily for Normal {
    type Model = StatrsNormal;

    fn model(&self) -> Result<StatrsNormal, StatsError> {
        StatrsNormal::new(self.μ, self.σ)
    }

    fn domain(&self) -> RangeInclusive<f64> {
        (self.μ - Self::EXTENT * self.σ)..=(self.μ + Self::EXTENT * self.σ)
    }

    fn mean(&self) -> f64 {
        self.μ
    }
}
