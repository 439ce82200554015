pub mod bernoulli;
pub mod beta;
pub mod binomial;
pub mod exponential;
pub mod gamma;
pub mod laplacian;
pub mod log_normal;
pub mod normal;
pub mod poisson;
pub mod uniform;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::Itertools;
use statrs::distribution::{Continuous, ContinuousCDF, Discrete};
use statrs::StatsError;
use thiserror::Error;

pub use self::bernoulli::Bernoulli;
pub use self::beta::Beta;
pub use self::binomial::Binomial;
pub use self::exponential::Exponential;
pub use self::gamma::Gamma;
pub use self::laplacian::Laplacian;
pub use self::log_normal::LogNormal;
pub use self::normal::Normal;
pub use self::poisson::Poisson;
pub use self::uniform::Uniform;
use crate::numerics;

/// Number of grid points a continuous curve is sampled on.
pub const SAMPLES: usize = 1000;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("{parameter} = {value} is outside [{min}, {max}] for the {family} distribution")]
    OutOfRange {
        family: Family,
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("lower bound {lower} must be below upper bound {upper}")]
    EmptyInterval { lower: f64, upper: f64 },

    #[error("rejected by the statistics backend: {0}")]
    Model(#[from] StatsError),
}

#[derive(Debug, Error)]
#[error("unknown distribution family `{0}`")]
pub struct UnknownFamily(pub String);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// The supported distribution families, in display order.
pub enum Family {
    Normal,
    Binomial,
    Bernoulli,
    Poisson,
    Uniform,
    Exponential,
    Beta,
    Gamma,
    LogNormal,
    Laplacian,
}

impl Family {
    pub const COUNT: usize = 10;
    pub const ALL: [Family; Self::COUNT] = [
        Self::Normal,
        Self::Binomial,
        Self::Bernoulli,
        Self::Poisson,
        Self::Uniform,
        Self::Exponential,
        Self::Beta,
        Self::Gamma,
        Self::LogNormal,
        Self::Laplacian,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Binomial => "Binomial",
            Self::Bernoulli => "Bernoulli",
            Self::Poisson => "Poisson",
            Self::Uniform => "Uniform",
            Self::Exponential => "Exponential",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
            Self::LogNormal => "Log-Normal",
            Self::Laplacian => "Laplacian",
        }
    }

    #[must_use]
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Binomial | Self::Bernoulli | Self::Poisson)
    }

    #[must_use]
    /// Position of this family in [`Family::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn default_distribution(self) -> Distribution {
        match self {
            Self::Normal => Normal::default().into(),
            Self::Binomial => Binomial::default().into(),
            Self::Bernoulli => Bernoulli::default().into(),
            Self::Poisson => Poisson::default().into(),
            Self::Uniform => Uniform::default().into(),
            Self::Exponential => Exponential::default().into(),
            Self::Beta => Beta::default().into(),
            Self::Gamma => Gamma::default().into(),
            Self::LogNormal => LogNormal::default().into(),
            Self::Laplacian => Laplacian::default().into(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| UnknownFamily(s.to_owned()))
    }
}

#[derive(Clone, PartialEq, Debug)]
/// A named, bounded parameter, as exposed on a slider.
pub struct ParameterSpec<T> {
    pub label: &'static str,
    pub range: RangeInclusive<T>,
    pub default: T,
}

impl<T: Copy + PartialOrd + Into<f64>> ParameterSpec<T> {
    #[must_use]
    /// Pull `value` into the declared range. Unordered values (NaN) land on the lower bound.
    pub fn clamp(&self, value: T) -> T {
        let (&lower, &upper) = (self.range.start(), self.range.end());
        if value > upper {
            upper
        } else if value >= lower {
            value
        } else {
            lower
        }
    }

    pub fn check(&self, family: Family, value: T) -> Result<T, EvaluationError> {
        if self.range.contains(&value) {
            Ok(value)
        } else {
            Err(EvaluationError::OutOfRange {
                family,
                parameter: self.label,
                value: value.into(),
                min: (*self.range.start()).into(),
                max: (*self.range.end()).into(),
            })
        }
    }
}

/// The typed parameter set of one family.
pub trait Parameters: Copy + Default {
    const FAMILY: Family;

    /// Reject values outside the declared ranges.
    fn validate(&self) -> Result<(), EvaluationError>;

    #[must_use]
    /// The nearest parameter set that passes [`Parameters::validate`].
    fn clamped(self) -> Self;
}

/// A family sampled on an evenly spaced grid over a real interval.
pub trait ContinuousFamily: Parameters {
    type Model: Continuous<f64, f64> + ContinuousCDF<f64, f64>;

    fn model(&self) -> Result<Self::Model, StatsError>;
    fn domain(&self) -> RangeInclusive<f64>;
    fn mean(&self) -> f64;
}

/// A family sampled at each integer of its (possibly truncated) support.
pub trait DiscreteFamily: Parameters {
    type Model: Discrete<u64, f64>;

    fn model(&self) -> Result<Self::Model, StatsError>;
    fn support(&self) -> RangeInclusive<u64>;
    fn mean(&self) -> f64;
}

#[derive(Clone, PartialEq, Debug)]
/// A sampled curve: parallel `x`, `pdf` and `cdf` arrays plus the closed-form mean.
///
/// For discrete families `pdf` holds the probability mass at each support point.
pub struct CurveResult {
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
    pub mean: f64,
    pub discrete: bool,
}

impl CurveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Iterate over `(x, pdf, cdf)` triples.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        itertools::izip!(&self.x, &self.pdf, &self.cdf).map(|(&x, &pdf, &cdf)| (x, pdf, cdf))
    }
}

fn evaluate_continuous<F: ContinuousFamily>(family: &F) -> Result<CurveResult, EvaluationError> {
    let model = family.model()?;
    let x = numerics::linspace(family.domain(), SAMPLES).collect_vec();
    let mut pdf = x.iter().map(|&x| model.pdf(x)).collect_vec();
    let mut cdf = x.iter().map(|&x| model.cdf(x)).collect_vec();
    numerics::patch_non_finite(&mut pdf);
    // Incomplete beta/gamma evaluations can jitter by an ulp.
    numerics::monotone_probability(&mut cdf);
    Ok(CurveResult {
        x,
        pdf,
        cdf,
        mean: family.mean(),
        discrete: false,
    })
}

fn evaluate_discrete<F: DiscreteFamily>(family: &F) -> Result<CurveResult, EvaluationError> {
    let model = family.model()?;
    #[allow(clippy::cast_precision_loss)]
    let (x, mut pdf): (Vec<f64>, Vec<f64>) = family
        .support()
        .map(|k| (k as f64, model.pmf(k)))
        .unzip();
    numerics::patch_non_finite(&mut pdf);
    let mut cdf = pdf
        .iter()
        .scan(0.0, |total, &p| {
            *total += p;
            Some(*total)
        })
        .collect_vec();
    numerics::monotone_probability(&mut cdf);
    Ok(CurveResult {
        x,
        pdf,
        cdf,
        mean: family.mean(),
        discrete: true,
    })
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// One family together with its parameter values.
pub enum Distribution {
    Normal(Normal),
    Binomial(Binomial),
    Bernoulli(Bernoulli),
    Poisson(Poisson),
    Uniform(Uniform),
    Exponential(Exponential),
    Beta(Beta),
    Gamma(Gamma),
    LogNormal(LogNormal),
    Laplacian(Laplacian),
}

macro_rules! for_each_variant {
    ($self:expr, $params:ident => $body:expr) => {
        match $self {
            Distribution::Normal($params) => $body,
            Distribution::Binomial($params) => $body,
            Distribution::Bernoulli($params) => $body,
            Distribution::Poisson($params) => $body,
            Distribution::Uniform($params) => $body,
            Distribution::Exponential($params) => $body,
            Distribution::Beta($params) => $body,
            Distribution::Gamma($params) => $body,
            Distribution::LogNormal($params) => $body,
            Distribution::Laplacian($params) => $body,
        }
    };
}

macro_rules! impl_from_params {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Distribution {
                fn from(params: $variant) -> Self {
                    Self::$variant(params)
                }
            }
        )+
    };
}

impl_from_params!(
    Normal,
    Binomial,
    Bernoulli,
    Poisson,
    Uniform,
    Exponential,
    Beta,
    Gamma,
    LogNormal,
    Laplacian,
);

impl Distribution {
    #[must_use]
    pub fn family(&self) -> Family {
        fn family_of<P: Parameters>(_: &P) -> Family {
            P::FAMILY
        }
        for_each_variant!(self, params => family_of(params))
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        for_each_variant!(self, params => params.validate())
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        for_each_variant!(self, params => params.clamped().into())
    }

    /// Validate the parameters, then sample the PDF/PMF and CDF over the family's grid.
    pub fn evaluate(&self) -> Result<CurveResult, EvaluationError> {
        self.validate()?;
        match self {
            Self::Normal(params) => evaluate_continuous(params),
            Self::Uniform(params) => evaluate_continuous(params),
            Self::Exponential(params) => evaluate_continuous(params),
            Self::Beta(params) => evaluate_continuous(params),
            Self::Gamma(params) => evaluate_continuous(params),
            Self::LogNormal(params) => evaluate_continuous(params),
            Self::Laplacian(params) => evaluate_continuous(params),
            Self::Binomial(params) => evaluate_discrete(params),
            Self::Bernoulli(params) => evaluate_discrete(params),
            Self::Poisson(params) => evaluate_discrete(params),
        }
    }
}
