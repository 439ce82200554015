use eframe::egui::{Grid, Slider, Ui};
use eframe::emath::Numeric;

use crate::numerics::distribution::{
    Bernoulli, Beta, Binomial, Distribution, Exponential, Gamma, Laplacian, LogNormal, Normal,
    ParameterSpec, Poisson, Uniform,
};

fn slider_row<T: Numeric>(ui: &mut Ui, spec: &ParameterSpec<T>, value: &mut T) {
    ui.label(spec.label);
    let mut slider = Slider::new(value, spec.range.clone()).smart_aim(false);
    if !T::INTEGRAL {
        slider = slider.fixed_decimals(2);
    }
    ui.add(slider);
    ui.end_row();
}

/// One slider per parameter of `distribution`. The result is clamped back into a valid parameter
/// set, so dragging can never hand the evaluator an empty interval.
pub(super) fn parameter_grid(ui: &mut Ui, distribution: &mut Distribution) {
    Grid::new("controls_parameters")
        .num_columns(2)
        .show(ui, |ui| match distribution {
            Distribution::Normal(params) => {
                slider_row(ui, &Normal::MEAN, &mut params.μ);
                slider_row(ui, &Normal::STD_DEV, &mut params.σ);
            }
            Distribution::Binomial(params) => {
                slider_row(ui, &Binomial::TRIALS, &mut params.n);
                slider_row(ui, &Binomial::PROBABILITY, &mut params.p);
            }
            Distribution::Bernoulli(params) => {
                slider_row(ui, &Bernoulli::PROBABILITY, &mut params.p);
            }
            Distribution::Poisson(params) => {
                slider_row(ui, &Poisson::RATE, &mut params.λ);
            }
            Distribution::Uniform(params) => {
                slider_row(ui, &Uniform::LOWER, &mut params.a);
                slider_row(ui, &Uniform::UPPER, &mut params.b);
            }
            Distribution::Exponential(params) => {
                slider_row(ui, &Exponential::RATE, &mut params.λ);
            }
            Distribution::Beta(params) => {
                slider_row(ui, &Beta::ALPHA, &mut params.α);
                slider_row(ui, &Beta::BETA, &mut params.β);
            }
            Distribution::Gamma(params) => {
                slider_row(ui, &Gamma::SHAPE, &mut params.k);
                slider_row(ui, &Gamma::SCALE, &mut params.θ);
            }
            Distribution::LogNormal(params) => {
                slider_row(ui, &LogNormal::LOG_MEAN, &mut params.μ);
                slider_row(ui, &LogNormal::LOG_STD_DEV, &mut params.σ);
            }
            Distribution::Laplacian(params) => {
                slider_row(ui, &Laplacian::MEAN, &mut params.μ);
                slider_row(ui, &Laplacian::SCALE, &mut params.b);
            }
        });
    *distribution = distribution.clamped();

    if ui
        .button("Reset")
        .on_hover_text("Restore the default parameters of this distribution")
        .clicked()
    {
        *distribution = distribution.family().default_distribution();
    }
}
