use eframe::egui::plot::{Line, LineStyle, MarkerShape, Points, VLine};
use eframe::epaint::Color32;

use super::PlotType;
use crate::numerics::distribution::{CurveResult, Family};

pub(super) fn family_color(family: Family) -> Color32 {
    match family {
        Family::Normal => Color32::BLUE,
        Family::Binomial => Color32::GREEN,
        Family::Bernoulli => Color32::YELLOW,
        Family::Poisson => Color32::RED,
        Family::Uniform => Color32::from_rgb(255, 0, 255),
        Family::Exponential => Color32::from_rgb(128, 0, 128),
        Family::Beta => Color32::from_rgb(255, 165, 0),
        Family::Gamma => Color32::BROWN,
        Family::LogNormal => Color32::from_rgb(255, 192, 203),
        Family::Laplacian => Color32::from_rgb(0, 255, 255),
    }
}

/// Plot title and legend entry, _e.g._ "Log-Normal CDF".
pub(super) fn curve_label(family: Family, plot_type: PlotType) -> String {
    format!("{family} {plot_type}")
}

pub(super) fn mean_label(mean: f64) -> String {
    format!("Mean: {mean:.2}")
}

/// Pair each grid point with the series selected by `plot_type`.
pub(super) fn series_points(curve: &CurveResult, plot_type: PlotType) -> Vec<[f64; 2]> {
    curve
        .x
        .iter()
        .zip(plot_type.series(curve))
        .map(|(&x, &y)| [x, y])
        .collect()
}

pub(super) fn curve_line(
    curve: &CurveResult,
    family: Family,
    plot_type: PlotType,
    color: Color32,
) -> Line {
    let line = Line::new(series_points(curve, plot_type))
        .color(color)
        .width(2.)
        .name(curve_label(family, plot_type));
    match plot_type {
        PlotType::Pdf => line.fill(0.),
        PlotType::Cdf => line,
    }
}

/// Dots on the support points of a discrete curve.
pub(super) fn support_markers(curve: &CurveResult, plot_type: PlotType, color: Color32) -> Points {
    Points::new(series_points(curve, plot_type))
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(3.)
        .color(color)
}

pub(super) fn mean_marker(mean: f64) -> VLine {
    VLine::new(mean)
        .color(Color32::RED)
        .style(LineStyle::dashed_loose())
        .name(mean_label(mean))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::PlotType;
    use crate::numerics::distribution::{
        Binomial, ContinuousFamily, Distribution, Family, LogNormal,
    };

    #[test]
    fn labels() {
        assert_eq!(
            super::curve_label(Family::LogNormal, PlotType::Cdf),
            "Log-Normal CDF"
        );
        assert_eq!(super::mean_label(LogNormal::default().mean()), "Mean: 3.08");
        assert_eq!(super::mean_label(0.5), "Mean: 0.50");
    }

    #[test]
    fn family_colors_are_distinct() {
        let colors = Family::ALL
            .into_iter()
            .map(super::family_color)
            .collect::<HashSet<_>>();
        assert_eq!(colors.len(), Family::COUNT);
    }

    #[test]
    fn series_points() {
        let curve = Distribution::from(Binomial { n: 4, p: 0.5 })
            .evaluate()
            .unwrap();
        let pdf = super::series_points(&curve, PlotType::Pdf);
        assert_eq!(pdf.len(), 5);
        assert_eq!(pdf[2], [2.0, curve.pdf[2]]);
        let cdf = super::series_points(&curve, PlotType::Cdf);
        assert_eq!(cdf[4], [4.0, curve.cdf[4]]);
    }
}
