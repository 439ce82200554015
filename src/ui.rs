mod parameter_controls;
mod plotting_utils;
mod utils;
mod value_table;

use std::fmt;

use eframe::egui::plot::{Legend, Plot};
use eframe::egui::{CentralPanel, ComboBox, Context, Grid, SidePanel, TextStyle, Ui, Visuals};

use crate::numerics::distribution::{CurveResult, Distribution, Family};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlotType {
    Pdf,
    Cdf,
}

impl PlotType {
    pub const ALL: [PlotType; 2] = [Self::Pdf, Self::Cdf];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Cdf => "CDF",
        }
    }

    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Pdf => "Probability Density",
            Self::Cdf => "Cumulative Probability",
        }
    }

    #[must_use]
    /// The series of `curve` this plot type draws against `curve.x`.
    pub fn series(self, curve: &CurveResult) -> &[f64] {
        match self {
            Self::Pdf => &curve.pdf,
            Self::Cdf => &curve.cdf,
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// A snapshot of every widget value, taken once per frame and handed to the drawing code by value.
pub struct ExplorerSettings {
    pub distribution: Distribution,
    pub plot_type: PlotType,
    pub show_mean: bool,
    pub dark_mode: bool,
    pub show_values: bool,
}

pub struct Explorer {
    family: Family,
    /// Parameters of every family, indexed by [`Family::index`], so that switching back and forth
    /// keeps earlier adjustments.
    distributions: [Distribution; Family::COUNT],
    plot_type: PlotType,
    show_mean: bool,
    dark_mode: bool,
    show_values: bool,
    last_settings: Option<ExplorerSettings>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            family: Family::Normal,
            distributions: Family::ALL.map(Family::default_distribution),
            plot_type: PlotType::Pdf,
            show_mean: false,
            dark_mode: false,
            show_values: false,
            last_settings: None,
        }
    }
}

impl Explorer {
    const VALUE_TABLE_HEIGHT: f32 = 180.;

    #[must_use]
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing.y = 5.;
        style.spacing.slider_width = 160.;
        style.spacing.combo_width = 160.;
        cc.egui_ctx.set_style(style);
        cc.egui_ctx.set_visuals(Visuals::light());

        Self::default()
    }

    #[must_use]
    pub fn settings(&self) -> ExplorerSettings {
        ExplorerSettings {
            distribution: self.distributions[self.family.index()],
            plot_type: self.plot_type,
            show_mean: self.show_mean,
            dark_mode: self.dark_mode,
            show_values: self.show_values,
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.heading("📊 Probability Distribution Explorer");
        ui.label("Explore different probability distributions by adjusting their parameters.");

        ui.separator();

        Grid::new("controls_view")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Choose a Distribution:");
                ComboBox::from_id_source("family_selector")
                    .selected_text(self.family.name())
                    .show_ui(ui, |ui| {
                        for family in Family::ALL {
                            ui.selectable_value(&mut self.family, family, family.name());
                        }
                    });
                ui.end_row();

                ui.label("Select Plot Type:");
                ui.horizontal(|ui| {
                    for plot_type in PlotType::ALL {
                        ui.radio_value(&mut self.plot_type, plot_type, plot_type.name());
                    }
                });
                ui.end_row();

                ui.label("Show:");
                ui.checkbox(&mut self.show_mean, "Show Mean");
                ui.end_row();

                if self.family.is_discrete() {
                    ui.label("");
                    ui.checkbox(&mut self.show_values, "Show values")
                        .on_hover_text("Tabulate the mass function and its cumulative sum");
                    ui.end_row();
                }

                ui.label("Theme:");
                ui.checkbox(&mut self.dark_mode, "Dark Mode");
                ui.end_row();
            });

        ui.separator();

        ui.label(format!("{} parameters:", self.family));
        let distribution = &mut self.distributions[self.family.index()];
        parameter_controls::parameter_grid(ui, distribution);
    }

    fn curve_viewer(ui: &mut Ui, settings: ExplorerSettings) {
        let family = settings.distribution.family();
        ui.heading(plotting_utils::curve_label(family, settings.plot_type));

        let curve = match settings.distribution.evaluate() {
            Ok(curve) => curve,
            Err(err) => {
                tracing::warn!(%err, ?settings, "failed to evaluate distribution");
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                return;
            }
        };
        tracing::trace!(points = curve.len(), mean = curve.mean, "evaluated curve");

        if curve.discrete && settings.show_values {
            utils::inner_bottom_panel("value_table", ui, Self::VALUE_TABLE_HEIGHT, |ui| {
                value_table::value_table(ui, &curve);
            });
        }

        ui.label(settings.plot_type.axis_label());
        let plot_height = ui.available_height()
            - (ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y);

        let mut plot = Plot::new("curve_plot")
            .legend(Legend::default())
            .include_y(0.)
            .auto_bounds_x()
            .auto_bounds_y()
            .height(plot_height);
        if settings.plot_type == PlotType::Cdf {
            plot = plot.include_y(1.);
        }
        let color = plotting_utils::family_color(family);
        plot.show(ui, |plot_ui| {
            plot_ui.line(plotting_utils::curve_line(
                &curve,
                family,
                settings.plot_type,
                color,
            ));
            if curve.discrete {
                plot_ui.points(plotting_utils::support_markers(
                    &curve,
                    settings.plot_type,
                    color,
                ));
            }
            if settings.show_mean {
                plot_ui.vline(plotting_utils::mean_marker(curve.mean));
            }
        });
        ui.vertical_centered(|ui| ui.label("x"));
    }
}

impl eframe::App for Explorer {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        SidePanel::left("controls")
            .min_width(ctx.available_rect().width() * 0.25)
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));

        let settings = self.settings();
        if self.last_settings != Some(settings) {
            tracing::debug!(?settings, "recomputing curve");
            if self.last_settings.map(|last| last.dark_mode) != Some(settings.dark_mode) {
                ctx.set_visuals(if settings.dark_mode {
                    Visuals::dark()
                } else {
                    Visuals::light()
                });
                ctx.request_repaint();
            }
            self.last_settings = Some(settings);
        }

        CentralPanel::default().show(ctx, |ui| Self::curve_viewer(ui, settings));
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{CentralPanel, Context, RawInput, SidePanel};

    use super::{Explorer, ExplorerSettings, PlotType};
    use crate::numerics::distribution::{Bernoulli, Distribution, Family, Normal};

    #[test]
    fn plot_type_selects_series() {
        let curve = Distribution::from(Bernoulli { p: 0.25 }).evaluate().unwrap();
        assert_eq!(PlotType::Pdf.series(&curve), curve.pdf.as_slice());
        assert_eq!(PlotType::Cdf.series(&curve), curve.cdf.as_slice());
    }

    #[test]
    fn plot_type_labels() {
        assert_eq!(PlotType::Pdf.to_string(), "PDF");
        assert_eq!(PlotType::Cdf.to_string(), "CDF");
        assert_eq!(PlotType::Pdf.axis_label(), "Probability Density");
        assert_eq!(PlotType::Cdf.axis_label(), "Cumulative Probability");
    }

    #[test]
    fn settings_remember_each_family() {
        let mut explorer = Explorer::default();
        let tweaked = Distribution::from(Normal { μ: 2.5, σ: 0.5 });
        explorer.distributions[Family::Normal.index()] = tweaked;

        explorer.family = Family::Poisson;
        assert_eq!(
            explorer.settings().distribution,
            Family::Poisson.default_distribution()
        );
        explorer.family = Family::Normal;
        assert_eq!(explorer.settings().distribution, tweaked);
    }

    #[test]
    fn controls_draw_headless() {
        let mut explorer = Explorer::default();
        let ctx = Context::default();
        for family in Family::ALL {
            explorer.family = family;
            let _ = ctx.run(RawInput::default(), |ctx| {
                SidePanel::left("controls").show(ctx, |ui| explorer.controls(ui));
            });
            assert_eq!(
                explorer.settings().distribution,
                family.default_distribution()
            );
        }
    }

    #[test]
    fn curve_viewer_draws_headless() {
        let ctx = Context::default();
        for family in Family::ALL {
            for plot_type in PlotType::ALL {
                let settings = ExplorerSettings {
                    distribution: family.default_distribution(),
                    plot_type,
                    show_mean: true,
                    dark_mode: false,
                    show_values: true,
                };
                let _ = ctx.run(RawInput::default(), |ctx| {
                    CentralPanel::default().show(ctx, |ui| Explorer::curve_viewer(ui, settings));
                });
            }
        }
    }
}
