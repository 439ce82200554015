use eframe::egui::{Align, Layout, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use crate::numerics::distribution::CurveResult;

/// Tabulate a discrete curve: the support point, its mass, and the cumulative mass.
pub(super) fn value_table(ui: &mut Ui, curve: &CurveResult) {
    let row_height = ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto_with_initial_suggestion(40.))
        .column(Column::auto())
        .column(Column::remainder())
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("k");
            });
            header.col(|ui| {
                ui.strong("P(X = k)");
            });
            header.col(|ui| {
                ui.strong("P(X ≤ k)");
            });
        })
        .body(|mut body| {
            for (k, mass, cumulative) in curve.rows() {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{k:.0}"));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{mass:.6}"));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{cumulative:.6}"));
                    });
                });
            }
        });
}
