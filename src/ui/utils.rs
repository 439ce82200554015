use eframe::egui::{self, Margin, TopBottomPanel, Ui};

/// A resizable panel pinned to the bottom of `ui`, taking space away from whatever is added after.
pub(super) fn inner_bottom_panel(
    id: &'static str,
    ui: &mut Ui,
    default_height: f32,
    add_contents: impl FnOnce(&mut Ui),
) {
    TopBottomPanel::bottom(id)
        .resizable(true)
        .default_height(default_height)
        .show_separator_line(false)
        .frame(
            egui::Frame::side_top_panel(ui.style())
                .inner_margin(Margin::symmetric(0.0, ui.style().spacing.item_spacing.y)),
        )
        .show_inside(ui, add_contents);
}
