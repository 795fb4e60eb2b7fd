use egui_plot::{Legend, Plot, Points};
use plot_calibration::DigitizerSession;

use super::preview_coordinates;

impl super::Preview {
    pub fn render(&mut self, session: &DigitizerSession, ui: &mut egui::Ui) {
        self.sync_scales(session.calibrator().calibration());
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.log_x, "log x");
            ui.checkbox(&mut self.log_y, "log y");
            if let Some(calibration) = session.calibrator().calibration() {
                if ui.button("Use calibration scales").clicked() {
                    self.log_x = calibration.x_range.scale().is_logarithmic();
                    self.log_y = calibration.y_range.scale().is_logarithmic();
                }
            }
        });

        let rows = session.rows();
        let coordinates = preview_coordinates(&rows, self.log_x, self.log_y);
        let skipped = rows.len() - coordinates.len();
        if skipped > 0 {
            ui.label(format!(
                "{skipped} point(s) with non-positive values are not shown on the log axis"
            ));
        }

        let x_label = if self.log_x { "log10(X)" } else { "X" };
        let y_label = if self.log_y { "log10(Y)" } else { "Y" };
        Plot::new("preview")
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(coordinates)
                        .radius(3.0)
                        .color(egui::Color32::RED)
                        .name("digitized points"),
                );
            });
    }
}
