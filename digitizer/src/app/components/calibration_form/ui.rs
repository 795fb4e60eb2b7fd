use egui::{Color32, RichText};
use plot_calibration::{CalibrationSlot, DigitizerSession};

const COMPLETED_COLOR: Color32 = Color32::from_rgb(0x27, 0xae, 0x60);

impl super::CalibrationForm {
    /// Show the calibration steps and the axis range inputs. Returns true if
    /// the user asked to apply the calibration.
    pub fn render(&mut self, session: &DigitizerSession, ui: &mut egui::Ui) -> bool {
        ui.heading("Calibration");
        ui.label("Click the following points on the image:");

        let calibrator = session.calibrator();
        let recorded = calibrator.recorded_points();
        let next_slot = calibrator.next_slot();
        for slot in CalibrationSlot::ALL {
            let text = format!("{}. {}", slot.index() + 1, slot.label());
            if recorded.iter().any(|(recorded_slot, _)| *recorded_slot == slot) {
                ui.label(RichText::new(format!("✔ {text}")).color(COMPLETED_COLOR));
            } else if next_slot == Some(slot) && session.image_size().is_some() {
                ui.label(RichText::new(format!("▶ {text}")).strong());
            } else {
                ui.label(format!("   {text}"));
            }
        }

        ui.separator();
        ui.label("Axis values at the clicked points:");
        egui::Grid::new("calibration_grid")
            .num_columns(4)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                ui.label("");
                ui.label("start");
                ui.label("end");
                ui.label("");
                ui.end_row();

                ui.label("X");
                bound_input(ui, &mut self.x_min, "x min");
                bound_input(ui, &mut self.x_max, "x max");
                ui.checkbox(&mut self.x_log, "log");
                ui.end_row();

                ui.label("Y");
                bound_input(ui, &mut self.y_min, "y min");
                bound_input(ui, &mut self.y_max, "y max");
                ui.checkbox(&mut self.y_log, "log");
                ui.end_row();
            });

        let all_recorded = next_slot.is_none();
        let clicked = ui
            .add_enabled(all_recorded, egui::Button::new("Set Calibration"))
            .on_disabled_hover_text("Record all four calibration points first")
            .clicked();

        if calibrator.is_ready() {
            ui.colored_label(COMPLETED_COLOR, "Calibration set, click to add points.");
        }
        clicked
    }
}

fn bound_input(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(70.0),
    );
}
