use super::format_value;

impl super::PointsTable {
    pub fn render(&mut self, decimals: usize, ui: &mut egui::Ui) {
        ui.heading(format!("Points ({})", self.rows.len()));
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("points_grid")
                    .num_columns(3)
                    .striped(true)
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        ui.strong("#");
                        ui.strong("X");
                        ui.strong("Y");
                        ui.end_row();

                        for row in self.rows.iter() {
                            ui.label(row.index.to_string());
                            ui.monospace(format_value(row.x, decimals));
                            ui.monospace(format_value(row.y, decimals));
                            ui.end_row();
                        }
                    });
                if self.scroll_to_last {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    self.scroll_to_last = false;
                }
            });
    }
}
