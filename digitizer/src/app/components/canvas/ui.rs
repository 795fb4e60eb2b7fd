use egui::{Color32, Rect, Stroke};
use plot_calibration::{Marker, MarkerKind};

use super::logic::{fit_scale, pixel_to_screen, screen_to_pixel};
use super::CanvasResponse;
use crate::Config;

const CALIBRATION_COLOR: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
const POINT_COLOR: Color32 = Color32::RED;

impl super::Canvas {
    pub fn render(
        &mut self,
        markers: &[Marker],
        config: &Config,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
    ) -> CanvasResponse {
        self.ensure_texture(ctx);
        let Some(texture) = &self.texture else {
            ui.centered_and_justified(|ui| {
                ui.label("Open an image of a plot to start (File → Open Image or CTRL + O).");
            });
            return CanvasResponse::default();
        };

        let scale = fit_scale(self.image_size, ui.available_size());
        let size = egui::vec2(
            self.image_size[0] as f32 * scale,
            self.image_size[1] as f32 * scale,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let rect = response.rect;
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);

        for marker in markers {
            let center = pixel_to_screen(rect, self.image_size, marker.at);
            match marker.kind {
                MarkerKind::Calibration(_) => {
                    painter.circle(
                        center,
                        config.calibration_marker_radius,
                        CALIBRATION_COLOR,
                        Stroke::new(2.0, Color32::WHITE),
                    );
                }
                MarkerKind::DataPoint => {
                    painter.circle_filled(center, config.point_marker_radius, POINT_COLOR);
                }
            }
        }

        let hovered = response
            .hover_pos()
            .map(|pos| screen_to_pixel(rect, self.image_size, pos));
        let clicked = if response.clicked() {
            response
                .interact_pointer_pos()
                .map(|pos| screen_to_pixel(rect, self.image_size, pos))
        } else {
            None
        };
        CanvasResponse { clicked, hovered }
    }
}
