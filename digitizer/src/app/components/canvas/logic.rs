use std::path::Path;

use app_core::string_error::ErrorStringExt;
use egui::{Pos2, Rect, Vec2};
use plot_calibration::PixelPoint;

impl super::Canvas {
    pub(super) fn ensure_texture(&mut self, ctx: &egui::Context) {
        if let Some(image) = self.pending_image.take() {
            log::debug!("uploading image texture of size {:?}", image.size);
            self.texture = Some(ctx.load_texture(
                "plot-image",
                image,
                egui::TextureOptions::LINEAR,
            ));
        }
    }
}

/// Read and decode an image file.
pub fn decode_image(path: &Path) -> Result<egui::ColorImage, String> {
    log::debug!("decoding image {:?}", path);
    let image = image::open(path).err_to_string(&format!("could not open image {:?}", path))?;
    Ok(color_image_from_rgba(&image.to_rgba8()))
}

fn color_image_from_rgba(rgba: &image::RgbaImage) -> egui::ColorImage {
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Scale at which an image fits into `available` without being enlarged.
pub(super) fn fit_scale(image_size: [usize; 2], available: Vec2) -> f32 {
    let [width, height] = image_size;
    if width == 0 || height == 0 {
        return 1.0;
    }
    let scale_x = available.x / width as f32;
    let scale_y = available.y / height as f32;
    scale_x.min(scale_y).clamp(f32::EPSILON, 1.0)
}

/// Convert a screen position inside `rect` (where the image is drawn) into
/// image pixels, correcting for the display scale.
pub(super) fn screen_to_pixel(rect: Rect, image_size: [usize; 2], pos: Pos2) -> PixelPoint {
    let scale_x = image_size[0] as f64 / rect.width() as f64;
    let scale_y = image_size[1] as f64 / rect.height() as f64;
    PixelPoint::new(
        (pos.x - rect.min.x) as f64 * scale_x,
        (pos.y - rect.min.y) as f64 * scale_y,
    )
}

pub(super) fn pixel_to_screen(rect: Rect, image_size: [usize; 2], pixel: PixelPoint) -> Pos2 {
    let scale_x = rect.width() as f64 / image_size[0] as f64;
    let scale_y = rect.height() as f64 / image_size[1] as f64;
    Pos2::new(
        rect.min.x + (pixel.x * scale_x) as f32,
        rect.min.y + (pixel.y * scale_y) as f32,
    )
}
