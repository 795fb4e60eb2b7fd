mod logic;
mod ui;

pub use logic::decode_image;

use plot_calibration::PixelPoint;

/// The surface showing the loaded image and the markers placed on it.
#[derive(Default)]
pub struct Canvas {
    /// Decoded image waiting to be uploaded as texture on the next frame.
    pending_image: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
    image_size: [usize; 2],
}

/// Pointer interaction with the canvas during one frame, in image pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CanvasResponse {
    pub clicked: Option<PixelPoint>,
    pub hovered: Option<PixelPoint>,
}

impl Canvas {
    pub fn set_image(&mut self, image: egui::ColorImage) {
        self.image_size = image.size;
        self.pending_image = Some(image);
        self.texture = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_image(&self) -> bool {
        self.pending_image.is_some() || self.texture.is_some()
    }
}
