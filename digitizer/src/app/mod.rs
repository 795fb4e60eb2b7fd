mod components;
pub mod config;
mod events;

use self::components::{CalibrationForm, Canvas, CanvasResponse, PointsTable, Preview};
use crate::app::events::EventQueue;
use config::Config;
use events::{ExportRequested, LoadImageRequested};
use plot_calibration::{ClickOutcome, DigitizerSession, PixelPoint};

const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];

pub struct EguiApp {
    config: Config,
    session: DigitizerSession,
    canvas: Canvas,
    calibration_form: CalibrationForm,
    points_table: PointsTable,
    preview: Preview,
    shortcuts_modal_open: bool,
    ui_selection: UISelection,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
    status: Status,
    hovered_pixel: Option<PixelPoint>,
}

#[derive(Debug, PartialEq, Eq)]
enum UISelection {
    Digitize,
    Preview,
    Preferences,
}

impl UISelection {
    fn next(&self) -> Self {
        match self {
            UISelection::Digitize => Self::Preview,
            UISelection::Preview => Self::Digitize,
            UISelection::Preferences => Self::Digitize,
        }
    }
}

/// Last message shown in the status bar.
#[derive(Debug, Default)]
struct Status {
    text: String,
    is_error: bool,
}

impl Status {
    fn info(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
    }

    fn error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
    }
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            config,
            session: DigitizerSession::new(),
            canvas: Canvas::default(),
            calibration_form: CalibrationForm::default(),
            points_table: PointsTable::default(),
            preview: Preview::default(),
            shortcuts_modal_open: false,
            ui_selection: UISelection::Digitize,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: None,
            status: Status {
                text: "Open an image of a plot to start.".to_string(),
                is_error: false,
            },
            hovered_pixel: None,
        }
    }

    /// Drop image, calibration and points and empty the form.
    fn clear_all(&mut self) {
        self.session.clear_all();
        self.canvas.clear();
        self.calibration_form.clear();
        self.points_table.refresh(&self.session);
        self.event_queue.discard_events();
        self.hovered_pixel = None;
        self.status.info("Cleared. Open an image of a plot to start.");
    }

    fn reset_calibration(&mut self) {
        self.session.reset_calibration();
        self.status.info("Calibration reset. Click the start of the x-axis.");
    }

    fn set_calibration(&mut self) {
        match self.calibration_form.apply(&mut self.session) {
            Ok(()) => self
                .status
                .info("Calibration set. Click on the image to add points."),
            Err(err) => {
                log::warn!("could not set calibration: {}", err);
                self.status.error(format!("Calibration not set: {err}"));
            }
        }
    }

    fn handle_click(&mut self, pixel: PixelPoint) {
        match self.session.click(pixel) {
            Ok(ClickOutcome::CalibrationPoint(slot)) => {
                let next = match slot.next() {
                    Some(next) => format!("Click the {}.", next.label().to_lowercase()),
                    None => "Enter the axis values and set the calibration.".to_string(),
                };
                self.status.info(format!("Recorded {}. {}", slot.label(), next));
            }
            Ok(ClickOutcome::Digitized { index, point }) => {
                self.points_table.refresh(&self.session);
                self.status
                    .info(format!("Point {index}: x = {}, y = {}", point.x, point.y));
            }
            Ok(ClickOutcome::Ignored) => {
                self.status
                    .error("All calibration points are recorded, set the calibration first.");
            }
            Err(err) => {
                log::warn!("click at ({}, {}) not recorded: {}", pixel.x, pixel.y, err);
                self.status.error(format!("Point not recorded: {err}"));
            }
        }
    }

    fn open_image_dialog(&mut self) {
        log::debug!("open dialog to select image");
        let image_dir = self.config.image_dir.clone();
        let handle = std::thread::spawn(move || {
            let mut dialog = rfd::FileDialog::new().add_filter("Images", &IMAGE_EXTENSIONS);
            if let Some(dir) = image_dir {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file()
        });
        let event = LoadImageRequested::new(Some(handle));
        self.event_queue.queue_event(Box::new(event));
    }

    fn open_export_dialog(&mut self) {
        log::debug!("open dialog to select export path");
        let file_name = self.config.export_file_name.clone();
        let handle = std::thread::spawn(move || {
            rfd::FileDialog::new()
                .set_file_name(file_name)
                .add_filter("Spreadsheet", &["xlsx"])
                .add_filter("CSV", &["csv"])
                .add_filter("JSON", &["json"])
                .save_file()
        });
        let event = ExportRequested::new(Some(handle));
        self.event_queue.queue_event(Box::new(event));
    }

    fn update_state(&mut self) {
        self.run_events();
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }
        // Keep polling while a file dialog is open.
        if !self.event_queue.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.update_state();

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            // Circle main window view.
            if i.key_pressed(egui::Key::F3) {
                self.ui_selection = self.ui_selection.next();
            }
            // Start over.
            if i.key_pressed(egui::Key::F5) {
                self.clear_all();
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
            if i.key_pressed(egui::Key::O) && i.modifiers.ctrl {
                self.open_image_dialog();
            }
            if i.key_pressed(egui::Key::E) && i.modifiers.ctrl {
                self.open_export_dialog();
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::SidePanel::left("calibration_panel")
            .resizable(false)
            .show(ctx, |ui| {
                if !self.canvas.has_image() {
                    ui.label("No image loaded.");
                    ui.separator();
                }
                if self.calibration_form.render(&self.session, ui) {
                    self.set_calibration();
                }
                ui.separator();
                if ui.button("Reset Calibration").clicked() {
                    self.reset_calibration();
                }
            });

        egui::SidePanel::right("points_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(
                            !self.points_table.rows().is_empty(),
                            egui::Button::new("Export"),
                        )
                        .clicked()
                    {
                        self.open_export_dialog();
                    }
                    if ui.button("Clear All").clicked() {
                        self.clear_all();
                    }
                });
                ui.separator();
                self.points_table.render(self.config.table_decimals, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui, ctx);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        use UISelection as U;
        match self.ui_selection {
            U::Digitize => {
                let markers = self.session.markers();
                let CanvasResponse { clicked, hovered } =
                    self.canvas.render(&markers, &self.config, ui, ctx);
                self.hovered_pixel = hovered;
                if let Some(pixel) = clicked {
                    self.handle_click(pixel);
                }
            }
            U::Preview => self.preview.render(&self.session, ui),
            U::Preferences => self.config.render(ui),
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.status.is_error {
                ui.colored_label(ui.visuals().error_fg_color, &self.status.text);
            } else {
                ui.label(&self.status.text);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(pixel) = self.hovered_pixel {
                    let position = match self.session.calibrator().pixel_to_plot(pixel) {
                        Ok(plot) if plot.is_finite() => {
                            format!("x = {:.4}, y = {:.4}", plot.x, plot.y)
                        }
                        _ => format!("pixel ({:.0}, {:.0})", pixel.x, pixel.y),
                    };
                    ui.monospace(position);
                }
            });
        });
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image").clicked() {
                        self.open_image_dialog();
                        ui.close_menu();
                    }
                    if ui.button("Export Points").clicked() {
                        self.open_export_dialog();
                        ui.close_menu();
                    }
                    if ui.button("Reset Calibration").clicked() {
                        self.reset_calibration();
                        ui.close_menu();
                    }
                    if ui.button("Clear All").clicked() {
                        self.clear_all();
                        ui.close_menu();
                    }
                    if ui.button("Preferences").clicked() {
                        self.ui_selection = UISelection::Preferences;
                        ui.close_menu();
                    };
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                // Selection of ui view.
                ui.menu_button("View", |ui| {
                    ui.selectable_value(&mut self.ui_selection, UISelection::Digitize, "Digitize");
                    ui.selectable_value(&mut self.ui_selection, UISelection::Preview, "Preview");
                });

                ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_buttons(ui);
                });
            };
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("CTRL + O = Open Image");
                    ui.separator();
                    ui.label("CTRL + E = Export Points");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F3 = Cycle View");
                    ui.separator();
                    ui.label("F5 = Clear All");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
