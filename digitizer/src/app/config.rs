use app_core::string_error::ErrorStringExt;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

const CONFIG_FILE_NAME: &str = ".plot-digitizer";
/// Upper limit for the number of decimals shown in the points table.
pub const MAX_TABLE_DECIMALS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub export_file_name: String,
    pub table_decimals: usize,
    pub calibration_marker_radius: f32,
    pub point_marker_radius: f32,
    /// Directory the image dialog starts in.
    pub image_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_file_name: table_export::DEFAULT_FILE_NAME.to_string(),
            table_decimals: 4,
            calibration_marker_radius: 5.0,
            point_marker_radius: 3.0,
            image_dir: None,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        Self::from_path(&home.join(CONFIG_FILE_NAME))
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let config_raw = {
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    /// Read `key=value` lines. Unknown keys are skipped, values that cannot be
    /// parsed keep their default.
    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "export_file_name" => {
                    if val.is_empty() {
                        log::warn!("'export_file_name' is empty, keeping default")
                    } else {
                        config.export_file_name = val.to_string();
                    }
                }
                "table_decimals" => match val.parse::<usize>() {
                    Ok(decimals) if decimals > MAX_TABLE_DECIMALS => {
                        log::warn!(
                            "'table_decimals' = {} is too large, using {}",
                            decimals,
                            MAX_TABLE_DECIMALS
                        );
                        config.table_decimals = MAX_TABLE_DECIMALS;
                    }
                    Ok(decimals) => config.table_decimals = decimals,
                    Err(_) => log::warn!("could not parse 'table_decimals' as number"),
                },
                "calibration_marker_radius" => match parse_radius(val) {
                    Some(radius) => config.calibration_marker_radius = radius,
                    None => log::warn!("could not parse 'calibration_marker_radius' as radius"),
                },
                "point_marker_radius" => match parse_radius(val) {
                    Some(radius) => config.point_marker_radius = radius,
                    None => log::warn!("could not parse 'point_marker_radius' as radius"),
                },
                "image_dir" => {
                    config.image_dir = (!val.is_empty()).then(|| PathBuf::from(val));
                }
                _ => continue,
            }
        }
        config
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading("Preferences");
        ui.label(format!(
            "Loaded from ~/{CONFIG_FILE_NAME} at startup, changes here last for this session."
        ));
        ui.separator();
        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Export file name");
                ui.text_edit_singleline(&mut self.export_file_name);
                ui.end_row();

                ui.label("Table decimals");
                ui.add(
                    egui::DragValue::new(&mut self.table_decimals).range(0..=MAX_TABLE_DECIMALS),
                );
                ui.end_row();

                ui.label("Calibration marker radius");
                ui.add(
                    egui::DragValue::new(&mut self.calibration_marker_radius)
                        .range(1.0..=20.0)
                        .speed(0.1),
                );
                ui.end_row();

                ui.label("Point marker radius");
                ui.add(
                    egui::DragValue::new(&mut self.point_marker_radius)
                        .range(1.0..=20.0)
                        .speed(0.1),
                );
                ui.end_row();

                ui.label("Image directory");
                match &self.image_dir {
                    Some(dir) => ui.label(dir.display().to_string()),
                    None => ui.label("(not set)"),
                };
                ui.end_row();
            });
    }
}

fn parse_radius(val: &str) -> Option<f32> {
    val.parse::<f32>()
        .ok()
        .filter(|radius| radius.is_finite() && *radius > 0.0)
}
