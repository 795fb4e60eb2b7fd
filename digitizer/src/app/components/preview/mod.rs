mod ui;

use plot_calibration::{AxisScale, Calibration, TableRow};

/// Scatter plot of the digitized points in plot coordinates.
#[derive(Debug, Default)]
pub struct Preview {
    log_x: bool,
    log_y: bool,
    /// Scales the log flags were last taken from.
    synced_scales: Option<(AxisScale, AxisScale)>,
}

impl Preview {
    /// Follow the axis scales of a newly set calibration. The checkboxes
    /// override them until the calibration changes again.
    fn sync_scales(&mut self, calibration: Option<&Calibration>) {
        let scales = calibration.map(|c| (c.x_range.scale(), c.y_range.scale()));
        if scales == self.synced_scales {
            return;
        }
        if let Some((x_scale, y_scale)) = scales {
            self.log_x = x_scale.is_logarithmic();
            self.log_y = y_scale.is_logarithmic();
        }
        self.synced_scales = scales;
    }
}

/// Coordinates to plot for `rows`. On a logarithmic axis the decimal
/// logarithm is plotted, points with non-positive values are skipped there.
fn preview_coordinates(rows: &[TableRow], log_x: bool, log_y: bool) -> Vec<[f64; 2]> {
    let transform = |value: f64, log: bool| {
        if !log {
            Some(value)
        } else if value > 0.0 {
            Some(value.log10())
        } else {
            None
        }
    };
    rows.iter()
        .filter_map(|row| Some([transform(row.x, log_x)?, transform(row.y, log_y)?]))
        .collect()
}
