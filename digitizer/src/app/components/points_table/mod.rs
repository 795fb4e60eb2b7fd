mod ui;

use plot_calibration::{DigitizerSession, TableRow};

/// Table listing the digitized points.
#[derive(Debug, Default)]
pub struct PointsTable {
    rows: Vec<TableRow>,
    scroll_to_last: bool,
}

impl PointsTable {
    /// Rebuild the rows from the session's point history.
    pub fn refresh(&mut self, session: &DigitizerSession) {
        let rows = session.rows();
        self.scroll_to_last = rows.len() > self.rows.len();
        self.rows = rows;
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

fn format_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
