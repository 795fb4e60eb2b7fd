use plot_calibration::TableRow;
use rust_xlsxwriter::Workbook;

use crate::{ExportError, COLUMNS, SHEET_NAME};

/// Build a workbook with a single sheet holding the rows and return the file
/// contents.
pub fn to_xlsx_buffer(rows: &[TableRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let line = i as u32 + 1;
        sheet.write_number(line, 0, row.index as f64)?;
        sheet.write_number(line, 1, row.x)?;
        sheet.write_number(line, 2, row.y)?;
    }

    Ok(workbook.save_to_buffer()?)
}
