use plot_calibration::TableRow;

use crate::COLUMNS;

/// Render the rows as comma separated values with a header line.
pub fn to_csv_string(rows: &[TableRow]) -> String {
    let mut buf = COLUMNS.join(",");
    buf.push('\n');
    for row in rows {
        buf.push_str(&format!("{},{},{}\n", row.index, row.x, row.y));
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_rows;

    #[test]
    fn test_csv() {
        let csv = to_csv_string(&sample_rows());
        assert_eq!(csv, "Point,X,Y\n1,0.5,31.622776601683793\n2,-2,0.001\n");
    }

    #[test]
    fn test_csv_without_rows_has_header() {
        assert_eq!(to_csv_string(&[]), "Point,X,Y\n");
    }
}
