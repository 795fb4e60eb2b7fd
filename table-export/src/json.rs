use plot_calibration::TableRow;

use crate::ExportError;

/// Render the rows as a JSON array of `{"Point": .., "X": .., "Y": ..}`
/// objects.
pub fn to_json_string(rows: &[TableRow]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_rows;

    #[test]
    fn test_json_uses_column_names() {
        let json = to_json_string(&sample_rows()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["Point"], 1);
        assert_eq!(value[0]["X"], 0.5);
        assert_eq!(value[1]["Y"], 1e-3);
        assert_eq!(value.as_array().map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }
}
