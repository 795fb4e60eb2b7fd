use plot_calibration::{Axis, AxisRange, AxisScale, CalibrationError, DigitizerSession};

impl super::CalibrationForm {
    /// Parse both axis ranges from the form fields.
    pub fn axis_ranges(&self) -> Result<(AxisRange, AxisRange), CalibrationError> {
        let x_range = AxisRange::parse(
            Axis::X,
            &self.x_min,
            &self.x_max,
            AxisScale::from_log_flag(self.x_log),
        )?;
        let y_range = AxisRange::parse(
            Axis::Y,
            &self.y_min,
            &self.y_max,
            AxisScale::from_log_flag(self.y_log),
        )?;
        Ok((x_range, y_range))
    }

    /// Set the calibration of `session` from the form fields.
    pub fn apply(&self, session: &mut DigitizerSession) -> Result<(), CalibrationError> {
        let (x_range, y_range) = self.axis_ranges()?;
        session.set_axis_ranges(x_range, y_range)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use plot_calibration::{Bound, ClickOutcome, PixelPoint};

    use super::super::CalibrationForm;
    use super::*;

    fn form(x: (&str, &str), y: (&str, &str), x_log: bool, y_log: bool) -> CalibrationForm {
        CalibrationForm {
            x_min: x.0.to_string(),
            x_max: x.1.to_string(),
            y_min: y.0.to_string(),
            y_max: y.1.to_string(),
            x_log,
            y_log,
        }
    }

    fn collected_session() -> DigitizerSession {
        let mut session = DigitizerSession::new();
        for (x, y) in [(0.0, 100.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)] {
            session.click(PixelPoint::new(x, y)).unwrap();
        }
        session
    }

    #[test]
    fn test_apply_calibrates_session() {
        let mut session = collected_session();
        form(("1", "1000"), ("0", "10"), true, false)
            .apply(&mut session)
            .unwrap();
        assert!(session.is_ready());

        let outcome = session.click(PixelPoint::new(100.0, 100.0)).unwrap();
        let ClickOutcome::Digitized { point, .. } = outcome else {
            panic!("expected a digitized point, got {:?}", outcome);
        };
        assert!((point.x - 1000.0).abs() < 1e-9);
        assert_eq!(point.y, 0.0);
    }

    #[test]
    fn test_invalid_text_is_reported() {
        let mut session = collected_session();
        let err = form(("0", "10"), ("zero", "10"), false, false)
            .apply(&mut session)
            .unwrap_err();
        assert_eq!(
            err,
            CalibrationError::InvalidNumber {
                axis: Axis::Y,
                bound: Bound::Min,
                input: "zero".to_string()
            }
        );
        assert!(!session.is_ready());
    }

    #[test]
    fn test_log_axis_rejects_zero() {
        let mut session = collected_session();
        let err = form(("0", "10"), ("0", "10"), true, false)
            .apply(&mut session)
            .unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::NonPositiveLogBound { axis: Axis::X, .. }
        ));
    }

    #[test]
    fn test_apply_before_all_points_fails() {
        let mut session = DigitizerSession::new();
        session.click(PixelPoint::new(1.0, 1.0)).unwrap();
        let err = form(("0", "10"), ("0", "10"), false, false)
            .apply(&mut session)
            .unwrap_err();
        assert_eq!(err, CalibrationError::IncompleteCalibration { recorded: 1 });
    }

    #[test]
    fn test_clear() {
        let mut form = form(("0", "10"), ("1", "2"), true, true);
        form.clear();
        assert_eq!(form, CalibrationForm::default());
        assert!(form.axis_ranges().is_err());
    }
}
