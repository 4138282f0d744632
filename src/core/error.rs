use thiserror::Error;

/// Rejections raised before a launch reaches the kinematics engine.
///
/// The engine itself is total over real inputs; these errors belong to whoever
/// turns user text into launch parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid {field}: '{text}'. Expected a number.")]
    NotANumber { field: &'static str, text: String },
    #[error("{field} must be a finite number.")]
    NonFinite { field: &'static str },
    #[error("{field} cannot be negative ({value}).")]
    Negative { field: &'static str, value: f64 },
    #[error("Angle must lie between -90 and 90 degrees ({value}).")]
    AngleOutOfRange { value: f64 },
    #[error("Gravity must be positive ({value}).")]
    NonPositiveGravity { value: f64 },
}

/// Parses one numeric text field, e.g. the speed box of the launch panel.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            text: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{InputError, parse_field};

    #[test]
    fn parses_padded_numbers() {
        assert_eq!(parse_field("speed", "  20.5 \n"), Ok(20.5));
        assert_eq!(parse_field("angle", "-10"), Ok(-10.0));
    }

    #[test]
    fn rejects_text() {
        let err = parse_field("speed", "fast").expect_err("should fail");
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "speed",
                text: "fast".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid speed: 'fast'. Expected a number.");
    }

    #[test]
    fn rejects_empty_field() {
        assert!(matches!(
            parse_field("angle", ""),
            Err(InputError::NotANumber { field: "angle", .. })
        ));
    }

    #[test]
    fn rejects_infinity_and_nan() {
        assert_eq!(
            parse_field("height", "inf"),
            Err(InputError::NonFinite { field: "height" })
        );
        assert_eq!(
            parse_field("height", "NaN"),
            Err(InputError::NonFinite { field: "height" })
        );
    }
}
