use crate::utils::error::{AreaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 半徑必須是有限且不小於零的數
pub fn validate_radius(value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(AreaError::invalid_argument(value, "is not a number"));
    }
    if value.is_infinite() {
        return Err(AreaError::invalid_argument(value, "must be finite"));
    }
    if value < 0.0 {
        return Err(AreaError::invalid_argument(value, "cannot be negative"));
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(AreaError::config(field_name, "at least one value is required"));
    }
    Ok(())
}

pub fn validate_format(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AreaError::config(
            field_name,
            format!(
                "Unsupported value '{}'. Valid values: {}",
                value,
                allowed.join(", ")
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_radius() {
        assert!(validate_radius(0.0).is_ok());
        assert!(validate_radius(-0.0).is_ok());
        assert!(validate_radius(12.5).is_ok());
        assert!(validate_radius(-0.001).is_err());
        assert!(validate_radius(f64::NAN).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
        assert!(validate_radius(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_radius_reasons() {
        match validate_radius(f64::NAN) {
            Err(AreaError::InvalidArgument { reason, .. }) => assert_eq!(reason, "is not a number"),
            other => panic!("unexpected result: {:?}", other),
        }
        match validate_radius(-3.0) {
            Err(AreaError::InvalidArgument { value, reason }) => {
                assert_eq!(value, -3.0);
                assert_eq!(reason, "cannot be negative");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("demo.radii", &[1.0]).is_ok());
        assert!(validate_non_empty::<f64>("demo.radii", &[]).is_err());
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format("demo.format", "json", &["text", "json"]).is_ok());
        assert!(validate_format("demo.format", "csv", &["text", "json"]).is_err());
    }
}
