use crate::utils::error::{FixtureError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(op: &str, field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FixtureError::MissingInput {
        op: op.to_string(),
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(FixtureError::ConfigError {
            message: format!("'{}' must contain at least one entry", field_name),
        });
    }
    Ok(())
}

pub fn validate_absent<T: std::fmt::Display>(op: &str, field_name: &str, value: &Option<T>) -> Result<()> {
    if let Some(v) = value {
        return Err(FixtureError::UnexpectedInput {
            op: op.to_string(),
            field: field_name.to_string(),
            value: v.to_string(),
        });
    }
    Ok(())
}
