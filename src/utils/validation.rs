use crate::domain::model::Operand;
use crate::utils::error::{InputViolation, PairSumError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_min_len<T>(sequence: &[T], min_len: usize) -> Result<()> {
    if sequence.len() < min_len {
        return Err(InputViolation::TooShort {
            len: sequence.len(),
        }
        .into());
    }
    Ok(())
}

pub fn validate_finite_target<T: Operand>(target: T) -> Result<()> {
    if !target.is_finite_value() {
        return Err(InputViolation::NonFiniteTarget.into());
    }
    Ok(())
}

/// Rejects the first non-finite element, reporting its 1-based position.
pub fn validate_finite_elements<T: Operand>(sequence: &[T]) -> Result<()> {
    match sequence.iter().position(|value| !value.is_finite_value()) {
        Some(index) => Err(InputViolation::NonFiniteElement { position: index + 1 }.into()),
        None => Ok(()),
    }
}

/// Rejects the first element that is smaller than its predecessor, reporting its 1-based position.
pub fn validate_non_decreasing<T: Operand>(sequence: &[T]) -> Result<()> {
    match sequence.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(index) => Err(InputViolation::NotSorted { position: index + 2 }.into()),
        None => Ok(()),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(PairSumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}
