use crate::utils::error::{PairSumError, Result};

/// Parses a comma separated list such as `2, 7, 11, 15` (brackets optional).
///
/// The list is read with JSON number syntax. It is not sorted here; ordering is
/// checked by the finder.
pub fn parse_sequence(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    if body.trim().is_empty() {
        return Err(PairSumError::ParseError {
            field: "numbers".to_string(),
            value: text.to_string(),
            reason: "no numbers given".to_string(),
        });
    }

    serde_json::from_str::<Vec<f64>>(&format!("[{}]", body)).map_err(|e| {
        PairSumError::ParseError {
            field: "numbers".to_string(),
            value: text.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Parses a single number with the same JSON number syntax as [`parse_sequence`].
pub fn parse_target(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let parse_error = |reason: &str| PairSumError::ParseError {
        field: "target".to_string(),
        value: text.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(parse_error("no target given"));
    }

    let target: f64 =
        serde_json::from_str(trimmed).map_err(|_| parse_error("not a number"))?;

    if !target.is_finite() {
        return Err(parse_error("not a finite number"));
    }

    Ok(target)
}
