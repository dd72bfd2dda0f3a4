//! Field checks shared by the form handlers.
//!
//! Values are trimmed before they are checked and stored. Blank optional
//! fields are stored as empty strings.

use crate::error::AppError;

/// A field that must not be blank.
pub(crate) fn required(label: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{} is required", label)));
    }
    Ok(value.to_string())
}

pub(crate) fn optional(value: &str) -> String {
    value.trim().to_string()
}

/// A field that may be left out entirely; blank becomes `None`.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

/// A required non-negative whole number such as age or weight.
pub(crate) fn whole_number(label: &str, value: &str) -> Result<u32, AppError> {
    let value = required(label, value)?;
    value
        .parse::<u32>()
        .map_err(|_| AppError::validation(format!("{} must be a whole number, got '{}'", label, value)))
}
