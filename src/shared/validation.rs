use std::borrow::Cow;
use validator::ValidationError;

/// Rejects values that are empty or made only of whitespace.
///
/// The value itself is never trimmed; callers store it verbatim.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be empty"));
        return Err(err);
    }
    Ok(())
}
