//! Custom validators shared by the input models.
//!
//! Referenced from `#[validate(custom(...))]` attributes, so each function
//! takes the raw field value and returns a [`validator::ValidationError`].

use validator::ValidationError;

/// An entity id must contain at least one non-whitespace character.
pub fn validate_entity_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank_id");
        err.message = Some("Identifier must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// A required text field must contain at least one non-whitespace character.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank_value");
        err.message = Some("Value must not be blank".into());
        return Err(err);
    }
    Ok(())
}
