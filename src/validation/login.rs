use crate::core::error::ActionError;

/// Trim the login form fields and reject blanks.
///
/// This is the only check the portal performs on identity: the fields are
/// otherwise free text.
pub fn validate_login(name: &str, number: &str) -> Result<(String, String), ActionError> {
    let name = name.trim();
    let number = number.trim();

    if name.is_empty() || number.is_empty() {
        return Err(ActionError::Validation);
    }

    Ok((name.to_string(), number.to_string()))
}
