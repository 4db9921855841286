//! Project name validation.
//!
//! A project name doubles as the destination directory name and as the
//! value substituted for the project-name token, so it is validated before
//! any filesystem work happens.

use crate::error::ProjectNameError;

/// Characters allowed anywhere in a project name.
const ALLOWED_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789_";

/// Validate a project name.
///
/// Rules, all of which must hold:
/// - the name is non-empty
/// - the first character is a letter
/// - every character is in `[a-z0-9_]`
///
/// Returns the first violated rule; uppercase letters fall under the
/// character-set rule, not the first-character rule.
pub fn validate_project_name(name: &str) -> Result<(), ProjectNameError> {
    let first = name.chars().next().ok_or(ProjectNameError::Empty)?;

    if !first.is_alphabetic() {
        return Err(ProjectNameError::MustStartWithLetter { found: first });
    }

    let illegal: Vec<char> = name.chars().filter(|c| !ALLOWED_CHARS.contains(*c)).collect();
    if !illegal.is_empty() {
        return Err(ProjectNameError::IllegalCharacters { found: illegal });
    }

    Ok(())
}

/// Convenience predicate over [`validate_project_name`].
pub fn is_valid_project_name(name: &str) -> bool {
    validate_project_name(name).is_ok()
}
