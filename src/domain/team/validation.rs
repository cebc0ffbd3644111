//! Team name validation

use thiserror::Error;

/// Maximum length for a team display name
pub const MAX_TEAM_NAME_LENGTH: usize = 50;

/// Errors from team name validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {MAX_TEAM_NAME_LENGTH} characters")]
    NameTooLong,
}

/// Validate a team display name.
///
/// The name is trimmed before persisting, so whitespace-only names are
/// rejected as empty.
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if trimmed.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_team_name("My Team").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_whitespace_only_name() {
        assert_eq!(
            validate_team_name("   "),
            Err(TeamValidationError::EmptyName)
        );
    }

    #[test]
    fn test_name_too_long() {
        let name = "a".repeat(MAX_TEAM_NAME_LENGTH + 1);
        assert_eq!(
            validate_team_name(&name),
            Err(TeamValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_name_at_max_length() {
        let name = "a".repeat(MAX_TEAM_NAME_LENGTH);
        assert!(validate_team_name(&name).is_ok());
    }
}
