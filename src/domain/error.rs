use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("A team already exists at URI '{uri}'")]
    DuplicateTeam { uri: String },

    #[error("Incorrect board or password. Please try again.")]
    InvalidPassword,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn duplicate_team(uri: impl Into<String>) -> Self {
        Self::DuplicateTeam { uri: uri.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Team 'my-team' not found");
        assert_eq!(error.to_string(), "Not found: Team 'my-team' not found");
    }

    #[test]
    fn test_duplicate_team_error_reports_uri() {
        let error = DomainError::duplicate_team("my-team");
        assert_eq!(error.to_string(), "A team already exists at URI 'my-team'");
    }

    #[test]
    fn test_invalid_password_reveals_nothing() {
        // A single error kind for both "missing" and "mismatch" - the
        // message must not say which check failed.
        let error = DomainError::InvalidPassword;
        assert_eq!(
            error.to_string(),
            "Incorrect board or password. Please try again."
        );
    }
}
