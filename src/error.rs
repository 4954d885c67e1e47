use thiserror::Error;

/// Errors that can occur while matching a resume against a job posting
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MatchError {
    /// Short machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::Validation(_) => "validation_failed",
            MatchError::InvalidInput(_) => "invalid_input",
            MatchError::InvalidConfig(_) => "invalid_config",
        }
    }
}
