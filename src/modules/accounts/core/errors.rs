use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("could not load the user profile: {0}")]
    ProfileLookupFailed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("access denied")]
    AccessDenied,

    #[error("unexpected: {0}")]
    Unknown(String),
}
