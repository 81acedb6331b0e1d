use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileHubError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid avatar path")]
    InvalidAvatarPath,

    // Wrapped errors
    #[error(transparent)]
    InvalidUserId(#[from] uuid::Error),
}
