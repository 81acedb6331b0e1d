use profile_hub::ProfileHubError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileHubClientError>;

#[derive(Debug, Error)]
pub enum ProfileHubClientError {
    #[error("Another request is already in flight")]
    OperationInFlight,
    #[error("You must select an image to upload.")]
    NoFileSelected,
    #[error("No active session")]
    SessionRequired,
    #[error("Session expired or invalid")]
    Unauthorized,
    #[error("Invalid platform URI: {0}")]
    InvalidUri(String),

    /// Failure description reported by a hosted service, passed through
    /// verbatim for the user-visible channel.
    #[error("{0}")]
    ServiceRejected(String),

    // Wrapped errors
    #[error(transparent)]
    ProfileHub(#[from] ProfileHubError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
