use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Missing argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid platform '{0}'. Use one of: psn, xbl, battle, uno")]
    InvalidPlatform(String),

    #[error("Invalid username '{0}' for this platform")]
    InvalidUsername(String),

    #[error("HTTP error: {0}")]
    TransportError(String),

    #[error("Failed to read response body: {0}")]
    BodyReadError(String),

    #[error("JSON parsing error: {0}")]
    DecodeError(String),

    #[error("No stats returned for {0}. Make sure the profile is public and the session tokens are valid")]
    UpstreamRejected(String),
}

impl AppError {
    /// 400 for bad input, 500 for anything that went wrong after validation.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidArgument(_)
            | AppError::InvalidPlatform(_)
            | AppError::InvalidUsername(_) => 400,
            AppError::MissingCredentials(_)
            | AppError::TransportError(_)
            | AppError::BodyReadError(_)
            | AppError::DecodeError(_)
            | AppError::UpstreamRejected(_) => 500,
        }
    }
}
