//! Client error types.

use std::fmt;

use signdex_api::ApiError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Dictionary service error.
    Api(ApiError),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Api(err) => write!(f, "service error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variants() {
        let err = ClientError::Config("bad base URL".into());
        assert_eq!(err.to_string(), "configuration error: bad base URL");

        let err = ClientError::from(ApiError::not_found("no such event"));
        assert!(err.to_string().contains("service error"));
        assert!(err.to_string().contains("no such event"));
    }

    #[test]
    fn api_error_is_source() {
        use std::error::Error;
        let err = ClientError::from(ApiError::network("request timeout"));
        assert!(err.source().is_some());
    }
}
