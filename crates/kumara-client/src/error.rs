//! Client error types for the Kumara SDK

/// Error type for Kumara client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("config error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Config("missing hostname".to_string());
        assert_eq!(err.to_string(), "config error: missing hostname");

        let err: ClientError = validator::ValidationError::new("hostname_empty").into();
        assert!(err.to_string().starts_with("validation error:"));

        let err: ClientError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(err.to_string(), "io error: no such file");
    }

    #[test]
    fn test_from_anyhow() {
        let err: ClientError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ClientError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
