use thiserror::Error;

/// Errors surfaced by the engine and its host capabilities.
///
/// Only configuration loading returns these to the caller; runtime host
/// failures are logged and swallowed where they occur.
#[derive(Error, Debug)]
pub enum ReflexError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Announcement failed: {0}")]
    Announce(String),

    #[error("Score storage error: {0}")]
    Storage(String),

    #[error("Host capability unavailable: {0}")]
    Host(String),
}

impl From<serde_json::Error> for ReflexError {
    fn from(err: serde_json::Error) -> Self {
        ReflexError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReflexError::InvalidConfig("component_size must be positive".to_string());
        assert!(err.to_string().contains("component_size"));
    }

    #[test]
    fn from_serde_error() {
        let err: ReflexError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ReflexError::Serialization(_)));
    }
}
