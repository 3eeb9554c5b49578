//! Error types used outside the call path of the bridge.
//!
//! A boundary crossing never produces one of these: a well-formed binding either
//! completes or aborts the process. They cover configuration, interface files and
//! descriptor checking.

use thiserror::Error;

/// Result type for symbridge tooling and configuration.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(String),

    /// Interface file could not be parsed or names an unknown type.
    #[error("interface error: {0}")]
    Interface(String),

    /// A descriptor disagrees with its declared signature.
    #[error("descriptor mismatch: {0}")]
    Descriptor(String),

    #[error("codegen error: {0}")]
    Codegen(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Internal(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Internal(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for BridgeError {
    fn from(err: serde_yaml::Error) -> Self {
        BridgeError::Interface(format!("YAML error: {}", err))
    }
}

impl From<String> for BridgeError {
    fn from(err: String) -> Self {
        BridgeError::Internal(err)
    }
}

impl From<&str> for BridgeError {
    fn from(err: &str) -> Self {
        BridgeError::Internal(err.to_string())
    }
}
