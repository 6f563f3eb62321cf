/// Result alias that carries the custom [`RigError`] type.
pub type Result<T> = std::result::Result<T, RigError>;

/// Errors raised at the edges of the engine: loading configuration and
/// decoding descriptors. The placement operations themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    /// Free-form message for conditions without a dedicated variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON in a setup, device or configuration document.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A spot identifier that the active spot catalog does not define.
    #[error("unknown spot `{0}`")]
    UnknownSpot(String),
    /// A setup type string outside DJ/Producer/Musician.
    #[error("unknown setup type `{0}`")]
    UnknownSetupType(String),
}

impl RigError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for RigError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for RigError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
