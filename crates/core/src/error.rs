/// Result alias that carries the custom [`HeartVizError`] type.
pub type Result<T> = std::result::Result<T, HeartVizError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum HeartVizError {
    /// Free-form error used for configuration failures where a readable
    /// message is all the caller needs.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl HeartVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for HeartVizError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for HeartVizError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
