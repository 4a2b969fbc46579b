/// Convenience result type used across scalesheet.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Errors raised at the edges of the scaler: construction, configuration and document IO.
///
/// Scaling itself never fails; unscalable values pass through unchanged.
#[derive(thiserror::Error, Debug)]
pub enum ScaleError {
    /// Screen metrics that cannot drive scaling (non-finite or non-positive).
    #[error("metrics error: {0}")]
    Metrics(String),

    /// Invalid scaler configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A document that is not a style mapping.
    #[error("style error: {0}")]
    Style(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScaleError {
    /// Build a [`ScaleError::Metrics`] value.
    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }

    /// Build a [`ScaleError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScaleError::Style`] value.
    pub fn style(msg: impl Into<String>) -> Self {
        Self::Style(msg.into())
    }

    /// Build a [`ScaleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScaleError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
