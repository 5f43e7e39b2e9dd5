//! Error types for modelkit-core.

use thiserror::Error;

/// Failure raised while evaluating a rule during materialization.
///
/// The error is propagated unmodified to the `materialize` caller: no retry,
/// no substitution of defaults, and the partially filled container is
/// dropped without ever being installed.
#[derive(Debug, Error)]
#[error("rule evaluation failed: {message}")]
pub struct RuleError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RuleError {
    /// Creates a rule error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a rule error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_message() {
        let err = RuleError::new("index 3 out of range");
        assert_eq!(err.to_string(), "rule evaluation failed: index 3 out of range");
    }

    #[test]
    fn exposes_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "data file missing");
        let err = RuleError::with_source("could not load coefficients", io);
        assert!(err.source().is_some());
    }
}
