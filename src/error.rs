//! Error types for astviz

use thiserror::Error;

/// Astviz pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    /// Nothing left to parse once the end-of-stream sentinel and surrounding
    /// whitespace were stripped
    #[error("No input received")]
    EmptyInput,

    /// Tokens were produced but the tree builder found no root node
    ///
    /// **Triggered by:** input made only of stray closers, e.g. `)` or `) (a)`
    #[error("Empty or invalid parse tree")]
    EmptyOrInvalidTree,

    /// The graph backend could not produce an artifact
    ///
    /// **Triggered by:** `dot` missing from `PATH`, or `dot` exiting non-zero
    #[error("Rendering failed: {message}")]
    RenderingFailure {
        /// Description, including the renderer's stderr when available
        message: String,
    },

    /// Invalid configuration file or value
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading input or writing the artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a rendering failure
    pub fn rendering(message: impl Into<String>) -> Self {
        Error::RenderingFailure {
            message: message.into(),
        }
    }
}

/// Result type for astviz operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyInput.to_string(), "No input received");
        assert_eq!(
            Error::EmptyOrInvalidTree.to_string(),
            "Empty or invalid parse tree"
        );
        assert_eq!(
            Error::rendering("dot exited with status 1").to_string(),
            "Rendering failed: dot exited with status 1"
        );
    }
}
