//! Error types for Turtle parsing

/// Error type for Turtle parsing operations
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Syntax error from the underlying parser
    #[error("Turtle syntax error: {0}")]
    Syntax(String),

    /// The supplied base IRI is not a valid IRI
    #[error("Invalid base IRI: {0}")]
    InvalidBaseIri(String),
}

impl TurtleError {
    /// Create a syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    /// Create an invalid-base-IRI error
    pub fn invalid_base_iri(message: impl Into<String>) -> Self {
        Self::InvalidBaseIri(message.into())
    }
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;
