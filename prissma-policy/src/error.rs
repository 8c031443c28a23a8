//! Policy error types

use thiserror::Error;

/// Policy-related errors.
///
/// Expected conditions - a missing optional dimension, an unknown keyword, an
/// invalid dimension - never surface here; they are logged and skipped, or
/// gated by `bool`-returning commit methods. These variants cover structural
/// corruption and collaborator failures only.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The collaborator Turtle parser rejected a document
    #[error("Turtle parse error: {0}")]
    Turtle(#[from] prissma_graph_turtle::TurtleError),

    /// A date or time string did not match the configured layout
    #[error("Invalid date or time: {0}")]
    InvalidDateTime(#[from] chrono::ParseError),

    /// ASK query text without a `{ ... }` group pattern
    #[error("Malformed ASK query: {message}")]
    MalformedAskQuery { message: String },

    /// A fetched document holds no s4ac:AccessPolicy root
    #[error("No s4ac:AccessPolicy root found in document")]
    MissingPolicyRoot,

    /// A fetched document holds more than one s4ac:AccessPolicy root
    #[error("Expected exactly one s4ac:AccessPolicy root, found {found}")]
    MultiplePolicyRoots { found: usize },

    /// Persistence collaborator failure
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl PolicyError {
    /// Create a malformed-ASK error
    pub fn malformed_ask(message: impl Into<String>) -> Self {
        Self::MalformedAskQuery {
            message: message.into(),
        }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Result type alias for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
