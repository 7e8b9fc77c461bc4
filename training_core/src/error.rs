//! Error types for the training_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for training_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A referenced program, entry or workout does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// No user is signed in for this session
    #[error("User not authenticated")]
    Unauthenticated,

    /// Illegal lifecycle transition
    #[error("State error: {0}")]
    State(String),

    /// The backing store rejected a write
    #[error("Store error: {0}")]
    Store(String),

    /// A store failure annotated with the operation that triggered it
    #[error("Failed to {op}: {source}")]
    Operation {
        op: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the name of the operation that failed.
    ///
    /// `Unauthenticated` passes through untouched so callers can still match on it.
    pub fn with_op(op: &'static str, err: Error) -> Self {
        match err {
            Error::Unauthenticated => Error::Unauthenticated,
            other => Error::Operation {
                op,
                source: Box::new(other),
            },
        }
    }

    /// Strip operation annotations and return the underlying error.
    pub fn root(&self) -> &Error {
        match self {
            Error::Operation { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Annotate a store result with the operation name.
pub(crate) trait OpContext<T> {
    fn op(self, op: &'static str) -> Result<T>;
}

impl<T> OpContext<T> for Result<T> {
    fn op(self, op: &'static str) -> Result<T> {
        self.map_err(|e| Error::with_op(op, e))
    }
}
