/// Errors reported by the host state interface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The world state could not be reached or refused the operation.
    #[error("state unavailable: {0}")]
    Unavailable(String),

    /// Keys must be non-empty strings.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// The history index for a key could not be opened.
    #[error("history unavailable for key {key}: {reason}")]
    HistoryUnavailable { key: String, reason: String },

    /// A state operation was attempted outside of a transaction.
    #[error("no active transaction")]
    NoTransaction,
}

/// Result alias for state operations.
pub type StateResult<T> = Result<T, StateError>;
