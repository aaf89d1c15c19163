use kopo_shim::{Response, StateError};

/// Errors produced by chaincode operations.
///
/// The `Display` text of each variant is the exact message returned to the
/// submitter in the error response.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    #[error("Incorrect number of arguments. Expecting {expecting}")]
    ArgumentCount { expecting: &'static str },

    #[error("# of parameter mismatching")]
    ParameterMismatch,

    #[error("Expecting integer value for asset holding")]
    InvalidHolding,

    #[error("Invalid transaction amount, expecting a integer value")]
    InvalidAmount,

    #[error("code error")]
    InvalidCode,

    #[error("value of paramter is not properly formatted")]
    MalformedParameter,

    #[error("Failed to get state")]
    GetState(#[source] StateError),

    #[error("Entity not found")]
    EntityNotFound,

    #[error("stored value for {key} is not an integer: {value:?}")]
    CorruptBalance { key: String, value: String },

    #[error("balance overflow for {key}")]
    BalanceOverflow { key: String },

    #[error("{0}")]
    Write(#[source] StateError),

    #[error("Failed to delete state")]
    DeleteState(#[source] StateError),

    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    QueryState {
        key: String,
        #[source]
        source: StateError,
    },

    #[error("{{\"Error\":\"Nil amount for {key}\"}}")]
    NilAmount { key: String },

    #[error("{{\"Error\":\"Failed to Unmarshal {key}\"}}")]
    Unmarshal {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to convert bytes {0}")]
    Encode(#[source] serde_json::Error),

    #[error("PutState failure {0}")]
    PutState(#[source] StateError),
}

impl ChaincodeError {
    /// Returns `true` for errors detected before any state access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount { .. }
                | Self::ParameterMismatch
                | Self::InvalidHolding
                | Self::InvalidAmount
                | Self::InvalidCode
                | Self::MalformedParameter
        )
    }
}

impl From<ChaincodeError> for Response {
    fn from(err: ChaincodeError) -> Self {
        Response::error(err.to_string())
    }
}

/// Result alias for chaincode operations.
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_message() {
        let err = ChaincodeError::ArgumentCount { expecting: "3" };
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 3");
        assert!(err.is_validation());
    }

    #[test]
    fn query_errors_render_as_json() {
        let err = ChaincodeError::NilAmount { key: "alice".into() };
        assert_eq!(err.to_string(), r#"{"Error":"Nil amount for alice"}"#);

        let err = ChaincodeError::QueryState {
            key: "bob".into(),
            source: StateError::Unavailable("down".into()),
        };
        assert_eq!(err.to_string(), r#"{"Error":"Failed to get state for bob"}"#);
        assert!(!err.is_validation());
    }

    #[test]
    fn write_errors_carry_host_message() {
        let err = ChaincodeError::Write(StateError::EmptyKey);
        assert_eq!(err.to_string(), "key must not be an empty string");

        let err = ChaincodeError::PutState(StateError::Unavailable("down".into()));
        assert_eq!(err.to_string(), "PutState failure state unavailable: down");
    }

    #[test]
    fn converts_to_error_response() {
        let response: Response = ChaincodeError::EntityNotFound.into();
        assert_eq!(response.status, kopo_shim::ERROR);
        assert_eq!(response.message, "Entity not found");
    }
}
