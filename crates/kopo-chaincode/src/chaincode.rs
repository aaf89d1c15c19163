use kopo_shim::{Chaincode, ChaincodeStub, Response};
use tracing::{debug, info, warn};

use crate::config::ChaincodeConfig;
use crate::error::ChaincodeResult;
use crate::function::Function;
use crate::ops;

/// Status of the raw response for an unrecognized function name.
pub const NOT_FOUND_STATUS: i32 = 404;

/// Message of the raw response for an unrecognized function name.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Asset transfer and annotated-record chaincode.
#[derive(Clone, Debug, Default)]
pub struct AssetChaincode {
    config: ChaincodeConfig,
}

impl AssetChaincode {
    /// Create a chaincode with the given diagnostics configuration.
    pub fn new(config: ChaincodeConfig) -> Self {
        Self { config }
    }

    /// Diagnostics configuration in effect.
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Run `function` with `args`.
    pub fn dispatch(
        &self,
        stub: &dyn ChaincodeStub,
        function: Function,
        args: &[String],
    ) -> ChaincodeResult<Response> {
        match function {
            Function::Transfer => ops::transfer(stub, args),
            Function::Delete => ops::delete(stub, args),
            Function::Query => ops::query(stub, args),
            Function::More => ops::more(stub, args),
            Function::MoreQuery => ops::more_query(stub, args, &self.config),
            Function::Error => Ok(ops::error_payload()),
        }
    }

    fn trace_arguments(&self, stub: &dyn ChaincodeStub) {
        if !self.config.trace_arguments {
            return;
        }
        let raw: String = stub
            .args()
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect();
        debug!(args = %raw, "GetArgs()");
        debug!(args = ?stub.string_args(), "GetStringArgs()");
        debug!(
            args = %String::from_utf8_lossy(&stub.args_slice()),
            "GetArgsSlice()"
        );
    }
}

impl Chaincode for AssetChaincode {
    fn init(&self, stub: &dyn ChaincodeStub) -> Response {
        info!(tx_id = %stub.tx_id(), "init");
        let (_, args) = stub.function_and_parameters();
        ops::init(stub, &args).unwrap_or_else(Response::from)
    }

    fn invoke(&self, stub: &dyn ChaincodeStub) -> Response {
        info!(tx_id = %stub.tx_id(), "invoke");
        self.trace_arguments(stub);

        let (name, args) = stub.function_and_parameters();
        let Some(function) = Function::from_name(&name) else {
            debug!(function = %name, "no such function");
            return Response::with_status(NOT_FOUND_STATUS, NOT_FOUND_MESSAGE);
        };

        self.dispatch(stub, function, &args).unwrap_or_else(|err| {
            if err.is_validation() {
                debug!(%function, error = %err, "invocation rejected");
            } else {
                warn!(%function, error = %err, "invocation failed");
            }
            Response::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use kopo_shim::{MockStub, ERROR};

    use super::*;
    use crate::ops::testing::Recording;

    fn setup() -> (AssetChaincode, MockStub) {
        let cc = AssetChaincode::default();
        let stub = MockStub::new("asset");
        assert!(stub
            .init_with(&cc, &["init", "alice", "100", "bob", "50"])
            .is_ok());
        (cc, stub)
    }

    #[test]
    fn init_ignores_function_name() {
        let cc = AssetChaincode::default();
        let stub = MockStub::default();
        let response = stub.init_with(&cc, &["anything", "a", "1", "b", "2"]);
        assert!(response.is_ok());
        assert_eq!(stub.state_str("a").as_deref(), Some("1"));
    }

    #[test]
    fn init_validation_error() {
        let cc = AssetChaincode::default();
        let stub = MockStub::default();
        let response = stub.init_with(&cc, &["init", "a", "1"]);
        assert_eq!(response.status, ERROR);
        assert_eq!(response.message, "Incorrect number of arguments. Expecting 4");
    }

    #[test]
    fn routes_every_function() {
        let (cc, stub) = setup();
        assert!(stub.invoke_with(&cc, &["invoke", "alice", "bob", "1"]).is_ok());
        assert_eq!(stub.invoke_with(&cc, &["query", "alice"]).payload_str(), "99");
        assert!(stub.invoke_with(&cc, &["more", "memo", "hi", "3"]).is_ok());
        assert_eq!(stub.invoke_with(&cc, &["morequery", "memo"]).payload_str(), "3");
        assert!(stub.invoke_with(&cc, &["delete", "memo"]).is_ok());
        assert_eq!(
            stub.invoke_with(&cc, &["error"]).payload_str(),
            ops::ERROR_PAYLOAD
        );
    }

    #[test]
    fn unknown_function_is_raw_404() {
        let (cc, stub) = setup();
        let response = stub.invoke_with(&cc, &["transfer", "alice", "bob", "1"]);
        assert_eq!(response.status, NOT_FOUND_STATUS);
        assert_eq!(response.message, NOT_FOUND_MESSAGE);
        assert!(response.payload.is_empty());
        assert_eq!(stub.state_str("alice").as_deref(), Some("100"));
    }

    #[test]
    fn empty_invocation_is_raw_404() {
        let (cc, stub) = setup();
        let response = stub.invoke_with(&cc, &[]);
        assert_eq!(response.status, NOT_FOUND_STATUS);
    }

    #[test]
    fn error_function_ignores_arguments() {
        let (cc, stub) = setup();
        let response = stub.invoke_with(&cc, &["error", "x", "y"]);
        assert!(response.is_ok());
        assert_eq!(response.payload_str(), ops::ERROR_PAYLOAD);
    }

    #[test]
    fn business_errors_use_generic_status() {
        let (cc, stub) = setup();
        let response = stub.invoke_with(&cc, &["invoke", "alice"]);
        assert_eq!(response.status, ERROR);
        assert_ne!(response.status, NOT_FOUND_STATUS);
    }

    #[test]
    fn invoke_reads_every_argument_form() {
        let (cc, stub) = setup();
        let recording = Recording::new(&stub, &["query", "bob"]);
        let response = cc.invoke(&recording);
        assert_eq!(response.payload_str(), "50");
        assert_eq!(Recording::count(&recording.args_reads), 1);
        assert_eq!(Recording::count(&recording.string_args_reads), 1);
        assert_eq!(Recording::count(&recording.args_slice_reads), 1);
    }

    #[test]
    fn argument_forms_are_read_for_unknown_functions() {
        let (cc, stub) = setup();
        let recording = Recording::new(&stub, &["mint", "bob"]);
        assert_eq!(cc.invoke(&recording).status, NOT_FOUND_STATUS);
        assert_eq!(Recording::count(&recording.args_reads), 1);
        assert_eq!(Recording::count(&recording.args_slice_reads), 1);
    }

    #[test]
    fn quiet_config_still_dispatches() {
        let cc = AssetChaincode::new(ChaincodeConfig::quiet());
        let stub = MockStub::default();
        stub.init_with(&cc, &["init", "a", "1", "b", "2"]);
        assert!(!cc.config().trace_arguments);

        let recording = Recording::new(&stub, &["query", "b"]);
        assert_eq!(cc.invoke(&recording).payload_str(), "2");
        assert_eq!(Recording::count(&recording.args_reads), 0);
        assert_eq!(Recording::count(&recording.string_args_reads), 0);
        assert_eq!(Recording::count(&recording.args_slice_reads), 0);
    }
}
