use crate::response::Response;
use crate::stub::ChaincodeStub;

/// Entry points the host calls on a chaincode.
///
/// `init` runs once when the chaincode is instantiated or upgraded; `invoke`
/// runs once per submitted transaction. Both return exactly one response and
/// never panic on bad input.
pub trait Chaincode: Send + Sync {
    fn init(&self, stub: &dyn ChaincodeStub) -> Response;

    fn invoke(&self, stub: &dyn ChaincodeStub) -> Response;
}
