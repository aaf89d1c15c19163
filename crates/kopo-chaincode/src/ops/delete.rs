use kopo_shim::{ChaincodeStub, Response};
use tracing::info;

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ops::expect_args;

/// Remove a key from world state: `[A]`.
///
/// No existence check; deleting an absent key succeeds.
pub fn delete(stub: &dyn ChaincodeStub, args: &[String]) -> ChaincodeResult<Response> {
    expect_args(args, 1, "1")?;

    let a = &args[0];
    stub.del_state(a).map_err(ChaincodeError::DeleteState)?;
    info!(%a, "state deleted");

    Ok(Response::empty_success())
}
