use kopo_shim::{ChaincodeStub, Response};
use tracing::info;

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ops::{expect_args, write_balance};

/// Set up two balances: `[A, Aval, B, Bval]`.
///
/// Both values are validated before the first write. A fault on the second
/// write leaves the first balance in place.
pub fn init(stub: &dyn ChaincodeStub, args: &[String]) -> ChaincodeResult<Response> {
    expect_args(args, 4, "4")?;

    let a = &args[0];
    let a_val: i64 = args[1].parse().map_err(|_| ChaincodeError::InvalidHolding)?;
    let b = &args[2];
    let b_val: i64 = args[3].parse().map_err(|_| ChaincodeError::InvalidHolding)?;
    info!(%a, a_val, %b, b_val, "initializing balances");

    write_balance(stub, a, a_val)?;
    write_balance(stub, b, b_val)?;

    Ok(Response::empty_success())
}
