use kopo_shim::{ChaincodeStub, Response};
use tracing::info;

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ops::{expect_args, read_balance, write_balance};

/// Move `X` units from `A` to `B`: `[A, B, X]`.
///
/// There is no overdraft check; balances may go negative and `X` may be
/// negative. Both balances are read before the amount is parsed. The two
/// writes are not atomic.
pub fn transfer(stub: &dyn ChaincodeStub, args: &[String]) -> ChaincodeResult<Response> {
    expect_args(args, 3, "3")?;

    let a = &args[0];
    let b = &args[1];

    let a_val = read_balance(stub, a)?;
    let b_val = read_balance(stub, b)?;

    let x: i64 = args[2].parse().map_err(|_| ChaincodeError::InvalidAmount)?;

    let a_new = a_val
        .checked_sub(x)
        .ok_or_else(|| ChaincodeError::BalanceOverflow { key: a.clone() })?;
    let b_new = b_val
        .checked_add(x)
        .ok_or_else(|| ChaincodeError::BalanceOverflow { key: b.clone() })?;
    info!(%a, a_val = a_new, %b, b_val = b_new, amount = x, "transfer computed");

    write_balance(stub, a, a_new)?;
    write_balance(stub, b, b_new)?;

    Ok(Response::empty_success())
}
