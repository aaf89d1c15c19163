use kopo_shim::{ChaincodeStub, Response};
use tracing::info;

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ops::expect_args;
use crate::record::BalanceView;

/// Read a balance: `[A]`.
///
/// The success payload is the stored value verbatim. The `{"Name","Amount"}`
/// view is logged alongside it.
pub fn query(stub: &dyn ChaincodeStub, args: &[String]) -> ChaincodeResult<Response> {
    expect_args(args, 1, "name of the person to query")?;

    let a = &args[0];
    let value = stub
        .get_state(a)
        .map_err(|source| ChaincodeError::QueryState {
            key: a.clone(),
            source,
        })?
        .ok_or_else(|| ChaincodeError::NilAmount { key: a.clone() })?;

    let view = BalanceView {
        name: a.clone(),
        amount: String::from_utf8_lossy(&value).into_owned(),
    };
    match serde_json::to_string(&view) {
        Ok(json) => info!(response = %json, "query response"),
        Err(e) => info!(error = %e, "query response not renderable"),
    }

    Ok(Response::success(value))
}
