use kopo_shim::{ChaincodeStub, Response};
use tracing::info;

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::record::AdditionalInfo;

/// Success payload of [`more`].
pub const MORE_SUCCESS: &str = "invoke success";

/// Create or overwrite an annotated record: `[title, text, code]`.
///
/// `code` must be a 32-bit decimal integer and is checked before the
/// emptiness of the other arguments. Last write wins.
pub fn more(stub: &dyn ChaincodeStub, args: &[String]) -> ChaincodeResult<Response> {
    let [title, text, code] = args else {
        return Err(ChaincodeError::ParameterMismatch);
    };

    let code_num = code
        .parse::<i32>()
        .map_err(|_| ChaincodeError::InvalidCode)?;

    if title.is_empty() || text.is_empty() || code.is_empty() {
        return Err(ChaincodeError::MalformedParameter);
    }

    let record = AdditionalInfo::new(title.as_str(), text.as_str(), i64::from(code_num));
    let bytes = record.to_bytes().map_err(ChaincodeError::Encode)?;

    stub.put_state(title, &bytes)
        .map_err(ChaincodeError::PutState)?;
    info!(%title, code = code_num, "annotated record written");

    Ok(Response::success(MORE_SUCCESS))
}
