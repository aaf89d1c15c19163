use kopo_shim::{ChaincodeStub, Response};
use tracing::{info, warn};

use crate::config::ChaincodeConfig;
use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ops::expect_args;
use crate::record::{AdditionalInfo, RecordView};

/// Read an annotated record and walk its history: `[title]`.
///
/// The `{"Title","Text"}` view is logged, with the title taken from the
/// lookup key. The success payload is only the decimal text of `code`.
/// An absent key fails to decode. History is a diagnostic side channel: its
/// entries are logged, and a history fault is logged without failing the
/// query.
pub fn more_query(
    stub: &dyn ChaincodeStub,
    args: &[String],
    config: &ChaincodeConfig,
) -> ChaincodeResult<Response> {
    expect_args(args, 1, "name of the person to query")?;

    let a = &args[0];
    let bytes = stub
        .get_state(a)
        .map_err(|source| ChaincodeError::QueryState {
            key: a.clone(),
            source,
        })?
        .unwrap_or_default();

    let record = AdditionalInfo::from_bytes(&bytes).map_err(|source| ChaincodeError::Unmarshal {
        key: a.clone(),
        source,
    })?;

    let view = RecordView {
        title: a.clone(),
        text: record.text.clone(),
    };
    match serde_json::to_string(&view) {
        Ok(json) => info!(response = %json, "query response"),
        Err(e) => warn!(error = %e, "query response not renderable"),
    }

    if config.trace_history {
        trace_history(stub, a);
    }

    Ok(Response::success(record.code.to_string()))
}

/// Log every historical value of `key` with its timestamp.
fn trace_history(stub: &dyn ChaincodeStub, key: &str) {
    let iter = match stub.get_history_for_key(key) {
        Ok(iter) => iter,
        Err(e) => {
            warn!(%key, error = %e, "history unavailable");
            return;
        }
    };

    info!(%key, "history");
    let mut count = 0usize;
    for entry in iter {
        match entry {
            Ok(m) => {
                count += 1;
                info!(
                    %key,
                    tx_id = %m.tx_id,
                    value = %m.value_str(),
                    timestamp = %m.timestamp,
                    at = %m.timestamp.to_rfc3339(),
                    is_delete = m.is_delete,
                    "history entry"
                );
            }
            Err(e) => {
                warn!(%key, error = %e, "history traversal aborted");
                break;
            }
        }
    }
    info!(%key, entries = count, "history complete");
}
