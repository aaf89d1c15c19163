use crate::error::StateResult;
use crate::history::HistoryIterator;

/// State-access handle the host supplies to one invocation.
///
/// Implementations must satisfy these invariants:
/// - `get_state` returns `Ok(None)` for an absent key, distinct from any
///   stored value.
/// - `put_state` and `del_state` append to the key's history.
/// - `del_state` on an absent key succeeds.
/// - Host faults are reported as errors and are never retried by callers.
pub trait ChaincodeStub: Send + Sync {
    /// Raw invocation arguments; the first is the function name.
    fn args(&self) -> Vec<Vec<u8>>;

    /// Identifier of the transaction being executed.
    fn tx_id(&self) -> String;

    /// Read the current value of `key`.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Remove `key` from world state.
    fn del_state(&self, key: &str) -> StateResult<()>;

    /// Open the history of `key`, oldest modification first.
    fn get_history_for_key(&self, key: &str) -> StateResult<HistoryIterator<'_>>;

    /// Arguments decoded as UTF-8 strings.
    fn string_args(&self) -> Vec<String> {
        self.args()
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect()
    }

    /// The function name and its parameters.
    ///
    /// An invocation with no arguments yields an empty function name.
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        let mut args = self.string_args().into_iter();
        let function = args.next().unwrap_or_default();
        (function, args.collect())
    }

    /// All arguments concatenated into one byte string.
    fn args_slice(&self) -> Vec<u8> {
        self.args().concat()
    }
}
