use serde::{Deserialize, Serialize};

use crate::error::StateResult;
use crate::timestamp::TxTimestamp;

/// One entry of a key's append-only history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModification {
    /// Transaction that wrote this value.
    pub tx_id: String,
    /// Value written, empty for deletions.
    pub value: Vec<u8>,
    /// Timestamp of the writing transaction.
    pub timestamp: TxTimestamp,
    /// `true` if the transaction deleted the key.
    pub is_delete: bool,
}

impl KeyModification {
    /// The value decoded as UTF-8, replacing invalid sequences.
    pub fn value_str(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

/// Forward, finite traversal of a key's history, oldest first.
///
/// Each call to `get_history_for_key` yields a fresh iterator.
pub type HistoryIterator<'a> = Box<dyn Iterator<Item = StateResult<KeyModification>> + 'a>;
