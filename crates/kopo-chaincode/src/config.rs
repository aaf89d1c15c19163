use serde::{Deserialize, Serialize};

/// Behavior switches for [`AssetChaincode`](crate::AssetChaincode).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaincodeConfig {
    /// Walk and log a record's history during `morequery`.
    pub trace_history: bool,
    /// Log the raw and derived argument forms of every invocation.
    pub trace_arguments: bool,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            trace_history: true,
            trace_arguments: true,
        }
    }
}

impl ChaincodeConfig {
    /// No diagnostic side channels.
    pub fn quiet() -> Self {
        Self {
            trace_history: false,
            trace_arguments: false,
        }
    }
}
