use std::path::Path;

use anyhow::Context;
use kopo_chaincode::{AssetChaincode, ChaincodeConfig};
use kopo_shim::{MockStub, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A scripted sequence of transactions.
///
/// ```toml
/// init = ["alice", "100", "bob", "50"]
///
/// [config]
/// trace_history = true
///
/// [[step]]
/// function = "invoke"
/// args = ["alice", "bob", "30"]
/// expect_status = 200
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: ChaincodeConfig,
    /// Arguments for the init transaction, if any.
    #[serde(default)]
    pub init: Option<Vec<String>>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One invoke transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct Step {
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Fail the run unless the response has this status.
    #[serde(default)]
    pub expect_status: Option<i32>,
}

/// Response of one transaction in a run.
#[derive(Clone, Debug, Serialize)]
pub struct Outcome {
    pub label: String,
    pub status: i32,
    pub message: String,
    pub payload: String,
    /// `None` when the step set no expectation.
    pub expectation_met: Option<bool>,
}

impl Outcome {
    fn new(label: String, response: &Response, expect_status: Option<i32>) -> Self {
        Self {
            label,
            status: response.status,
            message: response.message.clone(),
            payload: response.payload_str(),
            expectation_met: expect_status.map(|s| s == response.status),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status < kopo_shim::ERROR_THRESHOLD
    }
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Execute the scenario on `stub`, in order.
    pub fn run(&self, stub: &MockStub) -> Vec<Outcome> {
        let chaincode = AssetChaincode::new(self.config.clone());
        let mut outcomes = Vec::with_capacity(self.steps.len() + 1);

        if let Some(init) = &self.init {
            let mut args = vec![b"init".to_vec()];
            args.extend(init.iter().map(|a| a.as_bytes().to_vec()));
            let response = stub.mock_init(&MockStub::next_tx_id(), args, &chaincode);
            outcomes.push(Outcome::new(label("init", init), &response, None));
        }

        for step in &self.steps {
            let mut args = vec![step.function.as_bytes().to_vec()];
            args.extend(step.args.iter().map(|a| a.as_bytes().to_vec()));
            let response = stub.mock_invoke(&MockStub::next_tx_id(), args, &chaincode);
            debug!(function = %step.function, status = response.status, "step complete");
            outcomes.push(Outcome::new(
                label(&step.function, &step.args),
                &response,
                step.expect_status,
            ));
        }

        outcomes
    }
}

fn label(function: &str, args: &[String]) -> String {
    if args.is_empty() {
        function.to_string()
    } else {
        format!("{function} {}", args.join(" "))
    }
}
