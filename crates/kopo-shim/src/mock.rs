use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::chaincode::Chaincode;
use crate::clock::TxClock;
use crate::error::{StateError, StateResult};
use crate::history::{HistoryIterator, KeyModification};
use crate::response::Response;
use crate::stub::ChaincodeStub;
use crate::timestamp::TxTimestamp;

/// Transaction id recorded in history for values written by [`MockStub::seed_state`].
pub const SEED_TX_ID: &str = "seed";

/// Host faults to inject into a [`MockStub`].
///
/// Faults stay armed until replaced or cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultPlan {
    /// Every `get_state` fails.
    pub get: bool,
    /// Every `put_state` fails.
    pub put: bool,
    /// Every `del_state` fails.
    pub delete: bool,
    /// Every `get_history_for_key` fails.
    pub history: bool,
    /// Allow this many successful puts, then fail every later put.
    pub puts_before_fault: Option<usize>,
}

impl FaultPlan {
    /// No faults.
    pub fn none() -> Self {
        Self::default()
    }

    /// Fail every `get_state`.
    pub fn fail_get() -> Self {
        Self {
            get: true,
            ..Self::default()
        }
    }

    /// Fail every `put_state`.
    pub fn fail_put() -> Self {
        Self {
            put: true,
            ..Self::default()
        }
    }

    /// Fail every `del_state`.
    pub fn fail_delete() -> Self {
        Self {
            delete: true,
            ..Self::default()
        }
    }

    /// Fail every `get_history_for_key`.
    pub fn fail_history() -> Self {
        Self {
            history: true,
            ..Self::default()
        }
    }

    /// Let `n` puts through, then fail.
    pub fn fail_after_puts(n: usize) -> Self {
        Self {
            puts_before_fault: Some(n),
            ..Self::default()
        }
    }
}

struct TxContext {
    id: String,
    timestamp: TxTimestamp,
}

#[derive(Default)]
struct MockState {
    world: BTreeMap<String, Vec<u8>>,
    history: HashMap<String, Vec<KeyModification>>,
    args: Vec<Vec<u8>>,
    tx: Option<TxContext>,
    faults: FaultPlan,
}

/// In-memory ledger host.
///
/// Intended for tests, demos, and the CLI harness. Writes apply to world
/// state immediately and are never rolled back, so a fault between two
/// writes of one transaction leaves the first write in place.
pub struct MockStub {
    name: String,
    clock: TxClock,
    inner: RwLock<MockState>,
}

impl MockStub {
    /// Create an empty host for the chaincode called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clock: TxClock::new(),
            inner: RwLock::new(MockState::default()),
        }
    }

    /// Fresh transaction id.
    pub fn next_tx_id() -> String {
        Uuid::now_v7().to_string()
    }

    /// Run `chaincode.init` as transaction `tx_id` with the given arguments.
    pub fn mock_init(
        &self,
        tx_id: &str,
        args: Vec<Vec<u8>>,
        chaincode: &dyn Chaincode,
    ) -> Response {
        self.begin_tx(tx_id, args);
        let response = chaincode.init(self);
        self.end_tx();
        response
    }

    /// Run `chaincode.invoke` as transaction `tx_id` with the given arguments.
    pub fn mock_invoke(
        &self,
        tx_id: &str,
        args: Vec<Vec<u8>>,
        chaincode: &dyn Chaincode,
    ) -> Response {
        self.begin_tx(tx_id, args);
        let response = chaincode.invoke(self);
        self.end_tx();
        response
    }

    /// `mock_init` with string arguments and a generated transaction id.
    pub fn init_with(&self, chaincode: &dyn Chaincode, args: &[&str]) -> Response {
        self.mock_init(&Self::next_tx_id(), to_byte_args(args), chaincode)
    }

    /// `mock_invoke` with string arguments and a generated transaction id.
    pub fn invoke_with(&self, chaincode: &dyn Chaincode, args: &[&str]) -> Response {
        self.mock_invoke(&Self::next_tx_id(), to_byte_args(args), chaincode)
    }

    /// Write a value outside of any chaincode transaction.
    pub fn seed_state(&self, key: &str, value: &[u8]) {
        let timestamp = self.clock.now();
        let mut state = self.inner.write().expect("lock poisoned");
        state.world.insert(key.to_string(), value.to_vec());
        state
            .history
            .entry(key.to_string())
            .or_default()
            .push(KeyModification {
                tx_id: SEED_TX_ID.to_string(),
                value: value.to_vec(),
                timestamp,
                is_delete: false,
            });
    }

    /// Current value of `key`, bypassing injected faults.
    pub fn state(&self, key: &str) -> Option<Vec<u8>> {
        self.inner
            .read()
            .expect("lock poisoned")
            .world
            .get(key)
            .cloned()
    }

    /// Current value of `key` as UTF-8, bypassing injected faults.
    pub fn state_str(&self, key: &str) -> Option<String> {
        self.state(key)
            .map(|v| String::from_utf8_lossy(&v).into_owned())
    }

    /// Full recorded history of `key`, bypassing injected faults.
    pub fn history(&self, key: &str) -> Vec<KeyModification> {
        self.inner
            .read()
            .expect("lock poisoned")
            .history
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Sorted list of keys currently in world state.
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .read()
            .expect("lock poisoned")
            .world
            .keys()
            .cloned()
            .collect()
    }

    /// Number of keys currently in world state.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").world.len()
    }

    /// Returns `true` if world state is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").world.is_empty()
    }

    /// Arm the given faults, replacing any previous plan.
    pub fn set_faults(&self, plan: FaultPlan) {
        self.inner.write().expect("lock poisoned").faults = plan;
    }

    /// Disarm all faults.
    pub fn clear_faults(&self) {
        self.set_faults(FaultPlan::none());
    }

    fn begin_tx(&self, tx_id: &str, args: Vec<Vec<u8>>) {
        let timestamp = self.clock.now();
        let mut state = self.inner.write().expect("lock poisoned");
        state.args = args;
        state.tx = Some(TxContext {
            id: tx_id.to_string(),
            timestamp,
        });
        debug!(chaincode = %self.name, tx_id, "transaction started");
    }

    fn end_tx(&self) {
        let mut state = self.inner.write().expect("lock poisoned");
        if let Some(tx) = state.tx.take() {
            debug!(chaincode = %self.name, tx_id = %tx.id, "transaction finished");
        }
        state.args.clear();
    }

    fn record(state: &mut MockState, key: &str, value: Option<&[u8]>) -> StateResult<()> {
        let tx = state.tx.as_ref().ok_or(StateError::NoTransaction)?;
        let entry = KeyModification {
            tx_id: tx.id.clone(),
            value: value.map(<[u8]>::to_vec).unwrap_or_default(),
            timestamp: tx.timestamp,
            is_delete: value.is_none(),
        };
        state.history.entry(key.to_string()).or_default().push(entry);
        match value {
            Some(v) => {
                state.world.insert(key.to_string(), v.to_vec());
            }
            None => {
                state.world.remove(key);
            }
        }
        Ok(())
    }
}

impl Default for MockStub {
    fn default() -> Self {
        Self::new("mock")
    }
}

impl ChaincodeStub for MockStub {
    fn args(&self) -> Vec<Vec<u8>> {
        self.inner.read().expect("lock poisoned").args.clone()
    }

    fn tx_id(&self) -> String {
        self.inner
            .read()
            .expect("lock poisoned")
            .tx
            .as_ref()
            .map(|tx| tx.id.clone())
            .unwrap_or_default()
    }

    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let state = self.inner.read().expect("lock poisoned");
        if state.faults.get {
            return Err(StateError::Unavailable("injected get fault".into()));
        }
        Ok(state.world.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let mut state = self.inner.write().expect("lock poisoned");
        if state.faults.put {
            return Err(StateError::Unavailable("injected put fault".into()));
        }
        if let Some(remaining) = state.faults.puts_before_fault.as_mut() {
            if *remaining == 0 {
                return Err(StateError::Unavailable("injected put fault".into()));
            }
            *remaining -= 1;
        }
        Self::record(&mut state, key, Some(value))
    }

    fn del_state(&self, key: &str) -> StateResult<()> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let mut state = self.inner.write().expect("lock poisoned");
        if state.faults.delete {
            return Err(StateError::Unavailable("injected delete fault".into()));
        }
        Self::record(&mut state, key, None)
    }

    fn get_history_for_key(&self, key: &str) -> StateResult<HistoryIterator<'_>> {
        let state = self.inner.read().expect("lock poisoned");
        if state.faults.history {
            return Err(StateError::HistoryUnavailable {
                key: key.to_string(),
                reason: "injected history fault".into(),
            });
        }
        let entries = state.history.get(key).cloned().unwrap_or_default();
        Ok(Box::new(entries.into_iter().map(Ok)))
    }
}

impl std::fmt::Debug for MockStub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockStub")
            .field("name", &self.name)
            .field("key_count", &self.len())
            .finish()
    }
}

fn to_byte_args(args: &[&str]) -> Vec<Vec<u8>> {
    args.iter().map(|a| a.as_bytes().to_vec()).collect()
}
