//! Host-side interface for kopo chaincode.
//!
//! Chaincode never owns its storage. The ledger host hands every invocation a
//! [`ChaincodeStub`] for reading and writing world state, and collects a
//! single [`Response`]. This crate defines that boundary:
//!
//! - [`ChaincodeStub`] -- state access (`get`/`put`/`delete`/`history`) plus
//!   the invocation arguments
//! - [`Chaincode`] -- the `init`/`invoke` entry points a host calls
//! - [`Response`] -- success, error, and raw status responses
//! - [`KeyModification`] -- one entry of a key's append-only history
//! - [`MockStub`] -- in-memory host for tests, demos, and the CLI harness
//!
//! # Design Rules
//!
//! 1. Absence of a key is `Ok(None)`, never an error.
//! 2. Host faults are returned as [`StateError`] and never retried here.
//! 3. Every write and delete appends to the key's history.

pub mod chaincode;
pub mod clock;
pub mod error;
pub mod history;
pub mod mock;
pub mod response;
pub mod stub;
pub mod timestamp;

pub use chaincode::Chaincode;
pub use clock::TxClock;
pub use error::{StateError, StateResult};
pub use history::{HistoryIterator, KeyModification};
pub use mock::{FaultPlan, MockStub};
pub use response::{Response, ERROR, ERROR_THRESHOLD, OK};
pub use stub::ChaincodeStub;
pub use timestamp::TxTimestamp;
