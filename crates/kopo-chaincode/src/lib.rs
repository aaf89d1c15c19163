//! Asset transfer and annotated-record chaincode.
//!
//! [`AssetChaincode`] is dispatched by the ledger host once per transaction.
//! It routes the invoked function name to one operation:
//!
//! | function    | operation                                   |
//! |-------------|---------------------------------------------|
//! | `invoke`    | move an amount between two balances         |
//! | `delete`    | remove a key                                |
//! | `query`     | read a balance                              |
//! | `more`      | write an annotated record                   |
//! | `morequery` | read an annotated record and walk its history |
//! | `error`     | fixed diagnostic payload                    |
//!
//! Any other name gets a raw `404 Not Found` response. Balances are set up
//! through the host's `init` call.
//!
//! # Quick Start
//!
//! ```rust
//! use kopo_chaincode::AssetChaincode;
//! use kopo_shim::MockStub;
//!
//! let cc = AssetChaincode::default();
//! let stub = MockStub::new("asset");
//! assert!(stub.init_with(&cc, &["init", "alice", "100", "bob", "50"]).is_ok());
//! assert!(stub.invoke_with(&cc, &["invoke", "alice", "bob", "30"]).is_ok());
//! let balance = stub.invoke_with(&cc, &["query", "alice"]);
//! assert_eq!(balance.payload_str(), "70");
//! ```

pub mod chaincode;
pub mod config;
pub mod error;
pub mod function;
pub mod ops;
pub mod record;

pub use chaincode::AssetChaincode;
pub use config::ChaincodeConfig;
pub use error::{ChaincodeError, ChaincodeResult};
pub use function::Function;
pub use record::{AdditionalInfo, BalanceView, RecordView};
