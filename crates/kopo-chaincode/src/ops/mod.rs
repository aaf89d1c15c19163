//! State operations, one per invocable function.
//!
//! Every operation validates its arguments before touching state, so a
//! validation failure never leaves a partial effect behind.

pub mod delete;
pub mod diagnostic;
pub mod init;
pub mod more;
pub mod more_query;
pub mod query;
pub mod transfer;

pub use delete::delete;
pub use diagnostic::{error_payload, ERROR_PAYLOAD};
pub use init::init;
pub use more::more;
pub use more_query::more_query;
pub use query::query;
pub use transfer::transfer;

use kopo_shim::ChaincodeStub;

use crate::error::{ChaincodeError, ChaincodeResult};

/// Fail with `ArgumentCount` unless exactly `count` arguments were given.
pub(crate) fn expect_args(
    args: &[String],
    count: usize,
    expecting: &'static str,
) -> ChaincodeResult<()> {
    if args.len() != count {
        return Err(ChaincodeError::ArgumentCount { expecting });
    }
    Ok(())
}

/// Read a balance that must exist.
pub(crate) fn read_balance(stub: &dyn ChaincodeStub, key: &str) -> ChaincodeResult<i64> {
    let bytes = stub
        .get_state(key)
        .map_err(ChaincodeError::GetState)?
        .ok_or(ChaincodeError::EntityNotFound)?;
    let text = String::from_utf8_lossy(&bytes);
    text.parse::<i64>()
        .map_err(|_| ChaincodeError::CorruptBalance {
            key: key.to_string(),
            value: text.into_owned(),
        })
}

/// Write a balance as decimal text.
pub(crate) fn write_balance(stub: &dyn ChaincodeStub, key: &str, value: i64) -> ChaincodeResult<()> {
    stub.put_state(key, value.to_string().as_bytes())
        .map_err(ChaincodeError::Write)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use kopo_shim::{Chaincode, ChaincodeStub, HistoryIterator, MockStub, Response, StateResult};

    use crate::error::ChaincodeResult;

    /// Run `op` inside a mock transaction so writes are recorded.
    pub fn run<F>(stub: &MockStub, op: F) -> Response
    where
        F: Fn(&dyn ChaincodeStub) -> ChaincodeResult<Response> + Send + Sync,
    {
        struct Single<F>(F);

        impl<F> Chaincode for Single<F>
        where
            F: Fn(&dyn ChaincodeStub) -> ChaincodeResult<Response> + Send + Sync,
        {
            fn init(&self, stub: &dyn ChaincodeStub) -> Response {
                self.invoke(stub)
            }

            fn invoke(&self, stub: &dyn ChaincodeStub) -> Response {
                (self.0)(stub).unwrap_or_else(Response::from)
            }
        }

        stub.invoke_with(&Single(op), &["test"])
    }

    pub fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Forwards state access to a [`MockStub`] and counts the diagnostic
    /// reads: each argument form and each history entry yielded.
    pub struct Recording<'a> {
        inner: &'a MockStub,
        args: Vec<Vec<u8>>,
        pub args_reads: AtomicUsize,
        pub string_args_reads: AtomicUsize,
        pub args_slice_reads: AtomicUsize,
        pub history_opened: AtomicUsize,
        pub history_yielded: AtomicUsize,
    }

    impl<'a> Recording<'a> {
        pub fn new(inner: &'a MockStub, args: &[&str]) -> Self {
            Self {
                inner,
                args: args.iter().map(|a| a.as_bytes().to_vec()).collect(),
                args_reads: AtomicUsize::new(0),
                string_args_reads: AtomicUsize::new(0),
                args_slice_reads: AtomicUsize::new(0),
                history_opened: AtomicUsize::new(0),
                history_yielded: AtomicUsize::new(0),
            }
        }

        pub fn count(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }

        fn strings(&self) -> Vec<String> {
            self.args
                .iter()
                .map(|a| String::from_utf8_lossy(a).into_owned())
                .collect()
        }
    }

    impl ChaincodeStub for Recording<'_> {
        fn args(&self) -> Vec<Vec<u8>> {
            self.args_reads.fetch_add(1, Ordering::SeqCst);
            self.args.clone()
        }

        fn tx_id(&self) -> String {
            self.inner.tx_id()
        }

        fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
            self.inner.get_state(key)
        }

        fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()> {
            self.inner.put_state(key, value)
        }

        fn del_state(&self, key: &str) -> StateResult<()> {
            self.inner.del_state(key)
        }

        fn get_history_for_key(&self, key: &str) -> StateResult<HistoryIterator<'_>> {
            let iter = self.inner.get_history_for_key(key)?;
            self.history_opened.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(iter.inspect(move |_| {
                self.history_yielded.fetch_add(1, Ordering::SeqCst);
            })))
        }

        fn string_args(&self) -> Vec<String> {
            self.string_args_reads.fetch_add(1, Ordering::SeqCst);
            self.strings()
        }

        fn function_and_parameters(&self) -> (String, Vec<String>) {
            let mut args = self.strings().into_iter();
            let function = args.next().unwrap_or_default();
            (function, args.collect())
        }

        fn args_slice(&self) -> Vec<u8> {
            self.args_slice_reads.fetch_add(1, Ordering::SeqCst);
            self.args.concat()
        }
    }
}
