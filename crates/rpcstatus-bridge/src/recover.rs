//! Status recovery from error chains
//!
//! Every failure reaching an RPC boundary must be classifiable. The chain is
//! walked outermost first and the first carried status wins; a chain with no
//! carrier yields `UNKNOWN` caused by the original failure.

use std::error::Error;
use std::io;
use std::ptr;
use std::sync::Arc;

use rpcstatus_core::{Cause, Code, Status};
use tracing::trace;

use crate::{StatusError, StatusUnwind};

/// Status carried directly by `link`, if any
///
/// `io::Error::source` skips the error it wraps, so wrapped carriers are
/// inspected through `get_ref` here.
pub fn carried_status<'a>(link: &'a (dyn Error + 'static)) -> Option<&'a Status> {
    if let Some(err) = link.downcast_ref::<StatusError>() {
        return Some(err.status());
    }
    if let Some(unwind) = link.downcast_ref::<StatusUnwind>() {
        return Some(unwind.status());
    }
    if let Some(io_err) = link.downcast_ref::<io::Error>() {
        if let Some(inner) = io_err.get_ref() {
            return carried_status(inner);
        }
    }
    None
}

/// Outermost status carried anywhere in the `source()` chain of `failure`
///
/// Returns `None` when the chain ends, or loops back on itself, without a
/// carrier.
pub fn find_status<'a>(failure: &'a (dyn Error + 'static)) -> Option<&'a Status> {
    let mut visited: Vec<*const (dyn Error + 'static)> = Vec::new();
    let mut link = Some(failure);

    while let Some(current) = link {
        let addr: *const (dyn Error + 'static) = current;
        if visited.iter().any(|seen| ptr::eq(*seen, addr)) {
            trace!(depth = visited.len(), "error source chain is cyclic");
            return None;
        }
        visited.push(addr);

        if let Some(status) = carried_status(current) {
            return Some(status);
        }
        link = current.source();
    }

    None
}

/// Classify `failure`
///
/// Never fails: without a carried status the result is `UNKNOWN` with
/// `failure` as its cause.
pub fn recover_status(failure: Cause) -> Status {
    if let Some(status) = find_status(&*failure) {
        return status.clone();
    }
    trace!(error = %failure, "no status in error chain, classifying as UNKNOWN");
    Status::from_code(Code::Unknown).with_cause(failure)
}

/// [`recover_status`] for an owned error
pub fn recover_from<E>(err: E) -> Status
where
    E: Error + Send + Sync + 'static,
{
    recover_status(Arc::new(err))
}

/// [`recover_status`] for a boxed error
pub fn recover_boxed(err: Box<dyn Error + Send + Sync + 'static>) -> Status {
    recover_status(Arc::from(err))
}
