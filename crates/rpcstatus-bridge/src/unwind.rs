//! Status carried by unwinding
//!
//! For call paths that cannot thread a `Result` back to the boundary (host
//! callbacks, deeply nested handlers). [`raise`] starts unwinding with a
//! [`StatusUnwind`] payload and [`catch_status`] at the boundary turns any
//! unwind back into a status.
//!
//! `raise` uses `resume_unwind`, so the panic hook does not run for it.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rpcstatus_core::Status;
use tracing::trace;

use crate::{recover_status, StatusError};

/// A [`Status`] in unwind-payload form
///
/// Same `Display` and `source()` as [`StatusError`].
#[derive(Clone, Debug)]
pub struct StatusUnwind {
    status: Status,
}

impl StatusUnwind {
    pub fn new(status: Status) -> Self {
        StatusUnwind { status }
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[inline]
    pub fn into_status(self) -> Status {
        self.status
    }
}

impl fmt::Display for StatusUnwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status, f)
    }
}

impl Error for StatusUnwind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.status
            .cause()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

impl From<Status> for StatusUnwind {
    fn from(status: Status) -> Self {
        StatusUnwind::new(status)
    }
}

impl From<StatusUnwind> for Status {
    fn from(unwind: StatusUnwind) -> Self {
        unwind.into_status()
    }
}

/// A panic that did not carry a status
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("panicked: {message}")]
pub struct PanicFailure {
    pub message: String,
}

/// Start unwinding with `status`
pub fn raise(status: Status) -> ! {
    panic::resume_unwind(Box::new(StatusUnwind::new(status)))
}

/// Run `f`, turning an unwind out of it into a status
///
/// `f` is treated as unwind safe: state it mutates may be left half-updated
/// when a status is raised part way through.
pub fn catch_status<F, T>(f: F) -> Result<T, Status>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(status_from_panic)
}

/// Classify a panic payload
///
/// Status carriers yield their status. Any other payload becomes `UNKNOWN`
/// caused by a [`PanicFailure`] holding the panic message.
pub fn status_from_panic(payload: Box<dyn Any + Send>) -> Status {
    let payload = match payload.downcast::<StatusUnwind>() {
        Ok(unwind) => return unwind.into_status(),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<StatusError>() {
        Ok(err) => return err.into_status(),
        Err(payload) => payload,
    };

    let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    trace!(%message, "panic without status");
    recover_status(Arc::new(PanicFailure { message }))
}
