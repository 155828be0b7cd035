//! Status carried through `Result`

use std::error::Error;
use std::fmt;

use rpcstatus_core::Status;

/// A [`Status`] in error form
///
/// `Display` renders the status. `source()` is the status cause rather than
/// the status itself, so generic error reporters still reach the original
/// low-level failure while [`crate::recover_status`] recovers the status.
#[derive(Clone, Debug)]
pub struct StatusError {
    status: Status,
}

impl StatusError {
    pub fn new(status: Status) -> Self {
        StatusError { status }
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

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status, f)
    }
}

impl Error for StatusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.status
            .cause()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

impl From<Status> for StatusError {
    fn from(status: Status) -> Self {
        StatusError::new(status)
    }
}

impl From<StatusError> for Status {
    fn from(err: StatusError) -> Self {
        err.into_status()
    }
}

/// Result type for operations that fail with a status
pub type StatusResult<T> = Result<T, StatusError>;
