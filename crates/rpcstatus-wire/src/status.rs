//! Transmissible status projection

use rpcstatus_core::{lookup, Code, Status};
use tracing::trace;

use crate::WirePolicy;

/// The fields of a status that may be serialized
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireStatus {
    /// Numeric code value
    pub code: i32,
    /// UTF-8 description
    pub description: Option<String>,
}

impl WireStatus {
    /// Project `status` for sending
    ///
    /// The local cause is dropped unconditionally.
    pub fn from_status(status: &Status, policy: &WirePolicy) -> Self {
        if status.has_local_cause() {
            trace!(code = %status.code(), "dropping local cause at wire boundary");
        }
        WireStatus {
            code: status.code().value(),
            description: status
                .description()
                .and_then(|description| policy.normalize(description))
                .map(str::to_string),
        }
    }

    /// Rebuild a status from a received frame
    ///
    /// An undefined code becomes `UNKNOWN`; a non-empty received description
    /// is then appended to the diagnostic naming the code instead of
    /// replacing it.
    pub fn into_status(self, policy: &WirePolicy) -> Status {
        let status = lookup(self.code);
        let description = self
            .description
            .as_deref()
            .and_then(|description| policy.normalize(description));

        if Code::from_value(self.code).is_none() {
            return status.augment_description(description.filter(|d| !d.is_empty()));
        }
        match description {
            Some(description) => status.with_description(description),
            None => status,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok.value()
    }
}

impl From<&Status> for WireStatus {
    fn from(status: &Status) -> Self {
        WireStatus::from_status(status, &WirePolicy::default())
    }
}

impl From<WireStatus> for Status {
    fn from(wire: WireStatus) -> Self {
        wire.into_status(&WirePolicy::default())
    }
}
