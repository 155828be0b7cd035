//! rpcstatus Bridge - Statuses as Rust failures
//!
//! Two carriers with identical semantics:
//! - [`StatusError`]: returned through `Result` and declared in signatures
//! - [`StatusUnwind`]: carried by unwinding, for paths that cannot return one
//!
//! [`recover_status`] classifies any failure by walking its `source()` chain.

pub mod error;
pub mod recover;
pub mod unwind;

pub use error::*;
pub use recover::*;
pub use unwind::*;

use rpcstatus_core::Status;

/// Conversions from a status into its failure carriers
pub trait StatusExt {
    /// Wrap in a [`StatusError`] for `Result`-based propagation
    fn into_error(self) -> StatusError;

    /// Start unwinding with this status; see [`catch_status`]
    fn raise(self) -> !;
}

impl StatusExt for Status {
    fn into_error(self) -> StatusError {
        StatusError::new(self)
    }

    fn raise(self) -> ! {
        unwind::raise(self)
    }
}
