//! rpcstatus Wire - What a transport may carry
//!
//! A transport reads a [`WireStatus`] off a status to build its frame and
//! hands one back when a frame arrives. Only the numeric code and the
//! description cross the boundary; the local cause never does.

pub mod policy;
pub mod status;

pub use policy::*;
pub use status::*;
