//! rpcstatus Core - Canonical status codes and status values
//!
//! This crate defines the outcome model shared by every RPC layer:
//! - Canonical codes with wire-stable numeric values
//! - The code registry and its per-code template statuses
//! - Immutable status values and their derivations
//! - Deterministic rendering

pub mod code;
pub mod error;
pub mod format;
pub mod registry;
pub mod status;

pub use code::*;
pub use error::*;
pub use format::*;
pub use registry::*;
pub use status::*;
