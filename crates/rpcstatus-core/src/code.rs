//! Canonical status codes
//!
//! The code set is closed and wire-stable. New codes must pick a value that
//! has never been used before; existing values never change.

use std::fmt;
use std::str::FromStr;

use crate::{RegistryError, Status};

/// Canonical outcome of an operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Code {
    /// The operation completed successfully
    Ok = 0,

    /// The operation was cancelled, typically by the caller
    Cancelled = 1,

    /// Unknown error
    ///
    /// Returned when a status received from another address space belongs to
    /// an error space unknown here, or when an API gives too little
    /// information to pick a better code.
    Unknown = 2,

    /// The caller supplied an argument that is invalid regardless of system state
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete
    DeadlineExceeded = 4,

    /// A requested entity was not found
    NotFound = 5,

    /// An entity the caller tried to create already exists
    AlreadyExists = 6,

    /// The caller is identified but not allowed to perform the operation
    PermissionDenied = 7,

    /// A resource or quota has been exhausted
    ResourceExhausted = 8,

    /// The system is not in the state required for the operation
    ///
    /// Clients should not retry until the state has been fixed explicitly.
    FailedPrecondition = 9,

    /// The operation was aborted, typically by a concurrency conflict
    ///
    /// Clients should retry at a higher level (e.g. restart a
    /// read-modify-write sequence).
    Aborted = 10,

    /// The operation was attempted past the valid range
    OutOfRange = 11,

    /// The operation is not implemented or not enabled
    Unimplemented = 12,

    /// An internal invariant has been broken
    Internal = 13,

    /// The service is currently unavailable
    ///
    /// Usually transient; clients may retry the same call with backoff.
    Unavailable = 14,

    /// Unrecoverable data loss or corruption
    DataLoss = 15,

    /// The request has no valid authentication credentials
    Unauthenticated = 16,
}

// Numeric values are part of the wire contract; a collision is a build failure.
const _: () = assert!(Code::values_unique(), "duplicate canonical code value");

impl Code {
    /// Every canonical code, in ascending numeric order
    pub const ALL: [Code; 17] = [
        Code::Ok,
        Code::Cancelled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// Numeric wire value
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Parse from a numeric wire value
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Code::Ok),
            1 => Some(Code::Cancelled),
            2 => Some(Code::Unknown),
            3 => Some(Code::InvalidArgument),
            4 => Some(Code::DeadlineExceeded),
            5 => Some(Code::NotFound),
            6 => Some(Code::AlreadyExists),
            7 => Some(Code::PermissionDenied),
            8 => Some(Code::ResourceExhausted),
            9 => Some(Code::FailedPrecondition),
            10 => Some(Code::Aborted),
            11 => Some(Code::OutOfRange),
            12 => Some(Code::Unimplemented),
            13 => Some(Code::Internal),
            14 => Some(Code::Unavailable),
            15 => Some(Code::DataLoss),
            16 => Some(Code::Unauthenticated),
            _ => None,
        }
    }

    /// Canonical upper-case name, e.g. `NOT_FOUND`
    pub const fn name(self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Parse from the canonical upper-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Code::ALL.iter().copied().find(|code| code.name() == name)
    }

    /// Shared template status for this code
    #[inline]
    pub fn to_status(self) -> Status {
        Status::from_code(self)
    }

    const fn values_unique() -> bool {
        let mut i = 0;
        while i < Code::ALL.len() {
            let mut j = i + 1;
            while j < Code::ALL.len() {
                if Code::ALL[i] as i32 == Code::ALL[j] as i32 {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Code {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::from_name(s).ok_or_else(|| RegistryError::UnknownName(s.to_string()))
    }
}

impl TryFrom<i32> for Code {
    type Error = RegistryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Code::from_value(value).ok_or(RegistryError::UnknownValue(value))
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.value()
    }
}
