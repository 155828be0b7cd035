//! Immutable status values
//!
//! A [`Status`] is a [`Code`] plus an optional description and an optional
//! local cause. Start from the template for a code and derive:
//!
//! ```rust
//! use rpcstatus_core::{Code, Status};
//!
//! let status = Status::from_code(Code::NotFound)
//!     .with_description("could not find 'important_file.txt'");
//! assert_eq!(status.to_string(), "NOT_FOUND: could not find 'important_file.txt'");
//! ```
//!
//! Derivations never mutate; a derivation that changes nothing hands back the
//! same shared instance.

use std::error::Error;
use std::sync::Arc;

use crate::{Code, CodeRegistry};

/// Local cause attached to a status
///
/// Never transmitted: it exists for in-process diagnostics only.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Outcome of an operation
#[derive(Clone)]
pub struct Status {
    inner: Arc<StatusInner>,
}

struct StatusInner {
    code: Code,
    description: Option<String>,
    cause: Option<Cause>,
}

impl Status {
    pub(crate) fn template(code: Code) -> Self {
        Status::from_parts(code, None, None)
    }

    fn from_parts(code: Code, description: Option<String>, cause: Option<Cause>) -> Self {
        Status {
            inner: Arc::new(StatusInner {
                code,
                description,
                cause,
            }),
        }
    }

    /// Template for `code` with the given description
    pub fn new(code: Code, description: impl Into<String>) -> Self {
        Status::from_code(code).with_description(description)
    }

    /// Shared template for `code`
    pub fn from_code(code: Code) -> Self {
        CodeRegistry::global()
            .template(code)
            .cloned()
            .unwrap_or_else(|| Status::template(code))
    }

    /// Resolve a numeric code; undefined values map to `UNKNOWN`
    pub fn from_code_value(value: i32) -> Self {
        CodeRegistry::global().lookup(value)
    }

    /// Derive a status with the description replaced
    ///
    /// Leading and trailing whitespace is kept here. Transports may trim it.
    pub fn with_description(&self, description: impl Into<String>) -> Status {
        let description = description.into();
        if self.description() == Some(description.as_str()) {
            return self.clone();
        }
        Status::from_parts(self.code(), Some(description), self.inner.cause.clone())
    }

    /// Derive a status carrying `cause`
    ///
    /// The cause stays in this process; see [`Status::without_cause`].
    pub fn with_cause(&self, cause: Cause) -> Status {
        if let Some(current) = &self.inner.cause {
            if Arc::ptr_eq(current, &cause) {
                return self.clone();
            }
        }
        Status::from_parts(self.code(), self.inner.description.clone(), Some(cause))
    }

    /// Derive a status caused by `err`
    pub fn with_source<E>(&self, err: E) -> Status
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_cause(Arc::new(err))
    }

    /// Derive a status with the local cause removed
    pub fn without_cause(&self) -> Status {
        if self.inner.cause.is_none() {
            return self.clone();
        }
        Status::from_parts(self.code(), self.inner.description.clone(), None)
    }

    /// Append detail to the description, separated by a newline
    pub fn augment_description(&self, extra: Option<&str>) -> Status {
        let Some(extra) = extra else {
            return self.clone();
        };
        let description = match &self.inner.description {
            None => extra.to_string(),
            Some(current) => format!("{current}\n{extra}"),
        };
        Status::from_parts(self.code(), Some(description), self.inner.cause.clone())
    }

    /// Is this status OK, i.e. not an error?
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.inner.code == Code::Ok
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.inner.code
    }

    /// Description for human consumption
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Local cause, never transmitted
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.inner.cause.as_ref()
    }

    /// Does this status hold a cause that must be dropped before transmission?
    #[inline]
    pub fn has_local_cause(&self) -> bool {
        self.inner.cause.is_some()
    }

    /// Are `a` and `b` the same instance?
    #[inline]
    pub fn ptr_eq(a: &Status, b: &Status) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl From<Code> for Status {
    fn from(code: Code) -> Self {
        Status::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_status_is_send_sync() {
        assert_send_sync::<Status>();
    }

    #[test]
    fn test_from_code_is_shared() {
        let a = Status::from_code(Code::NotFound);
        let b = Code::NotFound.to_status();
        assert!(Status::ptr_eq(&a, &b));
        assert_eq!(a.code(), Code::NotFound);
    }

    #[test]
    fn test_with_description() {
        let base = Status::from_code(Code::Internal);
        let described = base.with_description("disk full");
        assert_eq!(described.description(), Some("disk full"));
        assert!(base.description().is_none());
        assert!(!Status::ptr_eq(&base, &described));
    }

    #[test]
    fn test_with_same_description_is_noop() {
        let status = Status::new(Code::Aborted, "conflict");
        let again = status.with_description("conflict");
        assert!(Status::ptr_eq(&status, &again));
    }

    #[test]
    fn test_description_whitespace_kept() {
        let status = Status::new(Code::Aborted, "  padded \n");
        assert_eq!(status.description(), Some("  padded \n"));
    }

    #[test]
    fn test_augment_description_chain() {
        let status = Status::from_code(Code::NotFound)
            .with_description("x")
            .augment_description(Some("y"));
        assert_eq!(status.description(), Some("x\ny"));
    }

    #[test]
    fn test_augment_from_absent() {
        let status = Status::from_code(Code::Unavailable).augment_description(Some("retry later"));
        assert_eq!(status.description(), Some("retry later"));
    }

    #[test]
    fn test_augment_none_is_identity() {
        for code in Code::ALL {
            let status = Status::from_code(code);
            assert!(Status::ptr_eq(&status, &status.augment_description(None)));

            let described = status.with_description("detail");
            assert!(Status::ptr_eq(&described, &described.augment_description(None)));
        }
    }

    #[test]
    fn test_is_ok_only_for_ok() {
        assert!(Status::from_code(Code::Ok).is_ok());
        let non_ok = Code::ALL
            .iter()
            .filter(|code| **code != Code::Ok)
            .map(|code| Status::from_code(*code))
            .filter(|status| !status.is_ok())
            .count();
        assert_eq!(non_ok, 16);
    }

    #[test]
    fn test_with_cause_identity() {
        let cause: Cause = Arc::new(io::Error::other("boom"));
        let status = Status::from_code(Code::Internal).with_cause(cause.clone());
        assert!(status.has_local_cause());

        let again = status.with_cause(cause);
        assert!(Status::ptr_eq(&status, &again));

        let other = status.with_source(io::Error::other("boom"));
        assert!(!Status::ptr_eq(&status, &other));
    }

    #[test]
    fn test_derivations_preserve_other_fields() {
        let status = Status::from_code(Code::DataLoss)
            .with_source(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"))
            .with_description("chunk 7");
        assert_eq!(status.code(), Code::DataLoss);
        assert_eq!(status.cause().unwrap().to_string(), "truncated");

        let augmented = status.augment_description(Some("replica 2"));
        assert!(augmented.has_local_cause());
        assert_eq!(augmented.description(), Some("chunk 7\nreplica 2"));
    }

    #[test]
    fn test_without_cause() {
        let plain = Status::new(Code::Cancelled, "client went away");
        assert!(Status::ptr_eq(&plain, &plain.without_cause()));

        let caused = plain.with_source(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        let stripped = caused.without_cause();
        assert!(!stripped.has_local_cause());
        assert_eq!(stripped.description(), Some("client went away"));
        assert!(caused.has_local_cause());
    }

    #[test]
    fn test_shared_across_threads() {
        let status = Status::new(Code::Unavailable, "draining");
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let status = status.clone();
                std::thread::spawn(move || {
                    status
                        .augment_description(Some(format!("worker {i}").as_str()))
                        .description()
                        .map(str::to_string)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let description = handle.join().unwrap().unwrap();
            assert_eq!(description, format!("draining\nworker {i}"));
        }
        assert_eq!(status.description(), Some("draining"));
    }

    proptest! {
        #[test]
        fn prop_augment_accumulates_in_order(parts in proptest::collection::vec("[a-z ]{0,12}", 1..6)) {
            let mut status = Status::from_code(Code::Internal);
            for part in &parts {
                status = status.augment_description(Some(part.as_str()));
            }
            let expected = parts.join("\n");
            prop_assert_eq!(status.description(), Some(expected.as_str()));
            prop_assert_eq!(status.code(), Code::Internal);
        }
    }
}
