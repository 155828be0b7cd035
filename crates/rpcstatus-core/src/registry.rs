//! Canonical status registry
//!
//! Builds the value → template index once. The process-wide instance is
//! built from [`Code::ALL`] on first use and is read-only afterwards.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::{Code, RegistryError, RegistryResult, Status};

static CANONICAL: LazyLock<CodeRegistry> =
    LazyLock::new(|| build_or_abort(Code::ALL.iter().map(|&code| (code, code.value()))));

/// Build a registry, treating a malformed table as fatal
fn build_or_abort<I>(entries: I) -> CodeRegistry
where
    I: IntoIterator<Item = (Code, i32)>,
{
    match CodeRegistry::build(entries) {
        Ok(registry) => registry,
        Err(e) => panic!("canonical status table is malformed: {e}"),
    }
}

/// Index of template statuses keyed by numeric code value
#[derive(Debug)]
pub struct CodeRegistry {
    /// Templates indexed by value; always dense from 0
    templates: Vec<Status>,
}

impl CodeRegistry {
    /// Build a registry from `(code, value)` bindings
    ///
    /// Fails if two bindings share a value or if the values do not cover
    /// `0..n` without gaps.
    pub fn build<I>(entries: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = (Code, i32)>,
    {
        let mut canonicalizer: BTreeMap<i32, Code> = BTreeMap::new();
        for (code, value) in entries {
            if let Some(first) = canonicalizer.insert(value, code) {
                return Err(RegistryError::DuplicateValue {
                    value,
                    first,
                    second: code,
                });
            }
        }

        let mut templates = Vec::with_capacity(canonicalizer.len());
        for (index, (value, code)) in canonicalizer.into_iter().enumerate() {
            let expected = index as i32;
            if value != expected {
                return Err(RegistryError::NonContiguous {
                    expected,
                    actual: value,
                });
            }
            templates.push(Status::template(code));
        }

        debug!(entries = templates.len(), "canonical status table built");
        Ok(CodeRegistry { templates })
    }

    /// The process-wide registry
    ///
    /// # Panics
    ///
    /// On first use, if the canonical table is malformed.
    #[inline]
    pub fn global() -> &'static CodeRegistry {
        &CANONICAL
    }

    /// Template registered for `code`, if this registry binds it
    pub fn template(&self, code: Code) -> Option<&Status> {
        usize::try_from(code.value())
            .ok()
            .and_then(|index| self.templates.get(index))
            .filter(|status| status.code() == code)
    }

    /// Resolve a numeric code
    ///
    /// Undefined values degrade to `UNKNOWN` with a description naming the
    /// value, since a newer peer may legitimately send codes we don't know.
    pub fn lookup(&self, value: i32) -> Status {
        match usize::try_from(value)
            .ok()
            .and_then(|index| self.templates.get(index))
        {
            Some(status) => status.clone(),
            None => {
                debug!(value, "lookup of undefined status code");
                self.unknown()
                    .with_description(format!("Unknown code {value}"))
            }
        }
    }

    /// Number of registered codes
    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Does this registry bind no codes at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn unknown(&self) -> Status {
        self.template(Code::Unknown)
            .cloned()
            .unwrap_or_else(|| Status::template(Code::Unknown))
    }
}

/// Build the process-wide registry now rather than on first use
///
/// Call during startup so a malformed table aborts before any status is
/// produced.
pub fn initialize() -> &'static CodeRegistry {
    CodeRegistry::global()
}

/// Resolve a numeric code against the process-wide registry
#[inline]
pub fn lookup(value: i32) -> Status {
    CodeRegistry::global().lookup(value)
}
