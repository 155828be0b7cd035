//! Wire policy configuration

/// How descriptions are treated at the wire boundary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WirePolicy {
    /// Trim leading and trailing whitespace from descriptions
    ///
    /// Off by default: trimming is reserved behavior, not part of the wire
    /// contract. A description that trims to nothing is sent as absent.
    pub trim_description: bool,
}

impl WirePolicy {
    /// Policy that trims descriptions
    pub fn trimming() -> Self {
        WirePolicy {
            trim_description: true,
        }
    }

    pub(crate) fn normalize<'a>(&self, description: &'a str) -> Option<&'a str> {
        if !self.trim_description {
            return Some(description);
        }
        match description.trim() {
            "" => None,
            trimmed => Some(trimmed),
        }
    }
}
