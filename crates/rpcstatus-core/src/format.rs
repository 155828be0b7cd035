//! Human-readable rendering of statuses

use std::error::Error;
use std::fmt;

use crate::Status;

/// Render `status` as `CODE` or `CODE: description`
///
/// Identical code and description always render identically; the cause is
/// never part of the rendering.
pub fn render(status: &Status) -> String {
    status.to_string()
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            None => write!(f, "{}", self.code()),
            Some(description) => write!(f, "{}: {}", self.code(), description),
        }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status")
            .field("code", &format_args!("{}", self.code()))
            .field("description", &self.description())
            .field("cause", &self.cause().map(|cause| cause_chain(&**cause)))
            .finish()
    }
}

/// Join an error and its `source()` chain with `": "`
pub fn cause_chain(err: &(dyn Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut next = err.source();
    // Bounded walk; a cyclic chain must not hang a log line.
    let mut depth = 0;
    while let Some(link) = next {
        if depth == MAX_RENDERED_DEPTH {
            rendered.push_str(": ...");
            break;
        }
        rendered.push_str(": ");
        rendered.push_str(&link.to_string());
        next = link.source();
        depth += 1;
    }
    rendered
}

const MAX_RENDERED_DEPTH: usize = 32;
