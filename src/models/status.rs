use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived status of a stage in a setup workflow.
///
/// Only [`Status::Success`] and [`Status::Skipped`] count as "done" when
/// checking whether a dependent stage's prerequisites are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not started, or blocked by an unmet requirement.
    #[default]
    Off,

    /// In progress; waiting for an external event.
    Waiting,

    /// Completed.
    Success,

    /// Intentionally bypassed. Satisfies dependencies like `Success`.
    Skipped,

    /// Failed.
    Error,

    /// Recommended next action for the operator.
    Next,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Off,
        Status::Waiting,
        Status::Success,
        Status::Skipped,
        Status::Error,
        Status::Next,
    ];

    /// Whether this status satisfies a `requires` or `suggests` edge.
    pub fn is_done(self) -> bool {
        matches!(self, Status::Success | Status::Skipped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Off => "off",
            Status::Waiting => "waiting",
            Status::Success => "success",
            Status::Skipped => "skipped",
            Status::Error => "error",
            Status::Next => "next",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
