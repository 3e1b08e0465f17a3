use super::status::Status;

/// What a stage's own predicate reports, before dependency rules apply.
///
/// Simple stages answer a yes/no question; richer stages pick a [`Status`]
/// directly so they can report `Waiting`, `Error` or `Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Flag(bool),
    Status(Status),
}

impl Outcome {
    /// `true` maps to `Success`, `false` to `Off`. Explicit statuses pass through.
    pub fn into_status(self) -> Status {
        match self {
            Outcome::Flag(true) => Status::Success,
            Outcome::Flag(false) => Status::Off,
            Outcome::Status(status) => status,
        }
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Outcome::Flag(value)
    }
}

impl From<Status> for Outcome {
    fn from(value: Status) -> Self {
        Outcome::Status(value)
    }
}
