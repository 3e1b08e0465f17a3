mod outcome;
mod status;

pub use outcome::Outcome;
pub use status::Status;
