//! Stage id validation.
//!
//! Stage ids are used as map keys, in serialized results and on the command
//! line, so they are restricted to a conservative character set.

use anyhow::{bail, Result};

/// Maximum allowed length for stage ids.
pub const MAX_ID_LENGTH: usize = 128;

/// Validates that a stage id is usable as a graph key.
///
/// An id is valid if:
/// - It is not empty
/// - It is no longer than MAX_ID_LENGTH characters
/// - It contains only alphanumeric characters, dashes, and underscores
///
/// # Examples
///
/// ```
/// use showstage::validation::validate_stage_id;
///
/// assert!(validate_stage_id("upload-show").is_ok());
/// assert!(validate_stage_id("setup_start_time").is_ok());
/// assert!(validate_stage_id("").is_err());
/// assert!(validate_stage_id("upload show").is_err());
/// ```
pub fn validate_stage_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    Ok(())
}
