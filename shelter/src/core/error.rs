//! Error taxonomy for record validation and lookup.
//!
//! The `Display` text of each variant is exactly the reason shown to the user
//! after the `Error adding animal:` / `Error retrieving fee:` labels.

use thiserror::Error;

/// Reason shown when `add` receives a blank name.
pub const ADD_NAME_REASON: &str = "Please enter an animal name.";
/// Reason shown when `fee` receives a blank name.
pub const LOOKUP_NAME_REASON: &str = "Please enter a valid animal name.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelterError {
    /// Blank or whitespace-only animal name.
    #[error("{0}")]
    InvalidName(&'static str),
    /// Fee text that is not a finite number, or a negative fee.
    #[error("Adoption fee must be a valid non-negative number.")]
    InvalidFee,
    /// No record matches the requested name.
    #[error("Animal not found in records.")]
    NotFound,
    /// Anything the inner boundaries did not classify.
    #[error("{0}")]
    Unexpected(String),
}
