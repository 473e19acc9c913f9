//! Error types for validation failures.
//!
//! This module provides the [`ValidationError`] taxonomy, one variant per
//! constraint violation, and [`CompositeError`] for reporting many failures
//! as one error value.

mod composite;
mod validation;

pub use composite::CompositeError;
pub use validation::{Actual, ValidationError};

/// Capability shared by every error in the taxonomy.
///
/// Callers that turn errors into responses only need the standard error
/// message plus a status code; this trait is that boundary. Both
/// [`ValidationError`] and [`CompositeError`] implement it, so an HTTP layer
/// can hold either behind `&dyn CodedError` without inspecting the kind.
///
/// # Example
///
/// ```rust
/// use verdict::{CodedError, CompositeError, ValidationError};
///
/// fn status_line(err: &dyn CodedError) -> String {
///     format!("{} {}", err.code(), err)
/// }
///
/// let single = ValidationError::required("name", "body");
/// assert_eq!(status_line(&single), "422 name in body is required");
///
/// let many = CompositeError::single(single);
/// assert_eq!(status_line(&many), "422 validation failure list");
/// ```
pub trait CodedError: std::error::Error {
    /// Returns the status code for this error.
    fn code(&self) -> u16;
}

impl CodedError for ValidationError {
    fn code(&self) -> u16 {
        ValidationError::code(self)
    }
}

impl CodedError for CompositeError {
    fn code(&self) -> u16 {
        CompositeError::code(self)
    }
}
