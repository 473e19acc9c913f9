//! # Verdict
//!
//! A validation-error taxonomy: a closed set of error constructors describing
//! why input data failed a schema constraint, each carrying the fixed status
//! code 422 and a deterministically formatted message.
//!
//! ## Overview
//!
//! Validation engines walk input documents against a schema and, on each
//! constraint violation, build one of these errors instead of an ad-hoc
//! string. Every constructor is pure and infallible; identical inputs always
//! render identical messages, so callers and tests can pin on the literal
//! text. The shared 422 code lets HTTP layers map any validation failure
//! uniformly without inspecting the kind.
//!
//! ## Core Types
//!
//! - [`ValidationError`]: one variant per violation kind (type, range,
//!   length, enumeration, pattern, required-ness, collection format)
//! - [`CompositeError`]: an ordered bundle of failures reported as one error
//! - [`Actual`]: the tag for the runtime value behind an invalid-type error
//! - [`CodedError`]: the `code()` + message capability both types satisfy
//!
//! ## Example
//!
//! ```rust
//! use verdict::{CompositeError, ValidationError};
//!
//! let err = ValidationError::required("name", "body");
//! assert_eq!(err.code(), 422);
//! assert_eq!(err.to_string(), "name in body is required");
//!
//! // A full pass reports every failure at once.
//! let report = CompositeError::new(vec![
//!     err,
//!     ValidationError::too_short("password", "body", 8),
//! ]);
//! assert_eq!(report.to_string(), "validation failure list");
//! assert_eq!(report.len(), 2);
//! ```

pub mod error;

pub use error::{Actual, CodedError, CompositeError, ValidationError};

/// Type alias for validation results that accumulate failures.
pub type ValidationResult<T> = stillwater::Validation<T, CompositeError>;
