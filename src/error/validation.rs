//! The validation-error taxonomy.
//!
//! This module provides [`ValidationError`], one variant per constraint
//! violation, and [`Actual`], the tag describing the runtime value handed to
//! the invalid-type constructor.

use std::fmt::{self, Display};

use serde_json::Value;

use super::composite::CompositeError;

/// Status code shared by every error in the taxonomy (Unprocessable Entity).
const VALIDATION_CODE: u16 = 422;

/// The runtime value observed where a different type was expected.
///
/// The invalid-type constructor renders a different message suffix depending
/// on what the validation engine actually saw:
///
/// - [`Actual::Absent`]: nothing was available, no suffix.
/// - [`Actual::Value`]: a value of the wrong type, quoted in the message.
/// - [`Actual::Cause`]: decoding the value itself failed; the underlying
///   error's message is carried in a `because:` clause.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::{Actual, ValidationError};
///
/// let err = ValidationError::invalid_type("confirmed", "query", "boolean", Actual::Absent);
/// assert_eq!(err.to_string(), "confirmed in query must be of type boolean");
///
/// let err = ValidationError::invalid_type("confirmed", "query", "boolean", json!("hello"));
/// assert_eq!(
///     err.to_string(),
///     "confirmed in query must be of type boolean: \"hello\"",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Actual {
    /// No value was supplied.
    Absent,
    /// A value was supplied but had the wrong type.
    Value(Value),
    /// Reading the value failed; holds the underlying error's message.
    Cause(String),
}

impl Actual {
    /// Wraps the message of an underlying error for the `because:` clause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Actual, ValidationError};
    ///
    /// let parse_failure = "five".parse::<i64>().unwrap_err();
    /// let err = ValidationError::invalid_type(
    ///     "age",
    ///     "query",
    ///     "integer",
    ///     Actual::cause(parse_failure),
    /// );
    /// assert!(err.to_string().starts_with("age in query must be of type integer, because: "));
    /// ```
    pub fn cause(err: impl std::error::Error) -> Self {
        Actual::Cause(err.to_string())
    }
}

impl From<Value> for Actual {
    fn from(value: Value) -> Self {
        Actual::Value(value)
    }
}

impl From<Option<Value>> for Actual {
    fn from(value: Option<Value>) -> Self {
        value.map(Actual::Value).unwrap_or(Actual::Absent)
    }
}

/// A single validation failure with a stable status code and message.
///
/// Each variant describes one kind of constraint violation. Values are
/// immutable once constructed: the constructors are pure, never fail, and
/// identical inputs always render identical messages. [`Display`] is the
/// message accessor; [`ValidationError::code`] always returns 422, letting
/// HTTP layers map any validation failure uniformly without inspecting the
/// kind.
///
/// Most messages are prefixed with the field identifier and its location
/// qualifier (`"name in query ..."`). An empty location drops the `in`
/// clause; an empty name drops the identifier.
///
/// # Example
///
/// ```rust
/// use verdict::ValidationError;
///
/// let err = ValidationError::required("name", "body");
/// assert_eq!(err.code(), 422);
/// assert_eq!(err.to_string(), "name in body is required");
///
/// let err = ValidationError::too_long("name", "body", 255);
/// assert_eq!(err.to_string(), "name in body should be at most 255 chars long");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A value did not have the expected type.
    InvalidType {
        name: String,
        location: String,
        type_name: String,
        actual: Actual,
    },
    /// A collection contained duplicate items despite a uniqueness constraint.
    DuplicateItems { name: String, location: String },
    /// A collection held more items than allowed.
    TooManyItems {
        name: String,
        location: String,
        max: i64,
    },
    /// A collection held fewer items than required.
    TooFewItems {
        name: String,
        location: String,
        min: i64,
    },
    /// A number was above its maximum bound.
    ExceedsMaximum {
        name: String,
        location: String,
        max: f64,
        exclusive: bool,
    },
    /// A number was below its minimum bound.
    ExceedsMinimum {
        name: String,
        location: String,
        min: f64,
        exclusive: bool,
    },
    /// A number was not a multiple of the required factor.
    NotMultipleOf {
        name: String,
        location: String,
        factor: f64,
    },
    /// A value was not one of the allowed options.
    ///
    /// The offending value is recorded but deliberately kept out of the
    /// rendered message; only the allowed options are shown.
    EnumFail {
        name: String,
        location: String,
        value: Value,
        allowed: Vec<Value>,
    },
    /// A required field was missing.
    Required { name: String, location: String },
    /// A string was longer than allowed.
    TooLong {
        name: String,
        location: String,
        max: i64,
    },
    /// A string was shorter than required.
    TooShort {
        name: String,
        location: String,
        min: i64,
    },
    /// A string did not match the required pattern.
    FailedPattern {
        name: String,
        location: String,
        pattern: String,
    },
    /// A schema referred to an unknown type name.
    InvalidTypeName { type_name: String },
    /// A multi-valued parameter used an unsupported collection format.
    InvalidCollectionFormat {
        name: String,
        location: String,
        format: String,
    },
    /// An ordered bundle of validation failures reported as one error.
    Composite(CompositeError),
}

impl ValidationError {
    /// Builds an invalid-type error.
    ///
    /// `actual` decides the message suffix; see [`Actual`]. Plain values and
    /// optional values convert implicitly:
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::ValidationError;
    ///
    /// let err = ValidationError::invalid_type("confirmed", "query", "boolean", json!(42));
    /// assert_eq!(err.to_string(), "confirmed in query must be of type boolean: \"42\"");
    /// ```
    pub fn invalid_type(
        name: impl Into<String>,
        location: impl Into<String>,
        type_name: impl Into<String>,
        actual: impl Into<Actual>,
    ) -> Self {
        ValidationError::InvalidType {
            name: name.into(),
            location: location.into(),
            type_name: type_name.into(),
            actual: actual.into(),
        }
    }

    /// Builds a duplicate-items error for a uniqueness violation.
    pub fn duplicate_items(name: impl Into<String>, location: impl Into<String>) -> Self {
        ValidationError::DuplicateItems {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Builds a too-many-items error for a collection exceeding `max` items.
    pub fn too_many_items(name: impl Into<String>, location: impl Into<String>, max: i64) -> Self {
        ValidationError::TooManyItems {
            name: name.into(),
            location: location.into(),
            max,
        }
    }

    /// Builds a too-few-items error for a collection under `min` items.
    pub fn too_few_items(name: impl Into<String>, location: impl Into<String>, min: i64) -> Self {
        ValidationError::TooFewItems {
            name: name.into(),
            location: location.into(),
            min,
        }
    }

    /// Builds an error for a number above its maximum bound.
    ///
    /// With `exclusive` set the bound itself is disallowed and the message
    /// reads "less than"; otherwise "less than or equal to".
    pub fn exceeds_maximum(
        name: impl Into<String>,
        location: impl Into<String>,
        max: f64,
        exclusive: bool,
    ) -> Self {
        ValidationError::ExceedsMaximum {
            name: name.into(),
            location: location.into(),
            max,
            exclusive,
        }
    }

    /// Builds an error for a number below its minimum bound.
    ///
    /// With `exclusive` set the bound itself is disallowed and the message
    /// reads "greater than"; otherwise "greater than or equal to".
    pub fn exceeds_minimum(
        name: impl Into<String>,
        location: impl Into<String>,
        min: f64,
        exclusive: bool,
    ) -> Self {
        ValidationError::ExceedsMinimum {
            name: name.into(),
            location: location.into(),
            min,
            exclusive,
        }
    }

    /// Builds an error for a number that is not a multiple of `factor`.
    pub fn not_multiple_of(
        name: impl Into<String>,
        location: impl Into<String>,
        factor: f64,
    ) -> Self {
        ValidationError::NotMultipleOf {
            name: name.into(),
            location: location.into(),
            factor,
        }
    }

    /// Builds an enum-violation error.
    ///
    /// The message lists the allowed options, space-joined in brackets; the
    /// offending `value` is stored for diagnostics but not rendered.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use verdict::ValidationError;
    ///
    /// let err = ValidationError::enum_fail(
    ///     "something",
    ///     "query",
    ///     json!("yada"),
    ///     vec![json!("hello"), json!("world")],
    /// );
    /// assert_eq!(err.to_string(), "something in query should be one of [hello world]");
    /// ```
    pub fn enum_fail(
        name: impl Into<String>,
        location: impl Into<String>,
        value: Value,
        allowed: Vec<Value>,
    ) -> Self {
        ValidationError::EnumFail {
            name: name.into(),
            location: location.into(),
            value,
            allowed,
        }
    }

    /// Builds a missing-required-field error.
    pub fn required(name: impl Into<String>, location: impl Into<String>) -> Self {
        ValidationError::Required {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Builds an error for a string longer than `max` characters.
    pub fn too_long(name: impl Into<String>, location: impl Into<String>, max: i64) -> Self {
        ValidationError::TooLong {
            name: name.into(),
            location: location.into(),
            max,
        }
    }

    /// Builds an error for a string shorter than `min` characters.
    pub fn too_short(name: impl Into<String>, location: impl Into<String>, min: i64) -> Self {
        ValidationError::TooShort {
            name: name.into(),
            location: location.into(),
            min,
        }
    }

    /// Builds an error for a string that failed a pattern match.
    ///
    /// The pattern is inserted verbatim, single-quoted; it is never compiled
    /// here.
    pub fn failed_pattern(
        name: impl Into<String>,
        location: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        ValidationError::FailedPattern {
            name: name.into(),
            location: location.into(),
            pattern: pattern.into(),
        }
    }

    /// Builds an error for a schema naming an unknown type.
    pub fn invalid_type_name(type_name: impl Into<String>) -> Self {
        ValidationError::InvalidTypeName {
            type_name: type_name.into(),
        }
    }

    /// Builds an error for an unsupported collection format on a parameter.
    pub fn invalid_collection_format(
        name: impl Into<String>,
        location: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidCollectionFormat {
            name: name.into(),
            location: location.into(),
            format: format.into(),
        }
    }

    /// Bundles zero or more failures into a composite error.
    ///
    /// Child order is preserved. See [`CompositeError`] for the enumeration
    /// surface.
    pub fn composite(errors: Vec<ValidationError>) -> Self {
        ValidationError::Composite(CompositeError::new(errors))
    }

    /// Returns the status code for this error. Always 422.
    ///
    /// ```rust
    /// use verdict::ValidationError;
    ///
    /// assert_eq!(ValidationError::required("name", "body").code(), 422);
    /// assert_eq!(ValidationError::composite(vec![]).code(), 422);
    /// ```
    pub fn code(&self) -> u16 {
        VALIDATION_CODE
    }

    /// Returns the field or parameter identifier this error refers to.
    ///
    /// Composite errors carry no identifier of their own. The stored string
    /// may be empty when the engine validated a document-level value.
    pub fn name(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidType { name, .. }
            | ValidationError::DuplicateItems { name, .. }
            | ValidationError::TooManyItems { name, .. }
            | ValidationError::TooFewItems { name, .. }
            | ValidationError::ExceedsMaximum { name, .. }
            | ValidationError::ExceedsMinimum { name, .. }
            | ValidationError::NotMultipleOf { name, .. }
            | ValidationError::EnumFail { name, .. }
            | ValidationError::Required { name, .. }
            | ValidationError::TooLong { name, .. }
            | ValidationError::TooShort { name, .. }
            | ValidationError::FailedPattern { name, .. }
            | ValidationError::InvalidCollectionFormat { name, .. } => Some(name),
            ValidationError::InvalidTypeName { type_name } => Some(type_name),
            ValidationError::Composite(_) => None,
        }
    }

    /// Returns the location qualifier (e.g. `"query"`, `"body"`, `"path"`).
    ///
    /// Type-name and composite errors have no location. The stored string may
    /// be empty when the engine supplied none.
    pub fn location(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidType { location, .. }
            | ValidationError::DuplicateItems { location, .. }
            | ValidationError::TooManyItems { location, .. }
            | ValidationError::TooFewItems { location, .. }
            | ValidationError::ExceedsMaximum { location, .. }
            | ValidationError::ExceedsMinimum { location, .. }
            | ValidationError::NotMultipleOf { location, .. }
            | ValidationError::EnumFail { location, .. }
            | ValidationError::Required { location, .. }
            | ValidationError::TooLong { location, .. }
            | ValidationError::TooShort { location, .. }
            | ValidationError::FailedPattern { location, .. }
            | ValidationError::InvalidCollectionFormat { location, .. } => Some(location),
            ValidationError::InvalidTypeName { .. } | ValidationError::Composite(_) => None,
        }
    }
}

/// Writes the `"name in location "` message prefix.
///
/// Empty parts are dropped so the clause never starts with a stray space.
fn write_subject(f: &mut fmt::Formatter<'_>, name: &str, location: &str) -> fmt::Result {
    match (name.is_empty(), location.is_empty()) {
        (false, false) => write!(f, "{} in {} ", name, location),
        (false, true) => write!(f, "{} ", name),
        (true, false) => write!(f, "in {} ", location),
        (true, true) => Ok(()),
    }
}

/// Writes a JSON value without quoting strings.
fn write_bare(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        other => write!(f, "{}", other),
    }
}

/// Writes a JSON value quoted, escaping string contents.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write!(f, "{:?}", s),
        other => write!(f, "\"{}\"", other),
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidType {
                name,
                location,
                type_name,
                actual,
            } => {
                write_subject(f, name, location)?;
                write!(f, "must be of type {}", type_name)?;
                match actual {
                    Actual::Absent => Ok(()),
                    Actual::Value(value) => {
                        f.write_str(": ")?;
                        write_quoted(f, value)
                    }
                    Actual::Cause(message) => write!(f, ", because: {}", message),
                }
            }
            ValidationError::DuplicateItems { name, location } => {
                write_subject(f, name, location)?;
                f.write_str("shouldn't contain duplicates")
            }
            ValidationError::TooManyItems {
                name,
                location,
                max,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should have at most {} items", max)
            }
            ValidationError::TooFewItems {
                name,
                location,
                min,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should have at least {} items", min)
            }
            ValidationError::ExceedsMaximum {
                name,
                location,
                max,
                exclusive,
            } => {
                write_subject(f, name, location)?;
                if *exclusive {
                    write!(f, "should be less than {}", max)
                } else {
                    write!(f, "should be less than or equal to {}", max)
                }
            }
            ValidationError::ExceedsMinimum {
                name,
                location,
                min,
                exclusive,
            } => {
                write_subject(f, name, location)?;
                if *exclusive {
                    write!(f, "should be greater than {}", min)
                } else {
                    write!(f, "should be greater than or equal to {}", min)
                }
            }
            ValidationError::NotMultipleOf {
                name,
                location,
                factor,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should be a multiple of {}", factor)
            }
            ValidationError::EnumFail {
                name,
                location,
                allowed,
                ..
            } => {
                write_subject(f, name, location)?;
                f.write_str("should be one of [")?;
                for (i, option) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write_bare(f, option)?;
                }
                f.write_str("]")
            }
            ValidationError::Required { name, location } => {
                write_subject(f, name, location)?;
                f.write_str("is required")
            }
            ValidationError::TooLong {
                name,
                location,
                max,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should be at most {} chars long", max)
            }
            ValidationError::TooShort {
                name,
                location,
                min,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should be at least {} chars long", min)
            }
            ValidationError::FailedPattern {
                name,
                location,
                pattern,
            } => {
                write_subject(f, name, location)?;
                write!(f, "should match '{}'", pattern)
            }
            ValidationError::InvalidTypeName { type_name } => {
                write!(f, "{} is an invalid type name", type_name)
            }
            ValidationError::InvalidCollectionFormat {
                name,
                location,
                format,
            } => {
                write!(
                    f,
                    "the collection format {:?} is not supported for the {} param {:?}",
                    format, location, name
                )
            }
            ValidationError::Composite(composite) => Display::fmt(composite, f),
        }
    }
}

impl std::error::Error for ValidationError {}

// All payloads are owned data (String, Value, Vec), so the taxonomy stays
// shareable across threads. The assertions keep that true if fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
