//! The composite error bundling many validation failures.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use super::validation::ValidationError;

/// An ordered bundle of validation failures reported as a single error.
///
/// A validation pass that finds several violations should surface one
/// `CompositeError` holding all of them rather than raising one failure at a
/// time. The composite's own message is always the fixed literal
/// `"validation failure list"`; callers that want detail must enumerate the
/// children, in the order they were supplied.
///
/// A composite may be empty. Once built it cannot be mutated; combining two
/// composites with [`Semigroup::combine`] consumes both and yields a new
/// value with the children concatenated in order.
///
/// # Example
///
/// ```rust
/// use verdict::{CompositeError, ValidationError};
///
/// let composite = CompositeError::new(vec![
///     ValidationError::required("name", "body"),
///     ValidationError::too_short("password", "body", 8),
/// ]);
///
/// assert_eq!(composite.code(), 422);
/// assert_eq!(composite.to_string(), "validation failure list");
/// assert_eq!(composite.len(), 2);
///
/// let messages: Vec<String> = composite.iter().map(|e| e.to_string()).collect();
/// assert_eq!(messages[0], "name in body is required");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeError {
    errors: Vec<ValidationError>,
}

impl CompositeError {
    /// Creates a composite from the given children, preserving their order.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Creates a composite containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Returns the status code for this error. Always 422, children or not.
    pub fn code(&self) -> u16 {
        422
    }

    /// Returns the number of contained errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the composite holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first contained error, if any.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns an iterator over the contained errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Returns the contained errors as a slice.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts this composite into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Returns all children referring to the given field or parameter name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{CompositeError, ValidationError};
    ///
    /// let composite = CompositeError::new(vec![
    ///     ValidationError::required("name", "body"),
    ///     ValidationError::too_short("name", "body", 1),
    ///     ValidationError::required("email", "body"),
    /// ]);
    ///
    /// assert_eq!(composite.with_name("name").len(), 2);
    /// assert_eq!(composite.with_name("email").len(), 1);
    /// ```
    pub fn with_name(&self, name: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.name() == Some(name))
            .collect()
    }

    /// Returns all children with the given location qualifier.
    pub fn in_location(&self, location: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.location() == Some(location))
            .collect()
    }
}

impl From<Vec<ValidationError>> for CompositeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl From<CompositeError> for ValidationError {
    fn from(composite: CompositeError) -> Self {
        ValidationError::Composite(composite)
    }
}

impl FromIterator<ValidationError> for CompositeError {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Errors from separate validations concatenate in order, letting
/// `Validation::and` accumulate every failure from one pass.
impl Semigroup for CompositeError {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed summary marker; detail lives in the children.
        f.write_str("validation failure list")
    }
}

impl std::error::Error for CompositeError {}

impl IntoIterator for CompositeError {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompositeError {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// CompositeError only contains ValidationError, which is Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CompositeError>();
    assert_sync::<CompositeError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_composite() {
        let composite = CompositeError::new(vec![]);
        assert_eq!(composite.code(), 422);
        assert_eq!(composite.to_string(), "validation failure list");
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);
        assert!(composite.first().is_none());
    }

    #[test]
    fn test_message_ignores_children() {
        let composite = CompositeError::new(vec![
            ValidationError::required("name", "body"),
            ValidationError::duplicate_items("tags", "body"),
        ]);
        assert_eq!(composite.to_string(), "validation failure list");
    }

    #[test]
    fn test_children_preserve_order() {
        let composite = CompositeError::new(vec![
            ValidationError::required("a", "query"),
            ValidationError::too_long("b", "query", 5),
            ValidationError::duplicate_items("c", "query"),
        ]);

        assert_eq!(composite.len(), 3);
        let names: Vec<_> = composite.iter().filter_map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single() {
        let composite = CompositeError::single(ValidationError::required("name", "body"));
        assert_eq!(composite.len(), 1);
        assert_eq!(
            composite.first().map(|e| e.to_string()),
            Some("name in body is required".to_string())
        );
    }

    #[test]
    fn test_combine_concatenates_in_order() {
        let left = CompositeError::single(ValidationError::required("a", "query"));
        let right = CompositeError::new(vec![
            ValidationError::required("b", "query"),
            ValidationError::required("c", "query"),
        ]);

        let combined = left.combine(right);
        let names: Vec<_> = combined.iter().filter_map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_combine_associativity() {
        let e1 = CompositeError::single(ValidationError::required("1", "query"));
        let e2 = CompositeError::single(ValidationError::required("2", "query"));
        let e3 = CompositeError::single(ValidationError::required("3", "query"));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));
        assert_eq!(left, right);
    }

    #[test]
    fn test_with_name_and_in_location() {
        let composite = CompositeError::new(vec![
            ValidationError::required("name", "body"),
            ValidationError::too_short("name", "body", 1),
            ValidationError::required("id", "path"),
        ]);

        assert_eq!(composite.with_name("name").len(), 2);
        assert_eq!(composite.with_name("id").len(), 1);
        assert_eq!(composite.with_name("missing").len(), 0);

        assert_eq!(composite.in_location("body").len(), 2);
        assert_eq!(composite.in_location("path").len(), 1);
    }

    #[test]
    fn test_composite_nests_as_validation_error() {
        let inner = CompositeError::single(ValidationError::required("name", "body"));
        let outer = CompositeError::new(vec![
            ValidationError::from(inner),
            ValidationError::required("email", "body"),
        ]);

        assert_eq!(outer.len(), 2);
        // The nested composite renders its own fixed message.
        assert_eq!(
            outer.first().map(|e| e.to_string()),
            Some("validation failure list".to_string())
        );
    }

    #[test]
    fn test_from_iterator() {
        let composite: CompositeError = (0..3)
            .map(|i| ValidationError::too_many_items(format!("f{}", i), "query", i))
            .collect();
        assert_eq!(composite.len(), 3);
    }

    #[test]
    fn test_into_iterator_both_forms() {
        let composite = CompositeError::new(vec![
            ValidationError::required("a", "query"),
            ValidationError::required("b", "query"),
        ]);

        let borrowed: Vec<&ValidationError> = (&composite).into_iter().collect();
        assert_eq!(borrowed.len(), 2);

        let owned: Vec<ValidationError> = composite.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
