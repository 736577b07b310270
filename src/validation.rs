//! Input validation for distribution.
//!
//! Checks roster and catalog integrity before distribution. Detects:
//! - Non-positive class counts
//! - Duplicate student or attribute IDs
//! - Attribute references that resolve to nothing
//!
//! A dangling attribute reference is not rejected by distribution or export
//! (label resolution just omits it), but it usually indicates an editing bug
//! in the caller, so it is reported here.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::models::{AttributeCatalog, Student};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The class count is zero or negative.
    InvalidClassCount,
    /// Two entities share the same ID.
    DuplicateId,
    /// A student references an attribute missing from the catalog.
    UnknownAttributeReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Converts a raw class count into the non-zero count distribution requires.
///
/// This is the caller-side gate the distributor contract demands: the core
/// takes `NonZeroUsize` and never sees an invalid count.
pub fn checked_class_count(value: i64) -> Result<NonZeroUsize, ValidationError> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidClassCount,
                format!("class count must be a positive integer, got {value}"),
            )
        })
}

/// Validates the input data for a distribution.
///
/// Checks:
/// 1. Class count is positive
/// 2. No duplicate attribute IDs
/// 3. No duplicate student IDs
/// 4. All attribute references resolve in the catalog
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    students: &[Student],
    catalog: &AttributeCatalog,
    class_count: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = checked_class_count(class_count) {
        errors.push(e);
    }

    // Collect attribute IDs
    let mut attribute_ids = HashSet::new();
    for attribute in catalog.iter() {
        if !attribute_ids.insert(attribute.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate attribute ID: {}", attribute.id),
            ));
        }
    }

    // Collect student IDs
    let mut student_ids = HashSet::new();
    for student in students {
        if !student_ids.insert(student.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", student.id),
            ));
        }
    }

    // Check attribute references
    for student in students {
        for id in student.difficulties.iter().chain(student.helpers.iter()) {
            if !attribute_ids.contains(id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAttributeReference,
                    format!("Student '{}' references unknown attribute '{id}'", student.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    fn sample_catalog() -> AttributeCatalog {
        AttributeCatalog::new()
            .with_attribute(Attribute::difficulty("d1", "학습부진"))
            .with_attribute(Attribute::helper("h1", "리더십"))
    }

    fn sample_students() -> Vec<Student> {
        vec![
            Student::new("s1").with_name("김철수").with_difficulty("d1"),
            Student::new("s2").with_name("이영희").with_helper("h1"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_students(), &sample_catalog(), 3).is_ok());
    }

    #[test]
    fn test_checked_class_count() {
        assert_eq!(checked_class_count(3).unwrap().get(), 3);
        assert!(checked_class_count(0).is_err());
        assert!(checked_class_count(-2).is_err());
    }

    #[test]
    fn test_zero_class_count() {
        let errors = validate_input(&sample_students(), &sample_catalog(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidClassCount));
    }

    #[test]
    fn test_duplicate_student_id() {
        let students = vec![Student::new("s1"), Student::new("s1")];
        let errors = validate_input(&students, &sample_catalog(), 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("student")));
    }

    #[test]
    fn test_duplicate_attribute_id() {
        let catalog = sample_catalog().with_attribute(Attribute::helper("d1", "중복"));
        let errors = validate_input(&sample_students(), &catalog, 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("attribute")));
    }

    #[test]
    fn test_unknown_attribute_reference() {
        let students = vec![Student::new("s1").with_difficulty("gone")];
        let errors = validate_input(&students, &sample_catalog(), 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAttributeReference));
    }

    #[test]
    fn test_multiple_errors() {
        let students = vec![
            Student::new("s1").with_helper("missing"),
            Student::new("s1"),
        ];
        let errors = validate_input(&students, &sample_catalog(), -1).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
