//! Boundary validation for catalog data and filters.
//!
//! The generator assumes well-typed input; integrity checking belongs
//! to the collaborator that fetched the catalog or collected the filter
//! form. This module is that check: run it at the boundary, before
//! handing data to [`crate::generator`]. Detects:
//! - Duplicate course and section codes
//! - Sections filed under the wrong course
//! - Malformed HHMM times and inverted slot ranges
//! - Filter rules that can never pass
//!
//! All detected issues are reported at once, not just the first.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{CourseCandidates, DayRule, Filter, TimeSlot};

/// Validation outcome: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Issue category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending entity.
    pub message: String,
}

/// Categories of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Two candidate sets share a course code.
    #[error("duplicate course")]
    DuplicateCourse,
    /// Two sections share a registration code.
    #[error("duplicate section code")]
    DuplicateSection,
    /// A section's course code disagrees with its candidate set.
    #[error("course code mismatch")]
    CourseMismatch,
    /// A slot time is not a valid HHMM value.
    #[error("invalid time")]
    InvalidTime,
    /// A slot or filter window ends before it starts.
    #[error("inverted time range")]
    InvertedRange,
    /// A filter rule no section could ever satisfy.
    #[error("unsatisfiable rule")]
    UnsatisfiableRule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog of candidate sets.
///
/// Checks course-code uniqueness, section-code uniqueness across the
/// whole catalog, section/course agreement, and slot time sanity.
pub fn validate_catalog(courses: &[CourseCandidates]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_codes = HashSet::new();
    let mut section_codes = HashSet::new();

    for course in courses {
        if !course_codes.insert(course.course_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("course '{}' appears twice", course.course_code),
            ));
        }

        for section in &course.sections {
            if !section_codes.insert(section.code) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSection,
                    format!("section code {} appears twice", section.code),
                ));
            }

            if section.course_code != course.course_code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CourseMismatch,
                    format!(
                        "section {} claims course '{}' but is filed under '{}'",
                        section.code, section.course_code, course.course_code
                    ),
                ));
            }

            for slot in &section.slots {
                check_slot(section.code, slot, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_slot(section_code: u32, slot: &TimeSlot, errors: &mut Vec<ValidationError>) {
    for time in [slot.start, slot.end] {
        if time > 2400 || time % 100 >= 60 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTime,
                format!("section {section_code} has non-HHMM time {time}"),
            ));
        }
    }
    if slot.start > slot.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedRange,
            format!(
                "section {} slot ends ({}) before it starts ({})",
                section_code, slot.end, slot.start
            ),
        ));
    }
}

/// Validates a filter's general rule and every override.
pub fn validate_filter(filter: &Filter) -> ValidationResult {
    let mut errors = Vec::new();

    check_rule("general", &filter.general, &mut errors);
    for (day, rule) in &filter.overrides {
        check_rule(&format!("{day:?}"), rule, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_rule(name: &str, rule: &DayRule, errors: &mut Vec<ValidationError>) {
    if rule.window_start >= rule.window_end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedRange,
            format!("{name} rule window starts at or after its end"),
        ));
    }
    if rule.max_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsatisfiableRule,
            format!("{name} rule allows zero sections per day"),
        ));
    }
    if rule.max_consecutive == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsatisfiableRule,
            format!("{name} rule allows zero consecutive sections"),
        ));
    }
    if rule.modalities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsatisfiableRule,
            format!("{name} rule accepts no modality"),
        ));
    }
}
