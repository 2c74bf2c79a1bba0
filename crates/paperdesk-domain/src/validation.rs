//! Validation for paper records

use serde::{Deserialize, Serialize};

use crate::record::PaperRecord;
use crate::tags::TagVocabulary;

/// Severity of a validation issue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Validate a record against the tag vocabulary and return issues.
///
/// These are the offline checks only; URL reachability is the concern of
/// an external collaborator.
pub fn validate_record(record: &PaperRecord, vocabulary: &TagVocabulary) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if record.id.trim().is_empty() {
        issues.push(ValidationIssue::error("id", "Record is missing an id"));
        return issues;
    }

    if record.tags.is_empty() {
        issues.push(ValidationIssue::error("tags", "No tags provided"));
    } else {
        let invalid: Vec<&str> = record
            .tags
            .iter()
            .filter(|t| !vocabulary.contains(t))
            .map(String::as_str)
            .collect();
        if !invalid.is_empty() {
            issues.push(ValidationIssue::error(
                "tags",
                format!("Invalid tags: {}", invalid.join(", ")),
            ));
        }
        if record.tags.iter().all(|t| t.starts_with("Year ")) {
            issues.push(ValidationIssue::error(
                "tags",
                "Must have at least one non-Year tag",
            ));
        }
    }

    if record.paper.as_deref().map_or(true, |p| p.trim().is_empty()) {
        issues.push(ValidationIssue::error("paper", "Paper URL is required"));
    }

    if record.title.is_none() {
        issues.push(ValidationIssue::warning("title", "Title is recommended"));
    }
    if record.authors.is_none() {
        issues.push(ValidationIssue::warning(
            "authors",
            "Authors are recommended",
        ));
    }

    issues
}
