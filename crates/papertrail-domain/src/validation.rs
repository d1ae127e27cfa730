//! Validation for manually entered citation records

use super::CitationRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DOI_SHAPE: Regex = Regex::new(r"^10\.\d{4,}/\S+$").unwrap();
}

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn new(field: &str, message: &str, severity: ValidationSeverity) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

/// Validate a manual entry before it is stored.
///
/// Only a missing title blocks the entry; everything else is advisory,
/// since formatters render whatever is present.
pub fn validate_manual_entry(record: &CitationRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if record.title().is_none() {
        errors.push(ValidationError::new(
            "title",
            "Please enter at least a title",
            ValidationSeverity::Error,
        ));
    }

    if record.author_list().is_empty() {
        errors.push(ValidationError::new(
            "authors",
            "Authors are recommended",
            ValidationSeverity::Warning,
        ));
    }

    if record.year().is_none() {
        errors.push(ValidationError::new(
            "year",
            "Year is recommended",
            ValidationSeverity::Warning,
        ));
    }

    if let Some(doi) = record.doi() {
        if !DOI_SHAPE.is_match(doi) {
            errors.push(ValidationError::new(
                "doi",
                "DOI should look like 10.NNNN/suffix",
                ValidationSeverity::Warning,
            ));
        }
    }

    errors
}

/// Whether any of the errors blocks saving
pub fn has_blocking_errors(errors: &[ValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_is_an_error() {
        let record = CitationRecord::manual("", "Ada Lovelace", "1843", "", "");
        let errors = validate_manual_entry(&record);
        assert!(has_blocking_errors(&errors));
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_complete_entry_is_clean() {
        let record = CitationRecord::manual(
            "Notes on the Analytical Engine",
            "Ada Lovelace",
            "1843",
            "Scientific Memoirs",
            "10.1000/analytical",
        );
        assert!(validate_manual_entry(&record).is_empty());
    }

    #[test]
    fn test_odd_doi_is_only_a_warning() {
        let record = CitationRecord::manual("Title", "A B", "2020", "", "doi:abc");
        let errors = validate_manual_entry(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "doi");
        assert!(!has_blocking_errors(&errors));
    }
}
