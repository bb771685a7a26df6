use std::error::Error as StdError;
use std::fmt::{self, Display};

/// A single field-level violation found during validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Issue {
    /// Path to the offending field.
    pub path: String,
    /// Why the field was rejected.
    pub reason: String,
}

impl Issue {
    /// Creates a new issue.
    #[inline]
    pub fn new<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Describes a structured-data shape violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Creates a new error from a message and its field-level issues.
    #[inline]
    pub fn new(message: impl Into<String>, issues: Vec<Issue>) -> Self {
        Self {
            message: message.into(),
            issues,
        }
    }

    /// Returns the top-level message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field-level issues.
    #[inline]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        let mut sep = ": ";
        for issue in &self.issues {
            if issue.path.is_empty() {
                write!(f, "{sep}{}", issue.reason)?;
            } else {
                write!(f, "{sep}{}: {}", issue.path, issue.reason)?;
            }
            sep = "; ";
        }
        Ok(())
    }
}

impl StdError for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_issues() {
        let err = ValidationError::new(
            "validation failed in calculator input",
            vec![
                Issue::new("a", "expected a number"),
                Issue::new("operation", "must be one of: add, subtract"),
            ],
        );
        assert_eq!(
            format!("{err}"),
            "validation failed in calculator input: \
             a: expected a number; operation: must be one of: add, subtract"
        );
    }
}
