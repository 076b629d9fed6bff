//! Append-only accumulator for one pipeline run.

use crate::core::finding::{Finding, Severity};
use serde::Serialize;

/// Ordered errors and warnings recorded during a single run.
///
/// Owned by exactly one run. Findings are only ever appended, so the
/// insertion order is the order checks produced them.
#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationState {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn error(&mut self, code: &str, message: impl Into<String>) {
        self.record(Finding::error(code, message));
    }

    pub fn warn(&mut self, code: &str, message: impl Into<String>) {
        self.record(Finding::warning(code, message));
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Total findings recorded so far.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::finding::codes;

    #[test]
    fn test_record_routes_by_severity() {
        let mut state = ValidationState::new();
        state.warn(codes::DUPLICATE_CONFIG, "dup");
        state.error(codes::KERNEL_MISSING, "missing");
        state.error(codes::CONFLICT_COPY, "copy");

        assert_eq!(state.errors().len(), 2);
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(state.errors()[0].code, codes::KERNEL_MISSING);
        assert_eq!(state.errors()[1].code, codes::CONFLICT_COPY);
        assert!(state.has_errors());
        assert!(!state.is_clean());
    }

    #[test]
    fn test_empty_state_is_clean() {
        let state = ValidationState::new();
        assert!(state.is_clean());
        assert!(!state.has_errors());
        assert!(state.is_empty());
    }
}
