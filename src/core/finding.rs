//! Findings recorded by checks.
//!
//! A finding is immutable once created. Codes are stable identifiers that
//! users grep for in CI logs, so they are kept as plain strings.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Stable finding codes.
pub mod codes {
    pub const KERNEL_MISSING: &str = "ERR_000";
    pub const MODULE_NOT_FOUND: &str = "ERR_002";
    pub const NESTED_PACKAGE_DIR: &str = "ERR_003";
    pub const CONFLICT_COPY: &str = "ERR_004";
    pub const DUPLICATE_CONFIG: &str = "ERR_005";
    pub const ANTI_PATTERN: &str = "ANTI_PATTERN";
    pub const DESIGN_SYSTEM: &str = "DESIGN_SYSTEM";
    pub const BUILD_FAILED: &str = "BUILD_FAILED";
    pub const LINT_ERRORS: &str = "LINT_ERRORS";
    pub const TYPECHECK_FAILED: &str = "TYPECHECK_FAILED";
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Finding {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
