//! Catalog validation issues.
//!
//! Registry construction distinguishes fatal configuration errors (cycles,
//! duplicates — returned as [`DomainError`](crate::core::error::DomainError))
//! from non-fatal issues reported here. The domain crate never logs;
//! callers decide how to surface warnings.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as declared.
    Warning,
}

/// Identifies a specific catalog issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A dependency name matches no sub-parameter in the catalog.
    /// The planner treats the dependency as absent.
    DanglingDependency,
    /// A specialist lists the same dependency name more than once.
    DuplicateDependency,
}

/// A detected issue in the specialist catalog.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn dangling(specialist_id: &str, dependency: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::DanglingDependency,
            message: format!(
                "specialist {specialist_id} depends on \"{dependency}\", which matches no sub-parameter"
            ),
        }
    }

    pub fn duplicate_dependency(specialist_id: &str, dependency: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::DuplicateDependency,
            message: format!(
                "specialist {specialist_id} lists dependency \"{dependency}\" more than once"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_issue_message() {
        let issue = ConfigIssue::dangling("s042_operational_risks", "Operational Viability");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.code, ConfigIssueCode::DanglingDependency);
        assert!(issue.message.contains("Operational Viability"));
        assert!(issue.message.contains("s042_operational_risks"));
    }
}
