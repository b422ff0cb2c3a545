#![forbid(unsafe_code)]

//! Collected results of a check run, ready for formatting

use crate::validator::ValidationError;

/// A validation error together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedViolation {
    /// File (or `-` for stdin) the sentence was read from
    pub file: String,

    pub error: ValidationError,

    /// Offending text
    pub snippet: String,
}

/// Everything a formatter needs to render a check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Violations in input order: file, line, catalog order, position
    pub violations: Vec<ReportedViolation>,
    pub files_checked: usize,
    pub sentences_checked: usize,
    pub rules_active: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleId;

    #[test]
    fn test_passed() {
        let mut report = CheckReport::default();
        assert!(report.passed());

        report.violations.push(ReportedViolation {
            file: "doc.txt".to_string(),
            error: ValidationError {
                rule_id: RuleId::new("frequent-errors-fusei").unwrap(),
                message: "msg".to_string(),
                line: 1,
                start: 5,
                end: 7,
            },
            snippet: "不正".to_string(),
        });
        assert!(!report.passed());
    }
}
