//! Cost-analysis diagnostics
//!
//! Violations are reports, not control flow: they append to the validation
//! context's sink and never abort traversal, so one pass over a document
//! surfaces every problem. The host decides whether any reported violation
//! rejects the query.

use std::fmt;

/// Severity levels for cost violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query should be rejected by the host
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Cost-analysis violation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostErrorCode {
    /// Configured complexity range has min above max
    InvalidComplexityRange,
    /// A declared complexity falls outside the configured range
    ComplexityOutOfRange,
    /// Accumulated cost exceeds the configured maximum
    CostLimitExceeded,
}

impl CostErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            CostErrorCode::InvalidComplexityRange => "COST_RANGE_INVALID",
            CostErrorCode::ComplexityOutOfRange => "COST_COMPLEXITY_OUT_OF_RANGE",
            CostErrorCode::CostLimitExceeded => "COST_LIMIT_EXCEEDED",
        }
    }

    /// Returns the severity level (all cost violations reject)
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for CostErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A reported cost violation
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    code: CostErrorCode,
    message: String,
    operation: Option<String>,
}

impl Violation {
    /// Creates an invalid-complexity-range configuration violation
    pub fn invalid_complexity_range() -> Self {
        Self {
            code: CostErrorCode::InvalidComplexityRange,
            message: "Invalid minimum and maximum complexity".into(),
            operation: None,
        }
    }

    /// Creates a per-field complexity-range violation
    pub fn complexity_out_of_range(min: i64, max: i64) -> Self {
        Self {
            code: CostErrorCode::ComplexityOutOfRange,
            message: format!("The complexity argument must be between {} and {}", min, max),
            operation: None,
        }
    }

    /// Creates a budget-exceeded violation carrying both literal values
    pub fn cost_limit_exceeded(maximum: i64, actual: i64) -> Self {
        Self {
            code: CostErrorCode::CostLimitExceeded,
            message: format!(
                "The query exceeds the maximum cost of {}. Actual cost is {}",
                maximum, actual
            ),
            operation: None,
        }
    }

    /// Attaches the offending operation's name
    pub fn in_operation(mut self, name: Option<&str>) -> Self {
        self.operation = name.map(str::to_string);
        self
    }

    /// Returns the violation code
    pub fn code(&self) -> CostErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending operation's name if known
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(operation) = &self.operation {
            write!(f, " (operation '{}')", operation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            CostErrorCode::InvalidComplexityRange.code(),
            "COST_RANGE_INVALID"
        );
        assert_eq!(
            CostErrorCode::ComplexityOutOfRange.code(),
            "COST_COMPLEXITY_OUT_OF_RANGE"
        );
        assert_eq!(CostErrorCode::CostLimitExceeded.code(), "COST_LIMIT_EXCEEDED");
    }

    #[test]
    fn test_budget_message_embeds_literals() {
        let violation = Violation::cost_limit_exceeded(1, 8);
        assert_eq!(
            violation.message(),
            "The query exceeds the maximum cost of 1. Actual cost is 8"
        );
    }

    #[test]
    fn test_range_message_embeds_bounds() {
        let violation = Violation::complexity_out_of_range(1, 3);
        assert_eq!(
            violation.message(),
            "The complexity argument must be between 1 and 3"
        );
    }

    #[test]
    fn test_display() {
        let violation = Violation::cost_limit_exceeded(10, 25).in_operation(Some("GetUsers"));
        let display = format!("{}", violation);
        assert!(display.contains("REJECT"));
        assert!(display.contains("COST_LIMIT_EXCEEDED"));
        assert!(display.contains("GetUsers"));
    }
}
