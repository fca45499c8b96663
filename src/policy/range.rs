//! Valid bounds for declared complexity values

use serde::Deserialize;

/// Inclusive `[min, max]` bound on declared base complexity.
///
/// A zero/zero pair disables the check entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComplexityRange {
    /// Lower bound; 0 together with `max == 0` disables the range
    pub min: i64,
    /// Upper bound; 0 together with `min == 0` disables the range
    pub max: i64,
}

impl ComplexityRange {
    /// Creates a bounded range
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Creates the disabled range
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns true when the range performs no checking
    pub fn is_disabled(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Returns true for a bounded range with min above max
    pub fn is_inverted(&self) -> bool {
        self.min != 0 && self.max != 0 && self.min > self.max
    }

    /// Returns true when a declared complexity falls outside the bounds
    pub fn outside(&self, value: i64) -> bool {
        if self.is_disabled() {
            return false;
        }
        value < self.min || value > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_range_accepts_everything() {
        let range = ComplexityRange::disabled();
        assert!(!range.outside(0));
        assert!(!range.outside(-5));
        assert!(!range.outside(1_000_000));
    }

    #[test]
    fn test_bounded_range() {
        let range = ComplexityRange::new(1, 3);
        assert!(range.outside(0));
        assert!(!range.outside(1));
        assert!(!range.outside(3));
        assert!(range.outside(4));
        assert!(range.outside(12));
    }

    #[test]
    fn test_inverted_detection() {
        assert!(ComplexityRange::new(100, 1).is_inverted());
        assert!(!ComplexityRange::new(1, 100).is_inverted());
        assert!(!ComplexityRange::disabled().is_inverted());
        // half-open pairs are not "inverted", they are just odd configs
        assert!(!ComplexityRange::new(5, 0).is_inverted());
    }

    #[test]
    fn test_inverted_range_still_checks() {
        // degraded mode: every value is outside an inverted range
        let range = ComplexityRange::new(100, 1);
        assert!(range.outside(12));
        assert!(range.outside(50));
    }

    #[test]
    fn test_deserialize() {
        let range: ComplexityRange = serde_json::from_str(r#"{"min": 1, "max": 3}"#).unwrap();
        assert_eq!(range, ComplexityRange::new(1, 3));

        let range: ComplexityRange = serde_json::from_str("{}").unwrap();
        assert!(range.is_disabled());
    }
}
