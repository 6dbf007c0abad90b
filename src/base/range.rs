use std::fmt;

/// Inclusive bound on the value of an integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check if a value falls within this range (both ends included)
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// A range whose minimum exceeds its maximum accepts nothing.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = IntRange::new(0, 100);
        assert!(range.contains(0));
        assert!(range.contains(100));
        assert!(range.contains(42));
        assert!(!range.contains(-1));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_negative_bounds() {
        let range = IntRange::new(-40, -10);
        assert!(range.contains(-40));
        assert!(!range.contains(-41));
        assert_eq!(range.to_string(), "-40--10");
    }

    #[test]
    fn test_inverted() {
        assert!(IntRange::new(5, 1).is_inverted());
        assert!(!IntRange::new(1, 1).is_inverted());
    }
}
