//! Strength classification types.

use std::fmt;

/// Discrete strength classification, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl StrengthLevel {
    /// Maps a clamped raw score (0..=8) to a level.
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => StrengthLevel::Excellent,
            5..=6 => StrengthLevel::Strong,
            3..=4 => StrengthLevel::Medium,
            1..=2 => StrengthLevel::Weak,
            0 => StrengthLevel::VeryWeak,
        }
    }

    /// Progress bar value (0-100) for a non-empty password at this level.
    pub fn value(self) -> u8 {
        match self {
            StrengthLevel::VeryWeak => 10,
            StrengthLevel::Weak => 25,
            StrengthLevel::Medium => 50,
            StrengthLevel::Strong => 75,
            StrengthLevel::Excellent => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    /// Progress bar value (0-100).
    pub value: u8,
    /// Raw score after the short-password cap, 0..=8.
    pub score: u8,
    pub label: String,
    /// Advisory hints; they never change `level` or `value`.
    pub reasons: Vec<String>,
}

impl StrengthResult {
    /// Result for the empty password, distinct from a non-empty `VeryWeak`.
    pub fn empty() -> Self {
        Self {
            level: StrengthLevel::VeryWeak,
            value: 0,
            score: 0,
            label: "Strength: -".to_string(),
            reasons: vec!["Password is empty".to_string()],
        }
    }

    pub fn from_score(score: u8, reasons: Vec<String>) -> Self {
        let level = StrengthLevel::from_score(score);
        Self {
            level,
            value: level.value(),
            score,
            label: format!("Strength: {}", level),
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_score_table() {
        let expected = [
            (0, StrengthLevel::VeryWeak),
            (1, StrengthLevel::Weak),
            (2, StrengthLevel::Weak),
            (3, StrengthLevel::Medium),
            (4, StrengthLevel::Medium),
            (5, StrengthLevel::Strong),
            (6, StrengthLevel::Strong),
            (7, StrengthLevel::Excellent),
            (8, StrengthLevel::Excellent),
        ];
        for (score, level) in expected {
            assert_eq!(StrengthLevel::from_score(score), level, "score {}", score);
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(StrengthLevel::VeryWeak < StrengthLevel::Weak);
        assert!(StrengthLevel::Strong < StrengthLevel::Excellent);
    }

    #[test]
    fn test_display() {
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLevel::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn test_empty_result() {
        let result = StrengthResult::empty();
        assert_eq!(result.level, StrengthLevel::VeryWeak);
        assert_eq!(result.value, 0);
        assert_eq!(result.label, "Strength: -");
    }

    #[test]
    fn test_result_from_score() {
        let result = StrengthResult::from_score(5, Vec::new());
        assert_eq!(result.level, StrengthLevel::Strong);
        assert_eq!(result.value, 75);
        assert_eq!(result.label, "Strength: Strong");

        let result = StrengthResult::from_score(0, Vec::new());
        assert_eq!(result.value, 10);
        assert_eq!(result.label, "Strength: Very Weak");
    }
}
