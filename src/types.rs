//! Assessment types produced by the password policy evaluator.

use std::fmt;

/// Names of the password rules, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    Length,
    Lowercase,
    Uppercase,
    Number,
    Special,
}

impl RuleName {
    /// All rules in display order.
    pub const ALL: [RuleName; 5] = [
        RuleName::Length,
        RuleName::Lowercase,
        RuleName::Uppercase,
        RuleName::Number,
        RuleName::Special,
    ];

    /// Machine name of the rule (`length`, `lowercase`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Length => "length",
            RuleName::Lowercase => "lowercase",
            RuleName::Uppercase => "uppercase",
            RuleName::Number => "number",
            RuleName::Special => "special",
        }
    }

    /// Short label shown next to the rule in a checklist.
    pub fn label(self) -> &'static str {
        match self {
            RuleName::Length => "8+ chars",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail outcome of every rule, kept in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRuleResult {
    entries: [(RuleName, bool); 5],
}

impl PasswordRuleResult {
    pub(crate) fn new(entries: [(RuleName, bool); 5]) -> Self {
        Self { entries }
    }

    /// Whether `rule` passed.
    pub fn passed(&self, rule: RuleName) -> bool {
        self.entries
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, ok)| *ok)
            .unwrap_or(false)
    }

    /// Iterates `(rule, passed)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleName, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of passing rules.
    pub fn passed_count(&self) -> u8 {
        self.entries.iter().filter(|(_, ok)| *ok).count() as u8
    }

    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|(_, ok)| *ok)
    }
}

/// Categorical strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Step function over the score: 0-2 weak, 3-4 medium, 5 strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full assessment of a candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    rules: PasswordRuleResult,
    score: u8,
    strength: PasswordStrength,
}

impl PasswordAssessment {
    /// Builds an assessment whose score and strength follow from `rules`.
    pub(crate) fn from_rules(rules: PasswordRuleResult) -> Self {
        let score = rules.passed_count();
        Self {
            rules,
            score,
            strength: PasswordStrength::from_score(score),
        }
    }

    /// Per-rule results in display order.
    pub fn rules(&self) -> &PasswordRuleResult {
        &self.rules
    }

    /// Number of passing rules, 0 to 5.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Filled segments of a five-segment strength meter.
    pub fn meter_segments(&self) -> u8 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        let expected = [
            (0, PasswordStrength::Weak),
            (1, PasswordStrength::Weak),
            (2, PasswordStrength::Weak),
            (3, PasswordStrength::Medium),
            (4, PasswordStrength::Medium),
            (5, PasswordStrength::Strong),
        ];
        for (score, strength) in expected {
            assert_eq!(PasswordStrength::from_score(score), strength, "score {}", score);
        }
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(RuleName::Length.label(), "8+ chars");
        assert_eq!(RuleName::Special.label(), "special");
        assert_eq!(RuleName::Number.to_string(), "number");
    }

    #[test]
    fn test_rule_result_lookup_and_count() {
        let rules = PasswordRuleResult::new([
            (RuleName::Length, true),
            (RuleName::Lowercase, true),
            (RuleName::Uppercase, false),
            (RuleName::Number, false),
            (RuleName::Special, true),
        ]);
        assert!(rules.passed(RuleName::Special));
        assert!(!rules.passed(RuleName::Number));
        assert_eq!(rules.passed_count(), 3);
        assert!(!rules.all_passed());

        let assessment = PasswordAssessment::from_rules(rules);
        assert_eq!(assessment.score(), 3);
        assert_eq!(assessment.strength(), PasswordStrength::Medium);
        assert_eq!(assessment.meter_segments(), 3);
    }
}
