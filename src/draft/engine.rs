//! Rule engine for multi-criteria roster ordering.
//!
//! Composes multiple placement rules with configurable evaluation modes and
//! tie-breaking strategies. The sort is stable: students that tie on every
//! rule keep their original roster order, which makes distributions
//! reproducible and testable.

use std::sync::Arc;

use super::{rules, PlacementRule, RuleScore};
use crate::models::Student;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the original roster order (stable sort, default).
    #[default]
    InputOrder,
    /// Deterministic by student ID (lexicographic).
    ById,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PlacementRule>,
    weight: f64,
}

/// A composable rule engine for roster ordering.
///
/// Supports sequential multi-layer evaluation (primary rule → tie-breaker)
/// and weighted combination modes.
///
/// # Example
/// ```
/// use class_draft::draft::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::DifficultyLoad)
///     .with_tie_breaker(rules::HelperLoad);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// The standard draft order: most difficulties first, then most helpers.
    pub fn draft_order() -> Self {
        Self::new()
            .with_rule(rules::DifficultyLoad)
            .with_tie_breaker(rules::HelperLoad)
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: PlacementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: PlacementRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Adds a tie-breaking rule (weight 0.0, used only in Sequential mode).
    pub fn with_tie_breaker<R: PlacementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 0.0,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts students by draft priority (first pick first).
    ///
    /// Returns indices into the original student slice, sorted by rule
    /// evaluation. The sort is stable, so full ties keep roster order.
    pub fn sort_indices(&self, students: &[Student]) -> Vec<usize> {
        if students.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..students.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices
                    .sort_by(|&a, &b| self.compare_sequential(&students[a], &students[b]));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = students
                    .iter()
                    .map(|s| self.weighted_score(s))
                    .collect();
                indices.sort_by(|&a, &b| {
                    scores[a]
                        .partial_cmp(&scores[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }

        indices
    }

    /// Returns the index of the first student to draft.
    pub fn first_pick(&self, students: &[Student]) -> Option<usize> {
        self.sort_indices(students).first().copied()
    }

    /// Evaluates a single student and returns scores from each rule.
    pub fn evaluate(&self, student: &Student) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(student) * wr.weight)
            .collect()
    }

    fn compare_sequential(&self, a: &Student, b: &Student) -> std::cmp::Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a);
            let score_b = wr.rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        // All rules tied → use final tie-breaker
        match &self.tie_breaker {
            TieBreaker::InputOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    fn weighted_score(&self, student: &Student) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(student) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}
