//! Built-in placement rules.
//!
//! # Score Convention
//! All rules return lower scores for students that should be drafted earlier.

use super::{PlacementRule, RuleScore};
use crate::models::Student;

/// Most difficulties first.
///
/// A student flagged with many difficulty attributes is the hardest to place
/// and is drafted while every class still has room. This is the primary key
/// of the standard draft order.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyLoad;

impl PlacementRule for DifficultyLoad {
    fn name(&self) -> &'static str {
        "DIFFICULTY"
    }

    fn evaluate(&self, student: &Student) -> RuleScore {
        // More difficulties = higher priority → negate.
        -(student.difficulty_count() as f64)
    }

    fn description(&self) -> &'static str {
        "Most Difficulty Attributes"
    }
}

/// Most helpers first.
///
/// Secondary key of the standard draft order: among equally difficult
/// students, those with leadership/support traits are spread out first.
#[derive(Debug, Clone, Copy)]
pub struct HelperLoad;

impl PlacementRule for HelperLoad {
    fn name(&self) -> &'static str {
        "HELPER"
    }

    fn evaluate(&self, student: &Student) -> RuleScore {
        -(student.helper_count() as f64)
    }

    fn description(&self) -> &'static str {
        "Most Helper Attributes"
    }
}
