//! Distribution balance metrics.
//!
//! Summarizes how evenly a finished distribution spread students and scores
//! across classes. Pure measurement — nothing here moves a student.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Size spread | max − min group size |
//! | Difficulty spread | max − min group difficulty score |
//! | Helper spread | max − min group helper score |

use crate::models::Group;

/// Balance indicators of a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftKpi {
    /// Number of groups.
    pub group_count: usize,
    /// Total students across all groups.
    pub total_students: usize,
    /// Smallest group size.
    pub min_group_size: usize,
    /// Largest group size.
    pub max_group_size: usize,
    /// Largest minus smallest group difficulty score.
    pub difficulty_spread: usize,
    /// Largest minus smallest group helper score.
    pub helper_spread: usize,
}

impl DraftKpi {
    /// Computes KPIs from a finished distribution.
    pub fn calculate(groups: &[Group]) -> Self {
        let sizes = || groups.iter().map(Group::len);
        let difficulty = || groups.iter().map(|g| g.stats.difficulty_score);
        let helper = || groups.iter().map(|g| g.stats.helper_score);

        Self {
            group_count: groups.len(),
            total_students: sizes().sum(),
            min_group_size: sizes().min().unwrap_or(0),
            max_group_size: sizes().max().unwrap_or(0),
            difficulty_spread: spread(difficulty()),
            helper_spread: spread(helper()),
        }
    }

    /// Largest minus smallest group size.
    pub fn size_spread(&self) -> usize {
        self.max_group_size - self.min_group_size
    }

    /// Whether the distribution meets the given balance thresholds.
    pub fn meets_thresholds(&self, max_size_spread: usize, max_difficulty_spread: usize) -> bool {
        self.size_spread() <= max_size_spread && self.difficulty_spread <= max_difficulty_spread
    }
}

fn spread(values: impl Iterator<Item = usize> + Clone) -> usize {
    match (values.clone().max(), values.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}
