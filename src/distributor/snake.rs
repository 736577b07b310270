//! Snake-draft distributor.
//!
//! # Algorithm
//!
//! 1. Sort the roster by placement rules (stable; ties keep roster order).
//! 2. Create exactly `class_count` groups, numbered 1..=N.
//! 3. Deal sorted students in snake order: forward on even passes through
//!    the groups, reverse on odd passes. Across any two consecutive passes
//!    each group receives one early and one late pick, so high-priority
//!    students do not cluster in the first class.
//! 4. Recompute per-group aggregate stats.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the deal.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draft::RuleEngine;
use crate::models::{Group, Student};

/// Input container for distribution.
///
/// `class_count` is non-zero by construction; deserializing a request with a
/// zero or negative count fails before the distributor is ever invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRequest {
    /// Roster to distribute.
    pub students: Vec<Student>,
    /// Number of classes to produce.
    pub class_count: NonZeroUsize,
}

impl DraftRequest {
    /// Creates a new draft request.
    pub fn new(students: Vec<Student>, class_count: NonZeroUsize) -> Self {
        Self {
            students,
            class_count,
        }
    }
}

/// Group index for the draft pick at `position` (0-based).
///
/// Even passes run group 0..N-1, odd passes run N-1..0.
pub fn snake_slot(position: usize, class_count: NonZeroUsize) -> usize {
    let n = class_count.get();
    let cycle = position / n;
    let slot = position % n;
    if cycle % 2 == 0 {
        slot
    } else {
        n - 1 - slot
    }
}

/// Deterministic snake-draft distributor.
///
/// Pure with respect to its inputs: the roster is neither reordered nor
/// mutated, and repeated invocation with the same inputs yields an identical
/// partition.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use class_draft::distributor::SnakeDraft;
/// use class_draft::models::Student;
///
/// let roster = vec![
///     Student::new("s1").with_name("가나다").with_difficulty("d1"),
///     Student::new("s2").with_name("라마바"),
/// ];
/// let groups = SnakeDraft::new().distribute(&roster, NonZeroUsize::new(2).unwrap());
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].students[0].id, "s1");
/// ```
#[derive(Debug, Clone)]
pub struct SnakeDraft {
    rule_engine: RuleEngine,
}

impl SnakeDraft {
    /// Creates a distributor with the standard draft order
    /// (most difficulties first, then most helpers).
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::draft_order(),
        }
    }

    /// Replaces the ordering engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Distributes students into exactly `class_count` groups.
    ///
    /// Returns groups numbered 1..=N in order; groups may be empty when the
    /// roster is smaller than the class count. Every input student lands in
    /// exactly one group.
    pub fn distribute(&self, students: &[Student], class_count: NonZeroUsize) -> Vec<Group> {
        let order = self.rule_engine.sort_indices(students);
        let mut groups: Vec<Group> = (1..=class_count.get()).map(Group::numbered).collect();

        for (position, &student_idx) in order.iter().enumerate() {
            let slot = snake_slot(position, class_count);
            groups[slot].students.push(students[student_idx].clone());
        }

        for group in &mut groups {
            group.recompute_stats();
        }

        debug!(
            students = students.len(),
            classes = class_count.get(),
            "distributed roster"
        );
        groups
    }

    /// Distributes from a request.
    pub fn distribute_request(&self, request: &DraftRequest) -> Vec<Group> {
        self.distribute(&request.students, request.class_count)
    }
}

impl Default for SnakeDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{rules, RuleEngine};
    use std::collections::HashSet;

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    fn make_student(id: &str, difficulties: usize, helpers: usize) -> Student {
        let mut student = Student::new(id).with_name(id);
        for i in 0..difficulties {
            student = student.with_difficulty(format!("{id}_d{i}"));
        }
        for i in 0..helpers {
            student = student.with_helper(format!("{id}_h{i}"));
        }
        student
    }

    fn group_ids(group: &Group) -> Vec<&str> {
        group.students.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_snake_slot_pattern() {
        let slots: Vec<usize> = (0..9).map(|p| snake_slot(p, n(3))).collect();
        assert_eq!(slots, vec![0, 1, 2, 2, 1, 0, 0, 1, 2]);
    }

    #[test]
    fn test_four_student_scenario() {
        // A(2 difficulties), B(0,0), C(1,1), D(0,2) into two classes.
        // Sorted: A, C, D, B; draft: A→1반, C→2반, reverse: D→2반, B→1반.
        let students = vec![
            make_student("A", 2, 0),
            make_student("B", 0, 0),
            make_student("C", 1, 1),
            make_student("D", 0, 2),
        ];
        let groups = SnakeDraft::new().distribute(&students, n(2));

        assert_eq!(group_ids(&groups[0]), vec!["A", "B"]);
        assert_eq!(group_ids(&groups[1]), vec!["C", "D"]);

        assert_eq!(groups[0].stats.total, 2);
        assert_eq!(groups[0].stats.difficulty_score, 2);
        assert_eq!(groups[0].stats.helper_score, 0);
        assert_eq!(groups[1].stats.total, 2);
        assert_eq!(groups[1].stats.difficulty_score, 1);
        assert_eq!(groups[1].stats.helper_score, 3);
    }

    #[test]
    fn test_snake_symmetry() {
        // Six students with distinct priorities into three classes follow
        // the group sequence 0,1,2,2,1,0.
        let students: Vec<Student> = (0..6)
            .map(|i| make_student(&format!("s{i}"), 5 - i, 0))
            .collect();
        let groups = SnakeDraft::new().distribute(&students, n(3));

        assert_eq!(group_ids(&groups[0]), vec!["s0", "s5"]);
        assert_eq!(group_ids(&groups[1]), vec!["s1", "s4"]);
        assert_eq!(group_ids(&groups[2]), vec!["s2", "s3"]);
    }

    #[test]
    fn test_partition_completeness() {
        let students: Vec<Student> = (0..10)
            .map(|i| make_student(&format!("s{i}"), i % 4, i % 3))
            .collect();
        let groups = SnakeDraft::new().distribute(&students, n(3));

        let assigned: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.students.iter().map(|s| s.id.as_str()))
            .collect();
        assert_eq!(assigned.len(), 10);

        let unique: HashSet<&str> = assigned.iter().copied().collect();
        let input: HashSet<&str> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(unique, input);

        let sizes: Vec<usize> = groups.iter().map(Group::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 10);
    }

    #[test]
    fn test_group_count_with_small_roster() {
        let students = vec![make_student("a", 1, 0), make_student("b", 0, 0)];
        let groups = SnakeDraft::new().distribute(&students, n(5));

        assert_eq!(groups.len(), 5);
        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.id, i + 1);
            assert_eq!(group.name, format!("{}반", i + 1));
        }
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[1].len(), 1);
        for group in &groups[2..] {
            assert!(group.is_empty());
            assert_eq!(group.stats, crate::models::GroupStats::default());
        }
    }

    #[test]
    fn test_empty_roster() {
        let groups = SnakeDraft::new().distribute(&[], n(3));
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(Group::is_empty));
    }

    #[test]
    fn test_determinism() {
        let students: Vec<Student> = (0..7)
            .map(|i| make_student(&format!("s{i}"), i % 2, i % 3))
            .collect();
        let draft = SnakeDraft::new();

        let first = draft.distribute(&students, n(3));
        let second = draft.distribute(&students, n(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_not_mutated() {
        let students = vec![make_student("low", 0, 0), make_student("high", 3, 0)];
        let before = students.clone();

        SnakeDraft::new().distribute(&students, n(2));
        assert_eq!(students, before);
    }

    #[test]
    fn test_ties_dealt_in_roster_order() {
        // Four identical students into two classes: forward pass a,b then
        // reverse pass c,d.
        let students: Vec<Student> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| make_student(id, 1, 1))
            .collect();
        let groups = SnakeDraft::new().distribute(&students, n(2));

        assert_eq!(group_ids(&groups[0]), vec!["a", "d"]);
        assert_eq!(group_ids(&groups[1]), vec!["b", "c"]);
    }

    #[test]
    fn test_custom_rule_engine() {
        // Helpers-only ordering reverses the standard outcome.
        let students = vec![make_student("few", 3, 0), make_student("many", 0, 2)];
        let draft =
            SnakeDraft::new().with_rule_engine(RuleEngine::new().with_rule(rules::HelperLoad));

        let groups = draft.distribute(&students, n(2));
        assert_eq!(group_ids(&groups[0]), vec!["many"]);
        assert_eq!(group_ids(&groups[1]), vec!["few"]);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "students": [
                {"id": "s1", "name": "김철수", "difficulties": ["d1"], "helpers": []},
                {"id": "s2", "name": "이영희", "difficulties": [], "helpers": ["h1"]}
            ],
            "class_count": 2
        }"#;
        let request: DraftRequest = serde_json::from_str(json).unwrap();
        let groups = SnakeDraft::new().distribute_request(&request);

        assert_eq!(groups.len(), 2);
        assert_eq!(group_ids(&groups[0]), vec!["s1"]);
        assert_eq!(group_ids(&groups[1]), vec!["s2"]);
    }

    #[test]
    fn test_request_rejects_zero_class_count() {
        let json = r#"{"students": [], "class_count": 0}"#;
        assert!(serde_json::from_str::<DraftRequest>(json).is_err());
    }
}
