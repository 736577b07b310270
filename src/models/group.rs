//! Class group model.
//!
//! A group is one output bucket of a distribution: a 1-based display number,
//! students in draft-arrival order, and aggregate scores. Stats are derived
//! data — always recomputable from the student list with
//! [`GroupStats::from_students`].

use serde::{Deserialize, Serialize};

use super::Student;

/// One class produced by a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display number (1-based).
    pub id: usize,
    /// Derived display name, e.g. `1반`.
    pub name: String,
    /// Students in the order the draft assigned them.
    pub students: Vec<Student>,
    /// Aggregate scores over `students`.
    pub stats: GroupStats,
}

/// Aggregate scores of a group.
///
/// Plain sums, not weighted or normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Number of students.
    pub total: usize,
    /// Sum of difficulty-attribute counts across students.
    pub difficulty_score: usize,
    /// Sum of helper-attribute counts across students.
    pub helper_score: usize,
}

impl GroupStats {
    /// Computes aggregates from a student list.
    pub fn from_students(students: &[Student]) -> Self {
        Self {
            total: students.len(),
            difficulty_score: students.iter().map(Student::difficulty_count).sum(),
            helper_score: students.iter().map(Student::helper_count).sum(),
        }
    }
}

impl Group {
    /// Creates an empty group with the given display number.
    pub fn numbered(id: usize) -> Self {
        Self {
            id,
            name: format!("{id}반"),
            students: Vec::new(),
            stats: GroupStats::default(),
        }
    }

    /// Recomputes `stats` from the current student list.
    pub fn recompute_stats(&mut self) {
        self.stats = GroupStats::from_students(&self.students);
    }

    /// Number of students in the group.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the group has no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
