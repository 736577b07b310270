//! Four-step workflow state.
//!
//! Mirrors the interactive flow the toolkit serves: configure classes and
//! attributes, enter the roster, tag each student, then distribute. The
//! wizard holds the mutable working state and hands immutable data to the
//! distributor — distribution itself never mutates the roster, so the result
//! step can recompute at will.

use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::debug;

use crate::distributor::SnakeDraft;
use crate::ident::IdGenerator;
use crate::models::{Attribute, AttributeCatalog, AttributeKind, Group, Student};
use crate::roster;

/// Smallest configurable class count.
pub const CLASS_COUNT_MIN: usize = 2;
/// Largest configurable class count.
pub const CLASS_COUNT_MAX: usize = 20;

/// Workflow steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Class count and attribute catalog setup.
    Setup,
    /// Roster entry.
    Roster,
    /// Per-student attribute tagging.
    Evaluate,
    /// Distribution result.
    Result,
}

/// Workflow errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// Advancing past roster entry requires at least one student.
    #[error("the roster needs at least one student")]
    EmptyRoster,
}

/// Mutable state of the four-step workflow.
#[derive(Debug, Clone)]
pub struct ClassWizard {
    step: WizardStep,
    class_count: NonZeroUsize,
    catalog: AttributeCatalog,
    students: Vec<Student>,
}

impl ClassWizard {
    /// Starts at setup with three classes and the standard attribute presets.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Setup,
            class_count: clamp_class_count(3),
            catalog: AttributeCatalog::classroom_defaults(),
            students: Vec::new(),
        }
    }

    /// Replaces the attribute catalog.
    pub fn with_catalog(mut self, catalog: AttributeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Configured class count.
    pub fn class_count(&self) -> NonZeroUsize {
        self.class_count
    }

    /// Attribute catalog.
    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    /// Current roster.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Sets the class count, clamped to the configurable range.
    pub fn set_class_count(&mut self, count: usize) {
        self.class_count = clamp_class_count(count);
    }

    /// Adds an attribute with a fresh id. Blank labels are rejected.
    ///
    /// Returns the new attribute's id.
    pub fn add_attribute(
        &mut self,
        label: &str,
        kind: AttributeKind,
        ids: &mut dyn IdGenerator,
    ) -> Option<String> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let id = ids.next_id();
        self.catalog.add(Attribute::new(id.clone(), label, kind));
        Some(id)
    }

    /// Removes an attribute from the catalog.
    ///
    /// Students keep any reference to the removed id; label resolution drops
    /// it from then on.
    pub fn remove_attribute(&mut self, attribute_id: &str) -> bool {
        self.catalog.remove(attribute_id)
    }

    /// Adds a single student. Blank names are rejected.
    ///
    /// Returns the new student's id.
    pub fn add_student(&mut self, name: &str, ids: &mut dyn IdGenerator) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = ids.next_id();
        self.students.push(Student::new(id.clone()).with_name(name));
        Some(id)
    }

    /// Adds students from pasted text (see [`crate::roster::parse_roster`]).
    ///
    /// Returns how many students were added.
    pub fn add_students_bulk(&mut self, text: &str, ids: &mut dyn IdGenerator) -> usize {
        let mut parsed = roster::parse_roster(text, ids);
        let added = parsed.len();
        self.students.append(&mut parsed);
        added
    }

    /// Removes a student from the roster.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != student_id);
        self.students.len() != before
    }

    /// Toggles an attribute reference on a student.
    ///
    /// Returns `false` when the student does not exist. The attribute id is
    /// not checked against the catalog; a later catalog edit may leave the
    /// reference dangling, which resolution handles by omission.
    pub fn toggle_attribute(
        &mut self,
        student_id: &str,
        attribute_id: &str,
        kind: AttributeKind,
    ) -> bool {
        let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) else {
            return false;
        };
        match kind {
            AttributeKind::Difficulty => student.toggle_difficulty(attribute_id),
            AttributeKind::Helper => student.toggle_helper(attribute_id),
        }
        true
    }

    /// Advances to the next step.
    ///
    /// Leaving the roster step requires at least one student. The final step
    /// stays put.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Roster && self.students.is_empty() {
            return Err(WizardError::EmptyRoster);
        }
        self.step = match self.step {
            WizardStep::Setup => WizardStep::Roster,
            WizardStep::Roster => WizardStep::Evaluate,
            WizardStep::Evaluate | WizardStep::Result => WizardStep::Result,
        };
        debug!(step = ?self.step, "advanced");
        Ok(self.step)
    }

    /// Steps back, stopping at setup.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Setup | WizardStep::Roster => WizardStep::Setup,
            WizardStep::Evaluate => WizardStep::Roster,
            WizardStep::Result => WizardStep::Evaluate,
        };
        self.step
    }

    /// Returns to setup, keeping all entered data.
    pub fn restart(&mut self) {
        self.step = WizardStep::Setup;
    }

    /// Distributes the current roster into the configured number of classes.
    ///
    /// Recomputes the full partition on every call; with unchanged state the
    /// result is identical.
    pub fn distribute(&self) -> Vec<Group> {
        SnakeDraft::new().distribute(&self.students, self.class_count)
    }
}

impl Default for ClassWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_class_count(count: usize) -> NonZeroUsize {
    let clamped = count.clamp(CLASS_COUNT_MIN, CLASS_COUNT_MAX);
    NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN)
}
