//! Student model.
//!
//! A student carries two lists of attribute references: difficulty
//! attributes (needs extra support) and helper attributes (positive
//! leadership/support traits). The list sizes are the draft sort keys.

use serde::{Deserialize, Serialize};

/// A student to be placed into a class.
///
/// Attribute references are insertion-ordered and duplicate-free: an ID is
/// either present or absent, and label resolution preserves the order in
/// which attributes were toggled on. The distributor never mutates students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// IDs of difficulty attributes assigned to this student.
    pub difficulties: Vec<String>,
    /// IDs of helper attributes assigned to this student.
    pub helpers: Vec<String>,
}

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Student {
    /// Creates a new student with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            gender: None,
            difficulties: Vec::new(),
            helpers: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Adds a difficulty attribute reference (no-op if already present).
    pub fn with_difficulty(mut self, attribute_id: impl Into<String>) -> Self {
        insert_unique(&mut self.difficulties, attribute_id.into());
        self
    }

    /// Adds a helper attribute reference (no-op if already present).
    pub fn with_helper(mut self, attribute_id: impl Into<String>) -> Self {
        insert_unique(&mut self.helpers, attribute_id.into());
        self
    }

    /// Number of difficulty attributes (primary draft key).
    pub fn difficulty_count(&self) -> usize {
        self.difficulties.len()
    }

    /// Number of helper attributes (secondary draft key).
    pub fn helper_count(&self) -> usize {
        self.helpers.len()
    }

    /// Whether the given difficulty attribute is set.
    pub fn has_difficulty(&self, attribute_id: &str) -> bool {
        self.difficulties.iter().any(|id| id == attribute_id)
    }

    /// Whether the given helper attribute is set.
    pub fn has_helper(&self, attribute_id: &str) -> bool {
        self.helpers.iter().any(|id| id == attribute_id)
    }

    /// Removes the difficulty reference if present, appends it otherwise.
    pub fn toggle_difficulty(&mut self, attribute_id: &str) {
        toggle(&mut self.difficulties, attribute_id);
    }

    /// Removes the helper reference if present, appends it otherwise.
    pub fn toggle_helper(&mut self, attribute_id: &str) {
        toggle(&mut self.helpers, attribute_id);
    }
}

fn insert_unique(list: &mut Vec<String>, id: String) {
    if !list.contains(&id) {
        list.push(id);
    }
}

fn toggle(list: &mut Vec<String>, id: &str) {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
    } else {
        list.push(id.to_string());
    }
}
