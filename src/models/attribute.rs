//! Attribute model and catalog.
//!
//! Attributes are the named tags students are evaluated against. The catalog
//! resolves attribute IDs to display labels for result rendering and export.
//! A reference to an ID missing from the catalog is not a fault — resolution
//! simply yields no label for it.

use serde::{Deserialize, Serialize};

use super::Student;

/// A named, typed attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Unique attribute identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Attribute classification.
    pub kind: AttributeKind,
}

/// Attribute classification.
///
/// The kind never changes once an attribute is referenced by students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// The student requires more support/attention; raises draft priority.
    Difficulty,
    /// The student has a positive leadership/support trait; tie-break key.
    Helper,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Creates a difficulty attribute.
    pub fn difficulty(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, AttributeKind::Difficulty)
    }

    /// Creates a helper attribute.
    pub fn helper(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, AttributeKind::Helper)
    }
}

/// An ordered collection of attribute definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCatalog {
    attributes: Vec<Attribute>,
}

impl AttributeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard starter set: 학습부진/행동주의 (difficulties), 리더십 (helper).
    pub fn classroom_defaults() -> Self {
        Self::new()
            .with_attribute(Attribute::difficulty("d1", "학습부진"))
            .with_attribute(Attribute::difficulty("d2", "행동주의"))
            .with_attribute(Attribute::helper("h1", "리더십"))
    }

    /// Adds an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds an attribute.
    pub fn add(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Removes the attribute with the given ID.
    ///
    /// Students keep any reference to the removed ID; label resolution
    /// silently drops it afterwards.
    pub fn remove(&mut self, attribute_id: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.id != attribute_id);
        self.attributes.len() != before
    }

    /// Finds an attribute by ID.
    pub fn get(&self, attribute_id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == attribute_id)
    }

    /// Resolves an attribute ID to its display label.
    pub fn label_for(&self, attribute_id: &str) -> Option<&str> {
        self.get(attribute_id).map(|a| a.label.as_str())
    }

    /// Iterates over all attributes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Iterates over difficulty attributes.
    pub fn difficulties(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(|a| a.kind == AttributeKind::Difficulty)
    }

    /// Iterates over helper attributes.
    pub fn helpers(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(|a| a.kind == AttributeKind::Helper)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Resolved labels for a student: difficulties first, then helpers, in
    /// the student's own reference order. Unknown IDs are omitted.
    pub fn student_labels(&self, student: &Student) -> Vec<&str> {
        student
            .difficulties
            .iter()
            .chain(student.helpers.iter())
            .filter_map(|id| self.label_for(id))
            .collect()
    }
}
