//! Base element types
//!
//! Every persisted entity carries an optional database ID. Most of them
//! also carry creation/modification timestamps, and the named ones a
//! `name` column on top.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Capability of elements that have a human readable name and type
///
/// Used wherever a label or title needs "<type> <name>".
pub trait NamedElement {
    /// Name of this element
    fn name(&self) -> &str;

    /// Human readable type of this element (e.g. "Part", "Storage location")
    fn type_label(&self) -> &str;

    /// Database ID, `None` if not persisted yet
    fn id(&self) -> Option<i64>;
}

/// Creation and modification timestamps (unix millis)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Timestamps {
    pub added_date: Option<i64>,
    pub last_modified: Option<i64>,
}

impl Timestamps {
    /// Update timestamps on persist/update
    ///
    /// `added_date` is only set once.
    pub fn touch(&mut self, now: i64) {
        self.last_modified = Some(now);
        if self.added_date.is_none() {
            self.added_date = Some(now);
        }
    }
}

/// Base of all named database elements
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NamedDbElement {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl NamedDbElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an element that already has a database ID
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the name of this element
    pub fn set_name(&mut self, new_name: impl Into<String>) -> &mut Self {
        self.name = new_name.into();
        self
    }

    /// Copy of this element ready to be inserted as a new row
    ///
    /// The copy has no ID. A copy of a persisted element also gets a fresh
    /// creation date.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        if copy.id.is_some() {
            copy.timestamps.added_date = None;
        }
        copy.id = None;
        copy
    }

    /// Check the name constraint
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Blank("name"));
        }
        Ok(())
    }
}

impl fmt::Display for NamedDbElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
