//! Fields and groups bound to a render handler
//!
//! Fields bound before any group is opened live at the top level. Each
//! `with_group` call opens a nested group; fields bound afterwards, and the
//! record's own fields, are placed inside the innermost open group.

use super::fields::{FieldValue, Fields};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundFields {
    root: Fields,
    groups: Vec<(String, Fields)>,
}

impl BoundFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `fields` bound to the innermost open group
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Self {
        let mut next = self.clone();
        match next.groups.last_mut() {
            Some((_, bound)) => bound.extend(fields),
            None => next.root.extend(fields),
        }
        next
    }

    /// Return a copy with a new group opened; an empty name is ignored
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !name.is_empty() {
            next.groups.push((name.to_string(), Fields::new()));
        }
        next
    }

    /// Combine bound fields with a record's fields into one top-level set
    ///
    /// Later fields win on duplicate keys, so record fields override bound
    /// fields of the same group. Groups that end up empty are omitted.
    pub fn resolve(&self, record_fields: Fields) -> Fields {
        let mut inner = record_fields;
        for (name, bound) in self.groups.iter().rev() {
            let mut level = bound.clone();
            level.extend(inner);
            inner = if level.is_empty() {
                Fields::new()
            } else {
                Fields::new().with_field(name.clone(), FieldValue::from(level))
            };
        }

        let mut top = self.root.clone();
        top.extend(inner);
        top
    }
}
