//! Domain types for list items.
//!
//! # Design
//! Dates are kept as opaque text. The store never parses them, so whatever
//! the caller sends (or the generator produces) is stored verbatim. JSON
//! names are camelCase to match what the HTTP clients already send.

use serde::{Deserialize, Serialize};

/// A stored list item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: u64,
    pub task: String,
    pub created_on: String,
    pub due_on: String,
}

/// Fields a caller supplies to create an item. The id is allocated by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItemInput {
    pub task: String,
    pub created_on: String,
    pub due_on: String,
}

/// Partial update for an existing item. Only the fields present are applied;
/// an `id` key in the payload is not a field here and is dropped on parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
}

impl ListItem {
    pub(crate) fn from_input(id: u64, input: ListItemInput) -> Self {
        Self {
            id,
            task: input.task,
            created_on: input.created_on,
            due_on: input.due_on,
        }
    }

    /// Shallow merge: present fields overwrite, absent fields stay.
    pub(crate) fn apply(&mut self, patch: ListItemPatch) {
        if let Some(task) = patch.task {
            self.task = task;
        }
        if let Some(created_on) = patch.created_on {
            self.created_on = created_on;
        }
        if let Some(due_on) = patch.due_on {
            self.due_on = due_on;
        }
    }
}
