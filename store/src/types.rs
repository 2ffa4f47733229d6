//! Record and payload types for the todo store.
//!
//! # Design
//! `NewTodo` and `TodoPatch` are separate payload types rather than loose
//! parameters so the write surface is explicit: a patch can only name
//! `title`, `description` and `completed`. Identity and creation time
//! cannot be overwritten by a merge because the patch type has no such
//! fields. Records serialize with camelCase keys (`createdAt`,
//! `updatedAt`), the JSON shape of the data model this store emulates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Copy of this record with `patch` merged in.
    ///
    /// Absent patch fields keep their current values; `id` and
    /// `created_at` always carry over. `updated_at` is left untouched here,
    /// refreshing it is the store's job and happens only on successful
    /// updates.
    pub fn merged(&self, patch: TodoPatch) -> Todo {
        Todo {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            completed: patch.completed.unwrap_or(self.completed),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Payload for creating a new todo.
///
/// The store accepts any title, including an empty one; validating input
/// is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for an existing todo. Only the fields present are
/// applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Todo {
        let now = Utc::now();
        Todo {
            id: 7,
            title: "Water the plants".to_string(),
            description: "Balcony first".to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Water the plants");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = record();
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn new_todo_defaults_description_to_empty() {
        let input: NewTodo = serde_json::from_str(r#"{"title":"Call mum"}"#).unwrap();
        assert_eq!(input.title, "Call mum");
        assert!(input.description.is_empty());
    }

    #[test]
    fn new_todo_rejects_missing_title() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"description":"orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_with_no_fields_is_valid() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.completed.is_none());
    }

    #[test]
    fn patch_skips_absent_fields_when_serialized() {
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn merged_applies_only_present_fields() {
        let todo = record();
        let merged = todo.merged(TodoPatch {
            title: Some("Water the cactus".to_string()),
            ..TodoPatch::default()
        });
        assert_eq!(merged.title, "Water the cactus");
        assert_eq!(merged.description, todo.description);
        assert_eq!(merged.completed, todo.completed);
    }

    #[test]
    fn merged_never_changes_id_or_created_at() {
        let todo = record();
        let merged = todo.merged(TodoPatch {
            title: Some("New title".to_string()),
            description: Some("New description".to_string()),
            completed: Some(true),
        });
        assert_eq!(merged.id, todo.id);
        assert_eq!(merged.created_at, todo.created_at);
        assert_eq!(merged.updated_at, todo.updated_at);
    }
}
