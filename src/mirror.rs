//! Record Mirror
//!
//! Component-owned copy of a record's last known server state. It changes in
//! exactly two ways: `replace` when the parent hands over a (possibly
//! different) record, and `merge_patch` when an update response comes back.
//! There are no local-only fields.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct Mirror<T> {
    value: Option<T>,
    /// Bumped on every replace/merge; an update response is only merged into
    /// the generation its edit started from
    generation: u64,
    stale: bool,
}

impl<T> Default for Mirror<T> {
    fn default() -> Self {
        Self { value: None, generation: 0, stale: false }
    }
}

impl<T> Mirror<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(value: Option<T>) -> Self {
        Self { value, generation: 0, stale: false }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Flag the snapshot as possibly out of date (e.g. a mutation failed midway)
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Drop the current snapshot entirely in favour of `value`
    pub fn replace(&mut self, value: Option<T>) {
        self.value = value;
        self.generation += 1;
        self.stale = false;
    }

    /// Shallow-merge an update response onto the snapshot and return the result.
    ///
    /// `seen` is the generation the edit started from. If the snapshot was
    /// replaced since, the response belongs to another record and is refused.
    /// Top-level keys in `patch` overwrite the snapshot's; keys it lacks keep
    /// their previous value. On error the snapshot is left untouched.
    pub fn merge_patch(&mut self, seen: u64, patch: &Value) -> Result<T, ApiError> {
        if seen != self.generation {
            return Err(ApiError::Superseded);
        }
        let base = self
            .value
            .as_ref()
            .ok_or_else(|| ApiError::UnexpectedShape("no record to update".to_string()))?;
        let merged = merge_shallow(base, patch)?;
        self.value = Some(merged.clone());
        self.generation += 1;
        self.stale = false;
        Ok(merged)
    }
}

/// `{...base, ...patch}` for any serde type whose JSON form is an object
pub fn merge_shallow<T>(base: &T, patch: &Value) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
{
    let patch = patch
        .as_object()
        .ok_or_else(|| ApiError::UnexpectedShape(format!("expected an object, got {}", patch)))?;

    let mut merged = match serde_json::to_value(base).map_err(|e| ApiError::Encode(e.to_string()))? {
        Value::Object(map) => map,
        other => {
            return Err(ApiError::UnexpectedShape(format!(
                "record is not an object: {}",
                other
            )))
        }
    };
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    serde_json::from_value(Value::Object(merged)).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordId, Task, TaskStatus};
    use serde_json::json;

    fn task(value: Value) -> Task {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_merge_preserves_unspecified_fields() {
        let mut mirror = Mirror::new(Some(task(json!({ "id": 1, "title": "Old", "note": "N" }))));

        let merged = mirror.merge_patch(0, &json!({ "title": "X" })).unwrap();

        assert_eq!(merged.id, RecordId::Num(1));
        assert_eq!(merged.title, "X");
        assert_eq!(merged.note.as_deref(), Some("N"));
        assert_eq!(mirror.get(), Some(&merged));
        assert_eq!(mirror.generation(), 1);
    }

    #[test]
    fn test_merge_keeps_unmodelled_server_fields() {
        let mut mirror = Mirror::new(Some(task(json!({ "id": 1, "title": "A", "budget": 10 }))));
        let merged = mirror.merge_patch(0, &json!({ "status": "Done", "phase": "2" })).unwrap();

        assert_eq!(merged.status, TaskStatus::Done);
        assert_eq!(merged.extra.get("budget"), Some(&json!(10)));
        assert_eq!(merged.extra.get("phase"), Some(&json!("2")));
    }

    #[test]
    fn test_merge_explicit_null_clears_field() {
        let mut mirror = Mirror::new(Some(task(json!({ "id": 1, "note": "N" }))));
        let merged = mirror.merge_patch(0, &json!({ "note": null })).unwrap();
        assert_eq!(merged.note, None);
    }

    #[test]
    fn test_non_object_patch_leaves_snapshot() {
        let original = task(json!({ "id": 1, "title": "Old" }));
        let mut mirror = Mirror::new(Some(original.clone()));

        assert!(matches!(
            mirror.merge_patch(0, &json!("updated")),
            Err(ApiError::UnexpectedShape(_))
        ));
        assert!(mirror.merge_patch(0, &json!({ "id": null })).is_err());
        assert_eq!(mirror.get(), Some(&original));
        assert_eq!(mirror.generation(), 0);
    }

    #[test]
    fn test_merge_without_record() {
        let mut mirror: Mirror<Task> = Mirror::default();
        assert!(mirror.merge_patch(0, &json!({ "title": "X" })).is_err());
    }

    #[test]
    fn test_replace_drops_previous_fields() {
        let mut mirror = Mirror::new(Some(task(json!({
            "id": 1, "title": "First", "note": "keep?", "priority": "High", "budget": 5
        }))));
        mirror.mark_stale();

        mirror.replace(Some(task(json!({ "id": 2, "title": "Second" }))));

        let current = mirror.get().unwrap();
        assert_eq!(current.id, RecordId::Num(2));
        assert_eq!(current.note, None);
        assert_eq!(current.priority, None);
        assert!(current.extra.is_empty());
        assert!(!mirror.is_stale());

        mirror.replace(None);
        assert!(mirror.get().is_none());
        assert_eq!(mirror.generation(), 2);
    }

    #[test]
    fn test_response_for_replaced_record_is_refused() {
        let mut mirror = Mirror::new(Some(task(json!({ "id": 1, "title": "First" }))));
        let seen = mirror.generation();

        // parent switched to another task while the edit was saving
        mirror.replace(Some(task(json!({ "id": 2, "title": "Second" }))));

        assert_eq!(mirror.merge_patch(seen, &json!({ "title": "First v2" })), Err(ApiError::Superseded));
        assert_eq!(mirror.get().map(|t| t.title.as_str()), Some("Second"));

        let merged = mirror.merge_patch(mirror.generation(), &json!({ "title": "Second v2" })).unwrap();
        assert_eq!(merged.id, RecordId::Num(2));
    }
}
