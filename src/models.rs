//! Plain data carried alongside the transition engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable entry in an entity's status history.
///
/// A record is written once, either when the entity is created (with no
/// `transition`) or when a transition is accepted. It is never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord<S, T> {
    /// Position in the history, starting at 1
    pub id: u64,
    /// Entity this record belongs to
    pub entity_id: String,
    /// Status the entity entered
    pub status: S,
    /// Transition that produced this status, `None` for the initial record
    pub transition: Option<T>,
    /// When the status was entered
    pub recorded_at: DateTime<Utc>,
    /// Free-form metadata about why or how the change happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl<S, T> StatusRecord<S, T> {
    /// True for the record written at entity creation.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        self.transition.is_none()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::lesson::{LessonStatus, LessonTransition};
    use serde_json::json;

    #[test]
    fn test_record_serializes_canonical_names() {
        let record = StatusRecord {
            id: 2,
            entity_id: "lesson-7".to_string(),
            status: LessonStatus::Accepted,
            transition: Some(LessonTransition::Accept),
            recorded_at: Utc::now(),
            context: Some(json!({ "price": 45 })),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "ACCEPTED");
        assert_eq!(value["transition"], "ACCEPT");
        assert_eq!(value["context"]["price"], 45);

        let back: StatusRecord<LessonStatus, LessonTransition> =
            serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
        assert!(!back.is_initial());
    }

    #[test]
    fn test_context_is_optional_on_the_wire() {
        let raw = json!({
            "id": 1,
            "entity_id": "lesson-7",
            "status": "REQUESTED",
            "transition": null,
            "recorded_at": "2024-03-01T10:00:00Z",
        });
        let record: StatusRecord<LessonStatus, LessonTransition> =
            serde_json::from_value(raw).unwrap();
        assert!(record.is_initial());
        assert!(record.context.is_none());
    }
}
