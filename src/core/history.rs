//! Append-only status history for a single entity.
//!
//! A [`StatusHistory`] owns every [`StatusRecord`] of one entity and the pointer to the
//! current one. Applying a transition validates it against the entity kind's table and then,
//! in one step, appends the new record and repoints. A rejected transition changes nothing.

use super::machine::StatusMachine;
use crate::{
    errors::{Error, Result},
    models::StatusRecord,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

/// The record type stored for entity kind `M`.
pub type RecordOf<M> =
    StatusRecord<<M as StatusMachine>::Status, <M as StatusMachine>::Transition>;

/// Status history of one entity of kind `M`.
#[derive(Debug, Clone)]
pub struct StatusHistory<M: StatusMachine> {
    entity_id: String,
    records: Vec<RecordOf<M>>,
    current: usize,
}

impl<M: StatusMachine> StatusHistory<M> {
    /// Starts a history for a newly created entity in the kind's initial status.
    pub fn new(entity_id: impl Into<String>, context: Option<Value>) -> Self {
        Self::starting_at(entity_id, M::initial_status(), context)
    }

    /// Starts a history in an arbitrary status, e.g. for an entity created elsewhere.
    pub fn starting_at(
        entity_id: impl Into<String>,
        status: M::Status,
        context: Option<Value>,
    ) -> Self {
        let entity_id = entity_id.into();
        let initial = StatusRecord {
            id: 1,
            entity_id: entity_id.clone(),
            status,
            transition: None,
            recorded_at: Utc::now(),
            context,
        };
        debug!(kind = M::NAME, %entity_id, %status, "Status history started");

        Self {
            entity_id,
            records: vec![initial],
            current: 0,
        }
    }

    /// Rebuilds a history from previously stored records, oldest first.
    ///
    /// Every record must belong to `entity_id`, ids must count up from 1, only the first
    /// record may lack a transition, and each later record must be the table's outcome
    /// for the status before it.
    pub fn from_records(
        entity_id: impl Into<String>,
        records: Vec<RecordOf<M>>,
    ) -> Result<Self> {
        let entity_id = entity_id.into();
        let invalid = |message: String| Error::InvalidHistory {
            entity_id: entity_id.clone(),
            message,
        };

        if records.is_empty() {
            return Err(invalid("no records".to_string()));
        }

        let mut previous: Option<M::Status> = None;
        for (expected_id, record) in (1_u64..).zip(&records) {
            if record.entity_id != entity_id {
                return Err(invalid(format!(
                    "record {} belongs to '{}'",
                    record.id, record.entity_id
                )));
            }
            if record.id != expected_id {
                return Err(invalid(format!(
                    "expected record id {expected_id}, found {}",
                    record.id
                )));
            }

            match (previous, record.transition) {
                (None, None) => {}
                (None, Some(_)) => {
                    return Err(invalid("first record carries a transition".to_string()));
                }
                (Some(_), None) => {
                    return Err(invalid(format!("record {} has no transition", record.id)));
                }
                (Some(before), Some(transition)) => {
                    if M::resulting_status(before, transition) != Some(record.status) {
                        return Err(invalid(format!(
                            "record {}: '{transition}' from '{before}' does not lead to '{}'",
                            record.id, record.status
                        )));
                    }
                }
            }
            previous = Some(record.status);
        }

        let current = records.len() - 1;
        Ok(Self {
            entity_id,
            records,
            current,
        })
    }

    /// Entity this history belongs to.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// The record the current-status pointer refers to.
    #[must_use]
    pub fn current(&self) -> &RecordOf<M> {
        &self.records[self.current]
    }

    /// Status the entity is in now.
    #[must_use]
    pub fn current_status(&self) -> M::Status {
        self.current().status
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[RecordOf<M>] {
        &self.records
    }

    /// Number of records. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a history holds at least its initial record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `transition` would be accepted from the current status.
    #[must_use]
    pub fn can_apply(&self, transition: M::Transition) -> bool {
        M::is_valid_transition(self.current_status(), transition)
    }

    /// Applies `transition`, appending a record and moving the current pointer to it.
    ///
    /// Fails with [`Error::InvalidTransition`] if the table has no outcome for the current
    /// status. In that case no record is written and the pointer does not move.
    pub fn apply(
        &mut self,
        transition: M::Transition,
        context: Option<Value>,
    ) -> Result<&RecordOf<M>> {
        let from = self.current_status();
        let status = M::transition(from, transition).inspect_err(|e| {
            warn!(kind = M::NAME, entity_id = %self.entity_id, "Rejected: {}", e);
        })?;

        let record = StatusRecord {
            id: self.current().id + 1,
            entity_id: self.entity_id.clone(),
            status,
            transition: Some(transition),
            recorded_at: Utc::now(),
            context,
        };
        self.records.push(record);
        self.current = self.records.len() - 1;

        debug!(
            kind = M::NAME,
            entity_id = %self.entity_id,
            %from,
            %transition,
            to = %status,
            "Status transition applied"
        );
        Ok(self.current())
    }
}
