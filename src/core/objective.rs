//! Objective lifecycle - the concrete steps toward a goal.
//! Created, then started, then either achieved or abandoned.

use super::machine::{StatusMachine, tag_enum};

tag_enum! {
    /// Where an objective sits in its lifecycle
    pub enum ObjectiveStatus ("objective status") {
        /// Objective defined, not yet started
        Created => "CREATED", "Created";
        /// Student is working on it
        InProgress => "IN_PROGRESS", "In Progress";
        /// Objective met
        Achieved => "ACHIEVED", "Achieved";
        /// Objective given up
        Abandoned => "ABANDONED", "Abandoned";
    }
}

tag_enum! {
    /// Actions that move an objective between statuses
    pub enum ObjectiveTransition ("objective transition") {
        /// Begin working on the objective
        Start => "START", "Start";
        /// Mark the objective as met
        Achieve => "ACHIEVE", "Achieve";
        /// Give up on the objective
        Abandon => "ABANDON", "Abandon";
    }
}

/// Transition table for objectives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveLifecycle;

impl StatusMachine for ObjectiveLifecycle {
    type Status = ObjectiveStatus;
    type Transition = ObjectiveTransition;

    const NAME: &'static str = "objective";
    const LABEL: &'static str = "Objective";

    fn initial_status() -> ObjectiveStatus {
        ObjectiveStatus::Created
    }

    fn resulting_status(
        status: ObjectiveStatus,
        transition: ObjectiveTransition,
    ) -> Option<ObjectiveStatus> {
        use ObjectiveStatus as S;
        use ObjectiveTransition as T;

        match (status, transition) {
            (S::Created, T::Start) => Some(S::InProgress),
            (S::InProgress, T::Achieve) => Some(S::Achieved),
            (S::Created | S::InProgress, T::Abandon) => Some(S::Abandoned),
            _ => None,
        }
    }
}
