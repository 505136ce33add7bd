//! Goal lifecycle - a learning goal is created, worked on, and either completed or cancelled.

use super::machine::{StatusMachine, tag_enum};

tag_enum! {
    /// Where a goal sits in its lifecycle
    pub enum GoalStatus ("goal status") {
        /// Goal has been set but work has not started
        Created => "CREATED", "Created";
        /// Student is working toward the goal
        InProgress => "IN_PROGRESS", "In Progress";
        /// Goal was reached
        Completed => "COMPLETED", "Completed";
        /// Goal was dropped
        Cancelled => "CANCELLED", "Cancelled";
    }
}

tag_enum! {
    /// Actions that move a goal between statuses
    pub enum GoalTransition ("goal transition") {
        /// Begin working on the goal
        Start => "START", "Start";
        /// Mark the goal as reached
        Complete => "COMPLETE", "Complete";
        /// Drop the goal
        Cancel => "CANCEL", "Cancel";
    }
}

/// Transition table for goals.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalLifecycle;

impl StatusMachine for GoalLifecycle {
    type Status = GoalStatus;
    type Transition = GoalTransition;

    const NAME: &'static str = "goal";
    const LABEL: &'static str = "Goal";

    fn initial_status() -> GoalStatus {
        GoalStatus::Created
    }

    fn resulting_status(status: GoalStatus, transition: GoalTransition) -> Option<GoalStatus> {
        use GoalStatus as S;
        use GoalTransition as T;

        match (status, transition) {
            (S::Created, T::Start) => Some(S::InProgress),
            (S::InProgress, T::Complete) => Some(S::Completed),
            (S::Created | S::InProgress, T::Cancel) => Some(S::Cancelled),
            _ => None,
        }
    }
}
