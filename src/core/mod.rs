//! Core business logic - the status-transition engine and the per-kind tables.
//!
//! Everything here is pure and framework-agnostic. Service code loads an entity's
//! current status, asks the engine whether a transition is legal, and persists the
//! result itself.

/// Generic engine: the `StatusMachine` trait and lookup helpers
pub mod machine;

/// Goal statuses and transitions
pub mod goal;
/// Teacher lesson hourly rate statuses and transitions
pub mod hourly_rate;
/// Lesson statuses and transitions
pub mod lesson;
/// Objective statuses and transitions
pub mod objective;

/// Append-only status history of one entity
pub mod history;
/// Entity kinds addressed by name
pub mod kind;
/// Flattened transition tables for display
pub mod report;

pub use goal::{GoalLifecycle, GoalStatus, GoalTransition};
pub use history::{RecordOf, StatusHistory};
pub use hourly_rate::{HourlyRateLifecycle, HourlyRateStatus, HourlyRateTransition};
pub use kind::EntityKind;
pub use lesson::{LessonLifecycle, LessonStatus, LessonTransition};
pub use machine::{StatusMachine, Tag, is_valid_transition, resulting_status};
pub use objective::{ObjectiveLifecycle, ObjectiveStatus, ObjectiveTransition};

/// Status history of a lesson
pub type LessonHistory = StatusHistory<LessonLifecycle>;
/// Status history of a goal
pub type GoalHistory = StatusHistory<GoalLifecycle>;
/// Status history of an objective
pub type ObjectiveHistory = StatusHistory<ObjectiveLifecycle>;
/// Status history of a teacher lesson hourly rate
pub type HourlyRateHistory = StatusHistory<HourlyRateLifecycle>;
