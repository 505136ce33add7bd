//! Lesson lifecycle - a student requests a lesson, the teacher accepts or rejects it,
//! an accepted lesson is completed, and any decided lesson can later be voided.
//!
//! `VOIDED` is terminal. `VOID` is the one transition reachable from several
//! otherwise-settled states (`ACCEPTED`, `REJECTED`, `COMPLETED`).

use super::machine::{StatusMachine, tag_enum};

tag_enum! {
    /// Where a lesson sits in its lifecycle
    pub enum LessonStatus ("lesson status") {
        /// Student asked for the lesson, teacher has not answered yet
        Requested => "REQUESTED", "Requested";
        /// Teacher accepted the request
        Accepted => "ACCEPTED", "Accepted";
        /// Teacher turned the request down
        Rejected => "REJECTED", "Rejected";
        /// Lesson took place
        Completed => "COMPLETED", "Completed";
        /// Lesson was cancelled after the fact
        Voided => "VOIDED", "Voided";
    }
}

tag_enum! {
    /// Actions that move a lesson between statuses
    pub enum LessonTransition ("lesson transition") {
        /// Teacher accepts a requested lesson
        Accept => "ACCEPT", "Accept";
        /// Teacher rejects a requested lesson
        Reject => "REJECT", "Reject";
        /// Mark an accepted lesson as held
        Complete => "COMPLETE", "Complete";
        /// Cancel a decided lesson
        Void => "VOID", "Void";
    }
}

/// Transition table for lessons.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonLifecycle;

impl StatusMachine for LessonLifecycle {
    type Status = LessonStatus;
    type Transition = LessonTransition;

    const NAME: &'static str = "lesson";
    const LABEL: &'static str = "Lesson";

    fn initial_status() -> LessonStatus {
        LessonStatus::Requested
    }

    fn resulting_status(
        status: LessonStatus,
        transition: LessonTransition,
    ) -> Option<LessonStatus> {
        use LessonStatus as S;
        use LessonTransition as T;

        match (status, transition) {
            (S::Requested, T::Accept) => Some(S::Accepted),
            (S::Requested, T::Reject) => Some(S::Rejected),
            (S::Accepted, T::Complete) => Some(S::Completed),
            (S::Accepted | S::Rejected | S::Completed, T::Void) => Some(S::Voided),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::machine::{Tag, is_valid_transition, resulting_status};
    use crate::test_utils::{assert_table_invariants, expected_rows};

    type S = LessonStatus;
    type T = LessonTransition;

    #[test]
    fn test_request_can_be_accepted() {
        assert!(is_valid_transition::<LessonLifecycle>(S::Requested, T::Accept));
        assert_eq!(
            resulting_status::<LessonLifecycle>(S::Requested, T::Accept),
            Some(S::Accepted)
        );
    }

    #[test]
    fn test_request_cannot_be_completed() {
        assert!(!is_valid_transition::<LessonLifecycle>(S::Requested, T::Complete));
        assert_eq!(
            resulting_status::<LessonLifecycle>(S::Requested, T::Complete),
            None
        );
    }

    #[test]
    fn test_accepted_lesson_can_be_voided() {
        assert!(is_valid_transition::<LessonLifecycle>(S::Accepted, T::Void));
        assert_eq!(
            resulting_status::<LessonLifecycle>(S::Accepted, T::Void),
            Some(S::Voided)
        );
    }

    #[test]
    fn test_voided_is_terminal() {
        assert!(!is_valid_transition::<LessonLifecycle>(S::Voided, T::Accept));
        assert_eq!(resulting_status::<LessonLifecycle>(S::Voided, T::Void), None);
        assert!(LessonLifecycle::is_terminal(S::Voided));
    }

    #[test]
    fn test_reject_only_from_requested() {
        assert!(!is_valid_transition::<LessonLifecycle>(S::Accepted, T::Reject));
        assert_eq!(
            LessonLifecycle::available_transitions(S::Requested),
            vec![T::Accept, T::Reject]
        );
    }

    #[test]
    fn test_completed_lesson_can_be_voided() {
        assert!(is_valid_transition::<LessonLifecycle>(S::Completed, T::Void));
        assert_eq!(
            resulting_status::<LessonLifecycle>(S::Completed, T::Void),
            Some(S::Voided)
        );
        assert_eq!(LessonLifecycle::available_transitions(S::Completed), vec![T::Void]);
    }

    #[test]
    fn test_lesson_table_is_exact() {
        assert_table_invariants::<LessonLifecycle>();
        assert_eq!(
            expected_rows::<LessonLifecycle>(),
            vec![
                (S::Requested, T::Accept, S::Accepted),
                (S::Requested, T::Reject, S::Rejected),
                (S::Accepted, T::Complete, S::Completed),
                (S::Accepted, T::Void, S::Voided),
                (S::Rejected, T::Void, S::Voided),
                (S::Completed, T::Void, S::Voided),
            ]
        );
    }

    #[test]
    fn test_lesson_labels() {
        assert_eq!(S::Requested.label(), "Requested");
        assert_eq!(T::Void.label(), "Void");
        assert_eq!(LessonLifecycle::initial_status(), S::Requested);
    }
}
