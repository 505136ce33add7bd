//! Teacher lesson hourly rate lifecycle - a quoted rate is either active or inactive.
//!
//! Neither status is terminal; a rate can be toggled any number of times.

use super::machine::{StatusMachine, tag_enum};

tag_enum! {
    /// Whether a teacher's hourly rate is currently offered
    pub enum HourlyRateStatus ("hourly rate status") {
        /// Rate is offered to students
        Active => "ACTIVE", "Active";
        /// Rate is withdrawn
        Inactive => "INACTIVE", "Inactive";
    }
}

tag_enum! {
    /// Actions that toggle an hourly rate
    pub enum HourlyRateTransition ("hourly rate transition") {
        /// Offer the rate again
        Activate => "ACTIVATE", "Activate";
        /// Withdraw the rate
        Deactivate => "DEACTIVATE", "Deactivate";
    }
}

/// Transition table for teacher lesson hourly rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourlyRateLifecycle;

impl StatusMachine for HourlyRateLifecycle {
    type Status = HourlyRateStatus;
    type Transition = HourlyRateTransition;

    const NAME: &'static str = "teacher_lesson_hourly_rate";
    const LABEL: &'static str = "Teacher Lesson Hourly Rate";

    fn initial_status() -> HourlyRateStatus {
        HourlyRateStatus::Active
    }

    fn resulting_status(
        status: HourlyRateStatus,
        transition: HourlyRateTransition,
    ) -> Option<HourlyRateStatus> {
        use HourlyRateStatus as S;
        use HourlyRateTransition as T;

        match (status, transition) {
            (S::Active, T::Deactivate) => Some(S::Inactive),
            (S::Inactive, T::Activate) => Some(S::Active),
            _ => None,
        }
    }
}
