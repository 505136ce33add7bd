//! Entity kinds by name.
//!
//! The typed API in [`super::machine`] is what service code should use. This module
//! answers the same questions when the kind, status and transition arrive as text,
//! as they do from the command line or a config file.

use super::{
    goal::GoalLifecycle,
    hourly_rate::HourlyRateLifecycle,
    lesson::LessonLifecycle,
    machine::{StatusMachine, Tag},
    objective::ObjectiveLifecycle,
    report::{TransitionTable, table_for},
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The four entity kinds that carry a status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EntityKind {
    /// A requested music lesson
    Lesson,
    /// A student's learning goal
    Goal,
    /// A step toward a goal
    Objective,
    /// A teacher's quoted hourly rate
    TeacherLessonHourlyRate,
}

impl EntityKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 4] = [
        Self::Lesson,
        Self::Goal,
        Self::Objective,
        Self::TeacherLessonHourlyRate,
    ];

    /// Lowercase kind name, matching [`StatusMachine::NAME`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lesson => LessonLifecycle::NAME,
            Self::Goal => GoalLifecycle::NAME,
            Self::Objective => ObjectiveLifecycle::NAME,
            Self::TeacherLessonHourlyRate => HourlyRateLifecycle::NAME,
        }
    }

    /// Human-readable kind name, matching [`StatusMachine::LABEL`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lesson => LessonLifecycle::LABEL,
            Self::Goal => GoalLifecycle::LABEL,
            Self::Objective => ObjectiveLifecycle::LABEL,
            Self::TeacherLessonHourlyRate => HourlyRateLifecycle::LABEL,
        }
    }

    /// Parses `status` and `transition` for this kind and looks up the outcome.
    ///
    /// Returns the canonical name of the resulting status, or `None` when the transition
    /// is not defined. Unparseable input is an [`Error::UnknownValue`]; an undefined
    /// transition is not an error.
    pub fn evaluate(self, status: &str, transition: &str) -> Result<Option<&'static str>> {
        match self {
            Self::Lesson => evaluate_with::<LessonLifecycle>(status, transition),
            Self::Goal => evaluate_with::<GoalLifecycle>(status, transition),
            Self::Objective => evaluate_with::<ObjectiveLifecycle>(status, transition),
            Self::TeacherLessonHourlyRate => {
                evaluate_with::<HourlyRateLifecycle>(status, transition)
            }
        }
    }

    /// Parses `status` and `transition` for this kind and applies the table.
    ///
    /// Returns the canonical name of the resulting status. An undefined transition is an
    /// [`Error::InvalidTransition`] naming the canonical status and transition, whatever
    /// case the input used.
    pub fn transition(self, status: &str, transition: &str) -> Result<&'static str> {
        match self {
            Self::Lesson => transition_with::<LessonLifecycle>(status, transition),
            Self::Goal => transition_with::<GoalLifecycle>(status, transition),
            Self::Objective => transition_with::<ObjectiveLifecycle>(status, transition),
            Self::TeacherLessonHourlyRate => {
                transition_with::<HourlyRateLifecycle>(status, transition)
            }
        }
    }

    /// Text-level counterpart of [`StatusMachine::is_valid_transition`].
    pub fn is_valid_transition(self, status: &str, transition: &str) -> Result<bool> {
        self.evaluate(status, transition).map(|outcome| outcome.is_some())
    }

    /// Canonical name of the status new entities of this kind start in.
    #[must_use]
    pub fn initial_status(self) -> &'static str {
        match self {
            Self::Lesson => LessonLifecycle::initial_status().as_str(),
            Self::Goal => GoalLifecycle::initial_status().as_str(),
            Self::Objective => ObjectiveLifecycle::initial_status().as_str(),
            Self::TeacherLessonHourlyRate => HourlyRateLifecycle::initial_status().as_str(),
        }
    }

    /// The full transition table of this kind, flattened for display.
    #[must_use]
    pub fn table(self) -> TransitionTable {
        match self {
            Self::Lesson => table_for::<LessonLifecycle>(),
            Self::Goal => table_for::<GoalLifecycle>(),
            Self::Objective => table_for::<ObjectiveLifecycle>(),
            Self::TeacherLessonHourlyRate => table_for::<HourlyRateLifecycle>(),
        }
    }
}

fn evaluate_with<M: StatusMachine>(
    status: &str,
    transition: &str,
) -> Result<Option<&'static str>> {
    let status: M::Status = status.parse()?;
    let transition: M::Transition = transition.parse()?;
    Ok(M::resulting_status(status, transition).map(Tag::as_str))
}

fn transition_with<M: StatusMachine>(status: &str, transition: &str) -> Result<&'static str> {
    let status: M::Status = status.parse()?;
    let transition: M::Transition = transition.parse()?;
    M::transition(status, transition).map(Tag::as_str)
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        match wanted.as_str() {
            "rate" | "hourly_rate" => Ok(Self::TeacherLessonHourlyRate),
            other => Self::ALL
                .into_iter()
                .find(|kind| kind.as_str() == other)
                .ok_or_else(|| Error::unknown("entity kind", s)),
        }
    }
}

impl TryFrom<String> for EntityKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
